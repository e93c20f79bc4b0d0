pub mod actor;
pub mod response;

pub use actor::Actor;
pub use response::{ApiResponse, ApiResult};
