pub mod can;
pub mod matrix;
pub mod transitions;

pub use can::get as can_get;
pub use matrix::get as matrix_get;
pub use matrix::role_get as matrix_role_get;
pub use transitions::get as transitions_get;
pub use transitions::graph_get;
