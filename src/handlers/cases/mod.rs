pub mod assign;
pub mod authorize;
pub mod transition;

pub use assign::post as assign_post;
pub use authorize::post as authorize_post;
pub use transition::post as transition_post;
