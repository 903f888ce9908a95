pub mod idea;
pub mod user;

pub use idea::*;
pub use user::*;
