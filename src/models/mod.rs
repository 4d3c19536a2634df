pub mod item;
pub mod stats;
pub mod user;

pub use item::*;
pub use stats::*;
pub use user::*;
