pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod services;
pub mod stats;
pub mod store;

pub use auth::Caller;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use query::ItemFilter;
pub use store::Store;
