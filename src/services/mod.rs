pub mod items_service;
pub mod stats_service;
pub mod users_service;

pub use items_service::ItemsService;
pub use stats_service::StatsService;
pub use users_service::UsersService;
