pub mod coin_service;
pub mod dispatcher;
pub mod portfolio_service;
pub mod statistics_service;
pub mod sync_service;
