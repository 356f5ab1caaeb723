pub mod log_service;
pub mod spending;
pub mod statistics;
pub mod streak;
