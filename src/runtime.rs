mod aggregate_service;
mod context;
mod driver_service;
mod error;


pub use aggregate_service::AggregateService;
pub use context::AppContext;
pub use driver_service::DriverService;
pub use error::{AppError, Result};
