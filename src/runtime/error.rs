use crate::aggregate::AggregateError;
use crate::driver::DriverError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Driver(#[from] DriverError),

    #[error("failed to aggregate run output: {0}")]
    Aggregate(#[from] AggregateError),
}
