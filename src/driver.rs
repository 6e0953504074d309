mod command;
mod error;
mod process;
mod source;

#[cfg(test)]
mod tests;

pub use command::{BenchCommand, DEFAULT_PROGRAM};
pub use error::{DriverError, Result};
pub use process::{ProcessSource, run_command};
pub use source::{RunSource, run_many};
