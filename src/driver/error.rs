use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DriverError>;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("count must be greater than or equal to 1, got {0}")]
    InvalidCount(i64),

    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited unsuccessfully ({status})")]
    Execution { program: String, status: ExitStatus },

    #[error("`{program}` produced no output on stdout")]
    EmptyOutput { program: String },

    #[error("`{program}` did not finish within {timeout:?} and was killed")]
    Timeout { program: String, timeout: Duration },

    #[error("`{program}` wrote non UTF-8 text to stdout")]
    Decode { program: String },

    #[error("process I/O failure: {0}")]
    Io(#[from] std::io::Error),
}
