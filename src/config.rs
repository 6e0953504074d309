use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::aggregate::{DEFAULT_PRECISION, RenderOptions, ReportFormat};
use crate::driver::BenchCommand;

/// Everything a single invocation of the tool needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    pub count: i64,
    pub precision: usize,
    pub format: ReportFormat,
    pub timeout: Option<Duration>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            count: 1,
            precision: DEFAULT_PRECISION,
            format: ReportFormat::default(),
            timeout: None,
        }
    }
}

impl BenchConfig {
    pub fn command(&self) -> BenchCommand {
        BenchCommand::default().with_timeout(self.timeout)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            precision: self.precision,
            format: self.format,
        }
    }
}
