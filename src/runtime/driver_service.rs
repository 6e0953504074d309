use crate::driver::{BenchCommand, ProcessSource, RunSource, run_many};

use super::Result;

#[derive(Debug, Clone, Default)]
pub struct DriverService {
    command: BenchCommand,
}

impl DriverService {
    pub fn new(command: BenchCommand) -> Self {
        Self { command }
    }

    pub fn command(&self) -> &BenchCommand {
        &self.command
    }

    /// Runs the configured command `count` times.
    pub fn run(&self, count: i64) -> Result<Vec<String>> {
        let mut source = ProcessSource::new(self.command.clone());
        self.run_with(&mut source, count)
    }

    pub fn run_with(&self, source: &mut dyn RunSource, count: i64) -> Result<Vec<String>> {
        Ok(run_many(source, count)?)
    }
}
