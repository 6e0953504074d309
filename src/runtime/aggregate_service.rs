use crate::aggregate::{AggregatedTable, RenderOptions, aggregate, parse_runs, render};

use super::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateService {
    options: RenderOptions,
}

impl AggregateService {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn aggregate<S: AsRef<str>>(&self, outputs: &[S]) -> Result<AggregatedTable> {
        let tables = parse_runs(outputs)?;
        Ok(aggregate(&tables)?)
    }

    /// Parses every run output and renders the per-name means.
    pub fn report<S: AsRef<str>>(&self, outputs: &[S]) -> Result<String> {
        let table = self.aggregate(outputs)?;
        Ok(render(&table, &self.options)?)
    }
}
