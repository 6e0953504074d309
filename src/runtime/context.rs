use tracing::info;

use crate::config::BenchConfig;

use super::{AggregateService, DriverService, Result};

#[derive(Debug, Clone, Default)]
pub struct AppContext {
    driver_service: DriverService,
    aggregate_service: AggregateService,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &BenchConfig) -> Self {
        Self {
            driver_service: DriverService::new(config.command()),
            aggregate_service: AggregateService::new(config.render_options()),
        }
    }

    pub fn driver_service(&self) -> &DriverService {
        &self.driver_service
    }

    pub fn aggregate_service(&self) -> &AggregateService {
        &self.aggregate_service
    }

    /// Runs the benchmark `count` times and returns the rendered report.
    pub fn run(&self, count: i64) -> Result<String> {
        let outputs = self.driver_service.run(count)?;
        let report = self.aggregate_service.report(&outputs)?;
        info!(runs = outputs.len(), "report ready");
        Ok(report)
    }
}
