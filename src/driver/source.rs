use tracing::{debug, info};

use super::{DriverError, Result};

const MAX_PREALLOCATED_RUNS: usize = 1024;

/// Something that can produce the captured output of one benchmark run.
pub trait RunSource {
    fn run_once(&mut self) -> Result<String>;
}

/// Calls `source` exactly `count` times in sequence and collects the outputs in call order.
///
/// `count` is checked before anything runs. The first failing run aborts the whole batch.
pub fn run_many<S: RunSource + ?Sized>(source: &mut S, count: i64) -> Result<Vec<String>> {
    if count < 1 {
        return Err(DriverError::InvalidCount(count));
    }
    let total = usize::try_from(count).map_err(|_| DriverError::InvalidCount(count))?;

    // Preallocate a bounded amount; `count` comes straight from the command line.
    let mut outputs = Vec::with_capacity(total.min(MAX_PREALLOCATED_RUNS));
    for index in 0..total {
        debug!(run = index + 1, total, "starting run");
        outputs.push(source.run_once()?);
    }
    info!(runs = outputs.len(), "all runs completed");
    Ok(outputs)
}
