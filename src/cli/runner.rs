use std::io::Write;
use std::time::Duration;

use clap::Parser;
use tracing::debug;

use crate::config::BenchConfig;
use crate::runtime::AppContext;

use super::logging;
use super::types::Cli;

pub fn run_cli() -> Result<(), String> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) if !error.use_stderr() => {
            // --help and --version
            error.print().map_err(|error| error.to_string())?;
            return Ok(());
        }
        Err(error) => return Err(error.render().to_string().trim_end().to_string()),
    };
    logging::init(cli.verbose, cli.quiet);

    let config = config_from_cli(&cli)?;
    debug!(?config, "resolved configuration");
    let app = AppContext::from_config(&config);
    let report = app.run(config.count).map_err(|error| error.to_string())?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(report.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|error| format!("failed to write report: {error}"))
}

fn config_from_cli(cli: &Cli) -> Result<BenchConfig, String> {
    let timeout = cli
        .timeout
        .map(|seconds| {
            Duration::try_from_secs_f64(seconds)
                .ok()
                .filter(|timeout| !timeout.is_zero())
                .ok_or_else(|| format!("timeout must be a positive number of seconds, got {seconds}"))
        })
        .transpose()?;
    Ok(BenchConfig {
        count: cli.count,
        precision: cli.precision,
        format: cli.format,
        timeout,
    })
}
