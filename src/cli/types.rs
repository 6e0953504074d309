use clap::{ArgAction, Parser};

use crate::aggregate::{DEFAULT_PRECISION, MAX_PRECISION, ReportFormat};

#[derive(Debug, Parser)]
#[command(
    name = "bench-avg",
    version,
    about = "Run ./time-tests.sh repeatedly and report the mean time per test"
)]
pub(super) struct Cli {
    /// Number of times to run the timing script (at least 1)
    #[arg(allow_negative_numbers = true)]
    pub(super) count: i64,

    /// Digits after the decimal point in the report
    #[arg(long, default_value_t = DEFAULT_PRECISION, value_parser = parse_precision)]
    pub(super) precision: usize,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Tsv)]
    pub(super) format: ReportFormat,

    /// Kill a run that takes longer than this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub(super) timeout: Option<f64>,

    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub(super) verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub(super) quiet: bool,
}

fn parse_precision(raw: &str) -> Result<usize, String> {
    let precision = raw
        .parse::<usize>()
        .map_err(|error| format!("`{raw}` is not a number of digits: {error}"))?;
    if precision > MAX_PRECISION {
        return Err(format!("precision must be at most {MAX_PRECISION}"));
    }
    Ok(precision)
}
