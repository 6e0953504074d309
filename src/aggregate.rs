mod error;
mod mean;
mod parse;
mod record;
mod render;


pub use error::{AggregateError, Result};
pub use mean::{aggregate, mean};
pub use parse::{parse, parse_runs};
pub use record::{
    AggregatedRow, AggregatedTable, COLUMNS, ParsedTable, TimingRecord, parse_status,
};
pub use render::{DEFAULT_PRECISION, MAX_PRECISION, RenderOptions, ReportFormat, render};
