use clap::ValueEnum;
use csv::WriterBuilder;
use serde::{Deserialize, Serialize};

use super::{AggregateError, AggregatedRow, AggregatedTable, COLUMNS, Result};

pub const DEFAULT_PRECISION: usize = 3;
/// Precision beyond this is clamped; `f64` carries no more significant decimals.
pub const MAX_PRECISION: usize = 12;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Tab-separated table
    #[default]
    Tsv,
    /// Comma-separated table
    Csv,
    /// JSON array of rows, including sample counts
    Json,
    /// YAML list of rows, including sample counts
    Yaml,
}

/// Settings for a single render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Digits after the decimal point for every numeric column.
    pub precision: usize,
    pub format: ReportFormat,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            format: ReportFormat::default(),
        }
    }
}

/// Serializes the aggregate. The output always ends with a newline.
///
/// `options.precision` is clamped to [`MAX_PRECISION`].
pub fn render(table: &AggregatedTable, options: &RenderOptions) -> Result<String> {
    let precision = options.precision.min(MAX_PRECISION);
    match options.format {
        ReportFormat::Tsv => render_delimited(table, b'\t', precision),
        ReportFormat::Csv => render_delimited(table, b',', precision),
        ReportFormat::Json => {
            let rows = rounded_rows(table, precision);
            let mut text = serde_json::to_string_pretty(&rows)?;
            text.push('\n');
            Ok(text)
        }
        ReportFormat::Yaml => Ok(serde_yaml::to_string(&rounded_rows(table, precision))?),
    }
}

fn render_delimited(table: &AggregatedTable, delimiter: u8, precision: usize) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    writer.write_record(COLUMNS)?;
    for row in &table.rows {
        let time = format!("{:.precision$}", row.time);
        let status = format!("{:.precision$}", row.status);
        writer.write_record([row.name.as_str(), time.as_str(), status.as_str()])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| AggregateError::Render(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| AggregateError::Render(err.to_string()))
}

fn rounded_rows(table: &AggregatedTable, precision: usize) -> Vec<AggregatedRow> {
    let scale = 10_f64.powi(precision as i32);
    let round = |value: f64| (value * scale).round() / scale;
    table
        .rows
        .iter()
        .map(|row| AggregatedRow {
            name: row.name.clone(),
            time: round(row.time),
            status: round(row.status),
            samples: row.samples,
        })
        .collect()
}
