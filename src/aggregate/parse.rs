use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use super::{AggregateError, COLUMNS, ParsedTable, Result, TimingRecord};

/// Decodes one run's tab-delimited output.
///
/// The header must name exactly the `name`, `time` and `status` columns, in any order.
/// Every data row must have three fields, a numeric `time` and a boolean `status`.
/// Blank lines are ignored and fields are trimmed.
pub fn parse(text: &str) -> Result<ParsedTable> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|err| map_csv_error(err, None))?
        .clone();
    validate_header(&headers)?;

    let rows = reader
        .deserialize::<TimingRecord>()
        .map(|row| row.map_err(|err| map_csv_error(err, Some(&headers))))
        .collect::<Result<Vec<_>>>()?;
    Ok(ParsedTable { rows })
}

/// Parses every run, tagging failures with the 1-based run number.
pub fn parse_runs<S: AsRef<str>>(outputs: &[S]) -> Result<Vec<ParsedTable>> {
    outputs
        .iter()
        .enumerate()
        .map(|(index, output)| {
            let table = parse(output.as_ref()).map_err(|err| err.in_run(index + 1))?;
            debug!(run = index + 1, rows = table.len(), "parsed run output");
            Ok(table)
        })
        .collect()
}

fn validate_header(headers: &StringRecord) -> Result<()> {
    if headers.is_empty() || headers.iter().all(str::is_empty) {
        return Err(AggregateError::Header("missing header row".to_string()));
    }
    if headers.len() != COLUMNS.len() {
        return Err(AggregateError::Header(format!(
            "expected {} columns ({}), found {}",
            COLUMNS.len(),
            COLUMNS.join(", "),
            headers.len()
        )));
    }
    for column in COLUMNS {
        let occurrences = headers.iter().filter(|header| *header == column).count();
        if occurrences != 1 {
            return Err(AggregateError::Header(format!(
                "column `{column}` must appear exactly once, found {occurrences}"
            )));
        }
    }
    Ok(())
}

fn map_csv_error(err: csv::Error, headers: Option<&StringRecord>) -> AggregateError {
    let line = err.position().map(|position| position.line()).unwrap_or(0);
    let reason = match err.kind() {
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => format!("expected {expected_len} columns, found {len}"),
        csv::ErrorKind::Deserialize { err, .. } => match err.field() {
            Some(field) => format!(
                "column `{}`: {}",
                headers
                    .and_then(|headers| headers.get(field as usize))
                    .unwrap_or("?"),
                err.kind()
            ),
            None => err.kind().to_string(),
        },
        _ => err.to_string(),
    };
    AggregateError::Parse { line, reason }
}
