use std::collections::BTreeMap;

use tracing::debug;

use super::{
    AggregateError, AggregatedRow, AggregatedTable, ParsedTable, RenderOptions, Result, render,
};

#[derive(Debug, Default)]
struct Accumulator {
    time_sum: f64,
    passed: usize,
    samples: usize,
}

/// Concatenates `tables`, groups rows by name and averages each group.
///
/// Groups come out sorted by name. A name missing from a run simply has fewer samples.
/// An empty slice is rejected; tables with no rows yield an empty aggregate.
pub fn aggregate(tables: &[ParsedTable]) -> Result<AggregatedTable> {
    if tables.is_empty() {
        return Err(AggregateError::EmptyInput);
    }

    let mut groups: BTreeMap<&str, Accumulator> = BTreeMap::new();
    for record in tables.iter().flat_map(|table| &table.rows) {
        let group = groups.entry(record.name.as_str()).or_default();
        group.time_sum += record.time;
        group.passed += usize::from(record.status);
        group.samples += 1;
    }

    let rows = groups
        .into_iter()
        .map(|(name, group)| {
            let samples = group.samples as f64;
            AggregatedRow {
                name: name.to_string(),
                time: group.time_sum / samples,
                status: group.passed as f64 / samples,
                samples: group.samples,
            }
        })
        .collect::<Vec<_>>();
    debug!(tables = tables.len(), groups = rows.len(), "aggregated runs");
    Ok(AggregatedTable { rows })
}

/// Aggregates `tables` and renders the result with `options`.
pub fn mean(tables: &[ParsedTable], options: &RenderOptions) -> Result<String> {
    render(&aggregate(tables)?, options)
}
