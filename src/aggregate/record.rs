use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Column names of both the run output and the report, in report order.
pub const COLUMNS: [&str; 3] = ["name", "time", "status"];

/// One row of a run's output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimingRecord {
    pub name: String,
    pub time: f64,
    #[serde(deserialize_with = "deserialize_status")]
    pub status: bool,
}

/// All rows of one run, in the order the command printed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedTable {
    pub rows: Vec<TimingRecord>,
}

impl ParsedTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<TimingRecord> for ParsedTable {
    fn from_iter<I: IntoIterator<Item = TimingRecord>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// Per-name averages across every run in which the name appeared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedRow {
    pub name: String,
    /// Mean elapsed time.
    pub time: f64,
    /// Fraction of contributing rows whose status was `true`.
    pub status: f64,
    /// Number of rows that contributed.
    pub samples: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregatedTable {
    pub rows: Vec<AggregatedRow>,
}

impl AggregatedTable {
    pub fn get(&self, name: &str) -> Option<&AggregatedRow> {
        self.rows.iter().find(|row| row.name == name)
    }
}

pub fn parse_status(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") || raw == "1" {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") || raw == "0" {
        Some(false)
    } else {
        None
    }
}

fn deserialize_status<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_status(&raw)
        .ok_or_else(|| D::Error::custom(format!("invalid status `{raw}`, expected true or false")))
}
