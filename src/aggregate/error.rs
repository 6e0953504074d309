use thiserror::Error;

pub type Result<T> = std::result::Result<T, AggregateError>;

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("malformed table header: {0}")]
    Header(String),

    #[error("malformed row at line {line}: {reason}")]
    Parse { line: u64, reason: String },

    #[error("run {run}: {source}")]
    InRun {
        run: usize,
        #[source]
        source: Box<AggregateError>,
    },

    #[error("no runs to aggregate")]
    EmptyInput,

    #[error("report rendering failure: {0}")]
    Render(String),

    #[error("delimited text failure: {0}")]
    Csv(#[from] csv::Error),

    #[error("report JSON serialization failure: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("report YAML serialization failure: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),
}

impl AggregateError {
    pub(super) fn in_run(self, run: usize) -> Self {
        Self::InRun {
            run,
            source: Box::new(self),
        }
    }

    /// True when the error comes from input that does not match the table schema.
    pub fn is_parse_error(&self) -> bool {
        match self {
            Self::Header(_) | Self::Parse { .. } => true,
            Self::InRun { source, .. } => source.is_parse_error(),
            _ => false,
        }
    }
}
