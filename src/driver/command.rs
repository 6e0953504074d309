use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;

/// Script the driver runs when nothing else is supplied, relative to the working directory.
pub const DEFAULT_PROGRAM: &str = "./time-tests.sh";

/// The external timing command and how long a single invocation may take.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub timeout: Option<Duration>,
}

impl Default for BenchCommand {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
            args: Vec::new(),
            timeout: None,
        }
    }
}

impl BenchCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn display_name(&self) -> String {
        self.program.display().to_string()
    }

    pub(super) fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}
