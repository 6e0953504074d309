use std::collections::VecDeque;
use std::time::Duration;

use super::{BenchCommand, DriverError, ProcessSource, Result, RunSource, run_command, run_many};

/// Replays canned results and records how many times it was asked.
struct ScriptedSource {
    results: VecDeque<Result<String>>,
    calls: usize,
}

impl ScriptedSource {
    fn new(results: Vec<Result<String>>) -> Self {
        Self {
            results: results.into(),
            calls: 0,
        }
    }
}

impl RunSource for ScriptedSource {
    fn run_once(&mut self) -> Result<String> {
        self.calls += 1;
        self.results
            .pop_front()
            .unwrap_or_else(|| Ok("name\ttime\tstatus\n".to_string()))
    }
}

fn shell(script: &str) -> BenchCommand {
    BenchCommand::new("sh").with_args(["-c", script])
}

#[test]
fn non_positive_count_is_rejected_before_any_run() {
    for count in [0, -1, -40] {
        let mut source = ScriptedSource::new(vec![]);
        let err = run_many(&mut source, count).expect_err("must fail");
        assert!(matches!(err, DriverError::InvalidCount(value) if value == count));
        assert_eq!(source.calls, 0);
    }
}

#[test]
fn runs_exactly_count_times_in_order() {
    let mut source = ScriptedSource::new(vec![
        Ok("first".to_string()),
        Ok("second".to_string()),
        Ok("third".to_string()),
    ]);
    let outputs = run_many(&mut source, 3).expect("runs");
    assert_eq!(outputs, vec!["first", "second", "third"]);
    assert_eq!(source.calls, 3);
}

#[test]
fn first_failure_stops_the_batch() {
    let mut source = ScriptedSource::new(vec![
        Ok("ok".to_string()),
        Err(DriverError::EmptyOutput {
            program: "bench".to_string(),
        }),
        Ok("never".to_string()),
    ]);
    let err = run_many(&mut source, 3).expect_err("must fail");
    assert!(matches!(err, DriverError::EmptyOutput { .. }));
    assert_eq!(source.calls, 2);
}

#[test]
fn default_command_is_the_timing_script() {
    let command = BenchCommand::default();
    assert_eq!(command.display_name(), "./time-tests.sh");
    assert!(command.args.is_empty());
    assert_eq!(command.timeout, None);
}

#[cfg(unix)]
#[test]
fn captures_stdout_only() {
    let command = shell("printf 'name\\ttime\\tstatus\\n'; echo noise >&2");
    let output = run_command(&command).expect("run");
    assert_eq!(output, "name\ttime\tstatus\n");
}

#[cfg(unix)]
#[test]
fn non_zero_exit_is_an_execution_error() {
    let err = run_command(&shell("echo partial; exit 3")).expect_err("must fail");
    match err {
        DriverError::Execution { status, .. } => assert_eq!(status.code(), Some(3)),
        other => panic!("unexpected error: {other}"),
    }
}

#[cfg(unix)]
#[test]
fn empty_stdout_is_rejected() {
    let err = run_command(&shell("true")).expect_err("must fail");
    assert!(matches!(err, DriverError::EmptyOutput { .. }));
}

#[cfg(unix)]
#[test]
fn missing_program_fails_to_spawn() {
    let command = BenchCommand::new("./definitely-not-a-timing-script.sh");
    let err = run_command(&command).expect_err("must fail");
    assert!(matches!(err, DriverError::Spawn { .. }));
}

#[cfg(unix)]
#[test]
fn invalid_utf8_is_a_decode_error() {
    let err = run_command(&shell("printf '\\377\\376'")).expect_err("must fail");
    assert!(matches!(err, DriverError::Decode { .. }));
}

#[cfg(unix)]
#[test]
fn slow_run_is_killed_after_timeout() {
    let command = shell("exec sleep 5").with_timeout(Some(Duration::from_millis(100)));
    let err = run_command(&command).expect_err("must time out");
    assert!(matches!(err, DriverError::Timeout { .. }));
}

#[cfg(unix)]
#[test]
fn fast_run_finishes_within_timeout() {
    let command = shell("printf 'a\\n'").with_timeout(Some(Duration::from_secs(30)));
    assert_eq!(run_command(&command).expect("run"), "a\n");
}

#[cfg(unix)]
#[test]
fn process_source_counts_invocations() {
    let mut source = ProcessSource::new(shell("echo run"));
    let outputs = run_many(&mut source, 2).expect("runs");
    assert_eq!(outputs, vec!["run\n", "run\n"]);
    assert_eq!(source.invocations(), 2);
}

#[test]
fn huge_count_does_not_preallocate_every_run() {
    let mut source = ScriptedSource::new(vec![Err(DriverError::EmptyOutput {
        program: "bench".to_string(),
    })]);
    let err = run_many(&mut source, i64::MAX).expect_err("must fail");
    assert!(matches!(err, DriverError::EmptyOutput { .. }));
    assert_eq!(source.calls, 1);
}

#[cfg(unix)]
#[test]
fn timeout_covers_stdout_held_open_by_a_background_process() {
    let command = shell("sleep 5 & echo started").with_timeout(Some(Duration::from_millis(200)));
    let started = std::time::Instant::now();
    let err = run_command(&command).expect_err("must time out");
    assert!(matches!(err, DriverError::Timeout { .. }));
    assert!(started.elapsed() < Duration::from_secs(4));
}
