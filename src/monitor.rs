//! External process monitoring
//!
//! Launches one benchmark target with captured stdio, polls its resident
//! set size at a fixed interval until it exits, and parses the elapsed
//! time the target prints on stdout.
//!
//! # Measurement bound
//!
//! Peak memory is detected by sampling: the monitor reads the target's RSS
//! every `poll_interval` (10 ms by default) and keeps the maximum it saw.
//! A spike that rises and falls between two poll ticks is invisible, so the
//! reported peak is a lower bound on the true peak. This is a documented
//! limitation of the approach, not a bug.
//!
//! A target that never exits blocks the monitor indefinitely; no timeout
//! is applied.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::OnceLock;
use std::thread;
use std::time::Duration;

use regex::Regex;
use sysinfo::{Pid, System};
use tracing::debug;

/// Default pause between resident-memory polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// One benchmark target: a label plus the command that launches it.
///
/// Immutable once built; the label is what shows up in tables and charts.
#[derive(Debug, Clone)]
pub struct Variant {
    /// Unique display label, e.g. `Rust_Bubble`
    pub label: String,
    /// Executable to launch
    pub program: PathBuf,
    /// Arguments passed to the executable
    pub args: Vec<String>,
}

impl Variant {
    pub fn new(label: impl Into<String>, program: impl Into<PathBuf>, args: &[&str]) -> Self {
        Self {
            label: label.into(),
            program: program.into(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
        }
    }
}

/// One successful monitored run.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Elapsed time in milliseconds, exactly as printed by the target
    pub elapsed_ms: f64,
    /// Highest resident set size observed, in KiB
    pub peak_memory_kb: f64,
    /// False when the target exited before a single memory poll completed;
    /// `peak_memory_kb` is 0 in that case
    pub memory_measured: bool,
}

/// Outcome of a single resident-memory poll.
///
/// The target can exit between the liveness check and the memory query.
/// That race is an expected transient, so it gets its own variant instead
/// of being reported as an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MemPoll {
    /// Current RSS in KiB
    Sampled(f64),
    /// Process exited before the query; finalize the peak seen so far
    ProcessGone,
}

/// Errors produced by a monitored run
#[derive(Debug, Clone)]
pub enum MonitorError {
    /// Launch target does not exist; fatal for the whole session
    TargetNotFound(PathBuf),
    /// Target exited with a nonzero code; carries its stderr
    ProcessFailure { stderr: String },
    /// Target stdout had no recognizable `Time:` line
    ParseFailure,
    /// Wait or pipe error while supervising the target
    Io(String),
}

impl fmt::Display for MonitorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorError::TargetNotFound(path) => {
                write!(f, "Target executable '{}' not found", path.display())
            }
            MonitorError::ProcessFailure { stderr } => {
                write!(f, "Target exited with a nonzero code: {}", stderr.trim())
            }
            MonitorError::ParseFailure => {
                write!(f, "Target output contained no 'Time:' line")
            }
            MonitorError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for MonitorError {}

impl MonitorError {
    /// True for the one error that aborts the whole benchmark session.
    pub fn is_fatal(&self) -> bool {
        matches!(self, MonitorError::TargetNotFound(_))
    }
}

static TIME_RE: OnceLock<Regex> = OnceLock::new();

fn time_re() -> &'static Regex {
    TIME_RE.get_or_init(|| Regex::new(r"Time:\s*(\d+\.?\d*)").expect("time regex"))
}

/// Extract the elapsed milliseconds from a target's stdout.
///
/// Looks for the first `Time: <number>` occurrence anywhere in the text.
pub fn parse_elapsed_ms(stdout: &str) -> Option<f64> {
    time_re()
        .captures(stdout)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Supervises one target process per [`ProcessMonitor::run`] call.
pub struct ProcessMonitor {
    poll_interval: Duration,
}

impl ProcessMonitor {
    pub fn new(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }

    /// Launch `variant`, watch it until exit, and produce a [`Sample`].
    ///
    /// The caller blocks for the target's whole lifetime: the monitor
    /// alternates a liveness check, a memory poll, and a short sleep.
    pub fn run(&self, variant: &Variant) -> Result<Sample, MonitorError> {
        let mut child = Command::new(&variant.program)
            .args(&variant.args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => {
                    MonitorError::TargetNotFound(variant.program.clone())
                }
                _ => MonitorError::Io(e.to_string()),
            })?;

        let pid = Pid::from_u32(child.id());
        let mut sys = System::new();
        let mut peak_kb = 0.0_f64;
        let mut polls = 0_usize;

        loop {
            let exited = child
                .try_wait()
                .map_err(|e| MonitorError::Io(e.to_string()))?
                .is_some();
            if exited {
                break;
            }

            match poll_memory(&mut sys, pid) {
                MemPoll::Sampled(kb) => {
                    polls += 1;
                    if kb > peak_kb {
                        peak_kb = kb;
                    }
                }
                MemPoll::ProcessGone => break,
            }

            thread::sleep(self.poll_interval);
        }

        let output = child
            .wait_with_output()
            .map_err(|e| MonitorError::Io(e.to_string()))?;

        if !output.status.success() {
            return Err(MonitorError::ProcessFailure {
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let elapsed_ms = parse_elapsed_ms(&stdout).ok_or(MonitorError::ParseFailure)?;

        if polls == 0 {
            debug!(label = %variant.label, "target exited before any memory poll");
        }

        Ok(Sample {
            elapsed_ms,
            peak_memory_kb: peak_kb,
            memory_measured: polls > 0,
        })
    }
}

impl Default for ProcessMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}

/// Query the current RSS of `pid` in KiB.
fn poll_memory(sys: &mut System, pid: Pid) -> MemPoll {
    if !sys.refresh_process(pid) {
        return MemPoll::ProcessGone;
    }
    match sys.process(pid) {
        Some(process) => MemPoll::Sampled(process.memory() as f64 / 1024.0),
        None => MemPoll::ProcessGone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn shell_variant(label: &str, script: &str) -> Variant {
        Variant::new(label, "/bin/sh", &["-c", script])
    }

    #[test]
    fn test_parse_time_line() {
        let out = "--- Performance ---\nTime: 12.5000\nMemory: N/A\n";
        assert_eq!(parse_elapsed_ms(out), Some(12.5));
    }

    #[test]
    fn test_parse_integer_time() {
        assert_eq!(parse_elapsed_ms("Time: 42\n"), Some(42.0));
    }

    #[test]
    fn test_parse_time_embedded_in_report() {
        let out = "--- System Info ---\nLanguage: Rust\n\n--- Performance ---\nTime: 0.0713\n";
        assert_eq!(parse_elapsed_ms(out), Some(0.0713));
    }

    #[test]
    fn test_parse_missing_time_line() {
        assert_eq!(parse_elapsed_ms("no timing information here\n"), None);
    }

    #[test]
    fn test_missing_target_is_fatal() {
        let monitor = ProcessMonitor::default();
        let variant = Variant::new("Ghost", "/nonexistent/sorter-binary", &["bubble"]);
        let err = monitor.run(&variant).unwrap_err();
        assert!(matches!(err, MonitorError::TargetNotFound(_)));
        assert!(err.is_fatal());
    }

    #[cfg(unix)]
    #[test]
    fn test_fast_target_yields_sample() {
        let monitor = ProcessMonitor::default();
        let variant = shell_variant("Fast", "echo 'Time: 12.5000'");
        let sample = monitor.run(&variant).unwrap();
        assert_eq!(sample.elapsed_ms, 12.5);
        // Whether a poll landed is timing-dependent; an unmeasured run must
        // still report a zero peak rather than fail.
        if !sample.memory_measured {
            assert_eq!(sample.peak_memory_kb, 0.0);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_slow_target_gets_memory_polled() {
        let monitor = ProcessMonitor::default();
        let variant = shell_variant("Slow", "sleep 0.2; echo 'Time: 200.0'");
        let sample = monitor.run(&variant).unwrap();
        assert!(sample.memory_measured);
        assert!(sample.peak_memory_kb > 0.0);
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_process_failure() {
        let monitor = ProcessMonitor::default();
        let variant = shell_variant("Broken", "echo 'input file missing' >&2; exit 3");
        let err = monitor.run(&variant).unwrap_err();
        match err {
            MonitorError::ProcessFailure { stderr } => {
                assert!(stderr.contains("input file missing"));
            }
            other => panic!("expected ProcessFailure, got {:?}", other),
        }
        assert!(!MonitorError::ParseFailure.is_fatal());
    }

    #[cfg(unix)]
    #[test]
    fn test_output_without_time_is_parse_failure() {
        let monitor = ProcessMonitor::default();
        let variant = shell_variant("Silent", "echo 'done sorting'");
        let err = monitor.run(&variant).unwrap_err();
        assert!(matches!(err, MonitorError::ParseFailure));
    }
}
