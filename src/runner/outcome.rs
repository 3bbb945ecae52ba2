//! Typed result of one compile-and-run cycle.

use std::fmt;
use std::process::ExitStatus;
use std::time::Duration;

/// How a finished program ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitKind {
    Code(i32),
    Signal(i32),
    Unknown,
}

impl ExitKind {
    pub fn from_status(status: &ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return ExitKind::Code(code);
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(sig) = status.signal() {
                return ExitKind::Signal(sig);
            }
        }
        ExitKind::Unknown
    }
}

impl fmt::Display for ExitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitKind::Code(code) => write!(f, "exit code {code}"),
            ExitKind::Signal(sig) => write!(f, "signal {sig}"),
            ExitKind::Unknown => f.write_str("unknown status"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Compiled and exited with status 0.
    Success { stdout: String },
    /// The compiler rejected the source; the binary was never run.
    CompileFailed { diagnostics: String },
    /// Compiled, but the program exited unsuccessfully.
    RunFailed {
        status: ExitKind,
        stdout: String,
        stderr: String,
    },
    /// Compiled, but the program was killed after exceeding the limit.
    TimedOut { limit: Duration },
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Success { .. })
    }

    /// One-line description for status bars.
    pub fn summary(&self) -> String {
        match self {
            RunOutcome::Success { .. } => "Run succeeded".to_string(),
            RunOutcome::CompileFailed { .. } => "Compilation failed".to_string(),
            RunOutcome::RunFailed { status, .. } => format!("Program failed with {status}"),
            RunOutcome::TimedOut { limit } => {
                format!("Program timed out after {}s", limit.as_secs_f32())
            }
        }
    }

    /// Text for the output pane.
    pub fn render(&self) -> String {
        match self {
            RunOutcome::Success { stdout } => {
                if stdout.is_empty() {
                    "(program produced no output)".to_string()
                } else {
                    stdout.clone()
                }
            }
            RunOutcome::CompileFailed { diagnostics } => {
                format!("compilation failed\n\n{}", diagnostics.trim_end())
            }
            RunOutcome::RunFailed { status, stdout, stderr } => {
                let mut text = format!("program failed with {status}");
                if !stdout.is_empty() {
                    text.push_str("\n\nSTDOUT:\n");
                    text.push_str(stdout.trim_end());
                }
                if !stderr.is_empty() {
                    text.push_str("\n\nSTDERR:\n");
                    text.push_str(stderr.trim_end());
                }
                text
            }
            RunOutcome::TimedOut { limit } => format!(
                "program was killed after {}s without finishing",
                limit.as_secs_f32()
            ),
        }
    }
}
