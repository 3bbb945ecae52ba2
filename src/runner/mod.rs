//! Compile-and-run pipeline: scratch directory, compiler subprocess, program subprocess.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::process::Command;

use crate::config::Config;

mod error;
mod outcome;

pub use error::RunError;
pub use outcome::{ExitKind, RunOutcome};

/// Source file name inside each scratch directory.
pub const SOURCE_FILE: &str = "code.rs";
/// Compiled program name inside each scratch directory (platform suffix added).
pub const BINARY_NAME: &str = "code";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Compiling,
    Executing,
}

#[derive(Debug, Clone)]
pub struct RunnerSettings {
    pub compiler: String,
    pub compiler_args: Vec<String>,
    /// Limit on the compiled program's run time. Compilation is not bounded.
    pub timeout: Duration,
    /// Parent of the per-run scratch directories.
    pub work_dir: PathBuf,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            compiler: "rustc".to_string(),
            compiler_args: vec!["--edition".to_string(), "2021".to_string()],
            timeout: Duration::from_secs(10),
            work_dir: std::env::temp_dir().join("stylus_playground"),
        }
    }
}

impl RunnerSettings {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            compiler: cfg.compiler(),
            compiler_args: cfg.compiler_args(),
            timeout: cfg.run_timeout(),
            work_dir: cfg.work_dir(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Runner {
    settings: RunnerSettings,
}

impl Runner {
    pub fn new(settings: RunnerSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RunnerSettings {
        &self.settings
    }

    pub async fn run(&self, code: &str) -> Result<RunOutcome, RunError> {
        self.run_with_progress(code, |_| {}).await
    }

    /// Compile `code` and run the result, reporting each phase to `on_phase`.
    ///
    /// Every call gets its own scratch directory, removed before returning on
    /// all paths. A failed compile returns [`RunOutcome::CompileFailed`]
    /// without attempting to run anything.
    pub async fn run_with_progress<F>(&self, code: &str, mut on_phase: F) -> Result<RunOutcome, RunError>
    where
        F: FnMut(RunPhase) + Send,
    {
        let work_dir = &self.settings.work_dir;
        fs::create_dir_all(work_dir).map_err(|source| RunError::Scratch {
            path: work_dir.clone(),
            source,
        })?;
        let scratch = tempfile::Builder::new()
            .prefix("run-")
            .tempdir_in(work_dir)
            .map_err(|source| RunError::Scratch {
                path: work_dir.clone(),
                source,
            })?;
        debug!("scratch directory {}", scratch.path().display());

        let src_path = scratch.path().join(SOURCE_FILE);
        fs::write(&src_path, code).map_err(|source| RunError::WriteSource {
            path: src_path.clone(),
            source,
        })?;

        on_phase(RunPhase::Compiling);
        let bin_path = scratch.path().join(binary_file_name());
        if let Some(diagnostics) = self.compile(scratch.path(), &bin_path).await? {
            return Ok(RunOutcome::CompileFailed { diagnostics });
        }

        on_phase(RunPhase::Executing);
        let outcome = self.execute(scratch.path(), &bin_path).await?;
        info!("run finished: {}", outcome.summary());

        if let Err(e) = scratch.close() {
            warn!("failed to remove scratch directory: {e}");
        }
        Ok(outcome)
    }

    /// Returns the diagnostics when compilation fails.
    async fn compile(&self, dir: &Path, bin_path: &Path) -> Result<Option<String>, RunError> {
        info!(
            "compiling with {} {}",
            self.settings.compiler,
            self.settings.compiler_args.join(" ")
        );
        let output = Command::new(&self.settings.compiler)
            .args(&self.settings.compiler_args)
            .arg(SOURCE_FILE)
            .arg("-o")
            .arg(bin_path)
            .current_dir(dir)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| RunError::SpawnCompiler {
                program: self.settings.compiler.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        if output.status.success() {
            if !stderr.trim().is_empty() {
                debug!("compiler warnings:\n{stderr}");
            }
            return Ok(None);
        }

        let status = ExitKind::from_status(&output.status);
        info!("compilation failed with {status}");
        let diagnostics = if !stderr.trim().is_empty() {
            stderr.into_owned()
        } else if !stdout.trim().is_empty() {
            stdout.into_owned()
        } else {
            format!("{} exited with {status}", self.settings.compiler)
        };
        Ok(Some(diagnostics))
    }

    async fn execute(&self, dir: &Path, bin_path: &Path) -> Result<RunOutcome, RunError> {
        let child = Command::new(bin_path)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| RunError::SpawnProgram {
                path: bin_path.to_path_buf(),
                source,
            })?;

        let limit = self.settings.timeout;
        // Dropping the wait future drops the child, which kills it.
        let output = match tokio::time::timeout(limit, child.wait_with_output()).await {
            Ok(result) => result.map_err(RunError::Wait)?,
            Err(_) => {
                warn!("program exceeded {}s, killed", limit.as_secs_f32());
                return Ok(RunOutcome::TimedOut { limit });
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if output.status.success() {
            Ok(RunOutcome::Success { stdout })
        } else {
            Ok(RunOutcome::RunFailed {
                status: ExitKind::from_status(&output.status),
                stdout,
                stderr,
            })
        }
    }
}

fn binary_file_name() -> String {
    format!("{BINARY_NAME}{}", std::env::consts::EXE_SUFFIX)
}
