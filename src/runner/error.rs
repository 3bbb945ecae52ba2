use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the run machinery itself, as opposed to failures of the user's code.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Failed to prepare scratch directory {path:?}: {source}")]
    Scratch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write source file {path:?}: {source}")]
    WriteSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to launch compiler '{program}': {source}")]
    SpawnCompiler {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to launch compiled program {path:?}: {source}")]
    SpawnProgram {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed while waiting for the program: {0}")]
    Wait(#[source] io::Error),
}
