//! Error types for the dispatcher and the project scaffolder.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the dispatcher. Every variant maps to exit code 1.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Error executing command '{command}': {detail:#}")]
    HandlerFailure {
        command: String,
        detail: anyhow::Error,
    },
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Follow-up line printed under the error, if any.
    pub fn hint(&self) -> Option<String> {
        match self {
            CliError::UnknownCommand(_) => Some(format!(
                "Run '{} help' for available commands.",
                crate::cmd::BIN_NAME
            )),
            CliError::HandlerFailure { .. } => None,
        }
    }
}

/// Filesystem failures raised while scaffolding a project.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("failed to resolve current directory")]
    CurrentDir(#[source] io::Error),

    #[error("failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to render {file}")]
    Render {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
