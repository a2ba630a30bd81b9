//! Error taxonomy for the update command.

use std::path::PathBuf;
use std::process::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    #[error("Cannot obtain next SDK version. Try to run with --sdkVersion <sdkVersion> flag.")]
    VersionUnresolved,

    #[error("`{command}` failed")]
    SubprocessFailed {
        command: String,
        #[source]
        reason: SubprocessFailure,
    },

    #[error("Failed to remove {}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid git ref: {0:?}")]
    InvalidRef(String),

    #[error("Failed to read SDK versions from {}: {reason}", .path.display())]
    SdkVersions { path: PathBuf, reason: String },
}

/// Why an external process did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum SubprocessFailure {
    #[error("could not be started: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("{status}{}", format_stderr(.stderr))]
    Exit { status: ExitStatus, stderr: String },
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

impl UpdateError {
    pub(crate) fn spawn(command: impl Into<String>, error: std::io::Error) -> Self {
        Self::SubprocessFailed {
            command: command.into(),
            reason: SubprocessFailure::Spawn(error),
        }
    }

    pub(crate) fn exit(command: impl Into<String>, status: ExitStatus, stderr: String) -> Self {
        Self::SubprocessFailed {
            command: command.into(),
            reason: SubprocessFailure::Exit { status, stderr },
        }
    }
}
