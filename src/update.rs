//! The `update-react-native` command.
//!
//! Optionally moves the React Native submodule to another ref, resolves the
//! SDK version to build for, wipes the vendored `ReactAndroid` and
//! `ReactCommon` directories and regenerates them with the Gradle code
//! transformer. Steps run strictly in that order and the first error aborts
//! the rest; nothing is rolled back.

use crate::error::UpdateError;
use crate::paths::ExpoPaths;
use crate::toolchain::Toolchain;
use crate::versions::Platform;
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Options accepted by the command. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOptions {
    checkout: Option<String>,
    sdk_version: Option<String>,
}

impl UpdateOptions {
    pub fn new(checkout: Option<String>, sdk_version: Option<String>) -> Self {
        Self {
            checkout: checkout.filter(|s| !s.is_empty()),
            sdk_version: sdk_version.filter(|s| !s.is_empty()),
        }
    }

    pub fn checkout(&self) -> Option<&str> {
        self.checkout.as_deref()
    }

    pub fn sdk_version(&self) -> Option<&str> {
        self.sdk_version.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStep {
    CheckingOutSubmodule { path: PathBuf, git_ref: String },
    Fetching,
    CheckingOut { git_ref: String },
    ResolvingVersion,
    Updating { sdk_version: String },
    Cleaning { path: PathBuf },
    RunningTransformer { sdk_version: String },
    Completed,
}

impl fmt::Display for UpdateStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateStep::CheckingOutSubmodule { git_ref, .. } => {
                write!(f, "Checking out submodule at {}", git_ref)
            }
            UpdateStep::Fetching => f.write_str("Fetching submodule"),
            UpdateStep::CheckingOut { git_ref } => write!(f, "Checking out {}", git_ref),
            UpdateStep::ResolvingVersion => f.write_str("Resolving next SDK version"),
            UpdateStep::Updating { sdk_version } => write!(f, "Updating for SDK {}", sdk_version),
            UpdateStep::Cleaning { path } => write!(f, "Cleaning {}", path.display()),
            UpdateStep::RunningTransformer { sdk_version } => {
                write!(f, "Running code transformer for SDK {}", sdk_version)
            }
            UpdateStep::Completed => f.write_str("Completed"),
        }
    }
}

/// Progress hooks for an update run.
pub trait UpdateCallbacks {
    /// Called right before the step's side effect happens.
    fn on_step(&self, step: &UpdateStep);

    fn on_complete(&self, _summary: &UpdateSummary) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSummary {
    pub sdk_version: String,
    pub checked_out: Option<String>,
    pub cleaned: Vec<PathBuf>,
    pub duration: Duration,
}

pub fn run<T, C>(
    paths: &ExpoPaths,
    options: &UpdateOptions,
    toolchain: &T,
    callbacks: &C,
) -> Result<UpdateSummary, UpdateError>
where
    T: Toolchain + ?Sized,
    C: UpdateCallbacks + ?Sized,
{
    let start = Instant::now();

    if let Some(git_ref) = options.checkout() {
        checkout_submodule(paths, git_ref, toolchain, callbacks)?;
    }

    let sdk_version = resolve_sdk_version(options, toolchain, callbacks)?;
    callbacks.on_step(&UpdateStep::Updating {
        sdk_version: sdk_version.clone(),
    });

    let mut cleaned = Vec::new();
    for dir in paths.vendored_dirs() {
        callbacks.on_step(&UpdateStep::Cleaning { path: dir.clone() });
        toolchain.remove_dir(&dir)?;
        cleaned.push(dir);
    }

    callbacks.on_step(&UpdateStep::RunningTransformer {
        sdk_version: sdk_version.clone(),
    });
    toolchain.run_code_transformer(&paths.android(), &sdk_version)?;

    callbacks.on_step(&UpdateStep::Completed);

    let summary = UpdateSummary {
        sdk_version,
        checked_out: options.checkout().map(str::to_string),
        cleaned,
        duration: start.elapsed(),
    };
    callbacks.on_complete(&summary);
    Ok(summary)
}

fn checkout_submodule<T, C>(
    paths: &ExpoPaths,
    git_ref: &str,
    toolchain: &T,
    callbacks: &C,
) -> Result<(), UpdateError>
where
    T: Toolchain + ?Sized,
    C: UpdateCallbacks + ?Sized,
{
    let submodule = paths.react_native_submodule();
    callbacks.on_step(&UpdateStep::CheckingOutSubmodule {
        path: submodule.clone(),
        git_ref: git_ref.to_string(),
    });

    // Fetch first so refs that only exist on the remote can be checked out.
    callbacks.on_step(&UpdateStep::Fetching);
    toolchain.fetch(&submodule)?;

    callbacks.on_step(&UpdateStep::CheckingOut {
        git_ref: git_ref.to_string(),
    });
    toolchain.checkout(&submodule, git_ref)
}

/// Explicit version first, then the next unreleased Android SDK.
fn resolve_sdk_version<T, C>(
    options: &UpdateOptions,
    toolchain: &T,
    callbacks: &C,
) -> Result<String, UpdateError>
where
    T: Toolchain + ?Sized,
    C: UpdateCallbacks + ?Sized,
{
    if let Some(version) = options.sdk_version() {
        return Ok(version.to_string());
    }

    callbacks.on_step(&UpdateStep::ResolvingVersion);
    toolchain
        .next_sdk_version(Platform::Android)?
        .filter(|v| !v.is_empty())
        .ok_or(UpdateError::VersionUnresolved)
}
