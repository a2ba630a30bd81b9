//! External collaborators of the update command.

use crate::config::Config;
use crate::error::UpdateError;
use crate::git::CommandLogger;
use crate::versions::{Platform, SdkVersions};
use crate::{fs, git, gradle};
use std::path::Path;

/// Everything the update command does to the outside world.
pub trait Toolchain {
    fn fetch(&self, repo: &Path) -> Result<(), UpdateError>;

    fn checkout(&self, repo: &Path, git_ref: &str) -> Result<(), UpdateError>;

    /// Next SDK version not yet released on `platform`, if one can be determined.
    fn next_sdk_version(&self, platform: Platform) -> Result<Option<String>, UpdateError>;

    /// Recursively removes `path`. Must succeed if `path` does not exist.
    fn remove_dir(&self, path: &Path) -> Result<(), UpdateError>;

    fn run_code_transformer(
        &self,
        android_dir: &Path,
        sdk_version: &str,
    ) -> Result<(), UpdateError>;
}

/// Toolchain backed by the git binary, the local filesystem and the Gradle wrapper.
#[derive(Debug, Clone)]
pub struct SystemToolchain {
    versions: SdkVersions,
    logger: CommandLogger,
}

impl SystemToolchain {
    pub fn new(expo_root: &Path, config: &Config) -> Self {
        Self {
            versions: SdkVersions::new(expo_root),
            logger: config.command_logger(),
        }
    }
}

impl Toolchain for SystemToolchain {
    fn fetch(&self, repo: &Path) -> Result<(), UpdateError> {
        git::fetch(repo, self.logger)
    }

    fn checkout(&self, repo: &Path, git_ref: &str) -> Result<(), UpdateError> {
        git::checkout(repo, git_ref, self.logger)
    }

    fn next_sdk_version(&self, platform: Platform) -> Result<Option<String>, UpdateError> {
        self.versions.next(platform)
    }

    fn remove_dir(&self, path: &Path) -> Result<(), UpdateError> {
        fs::remove_recursive(path)
    }

    fn run_code_transformer(
        &self,
        android_dir: &Path,
        sdk_version: &str,
    ) -> Result<(), UpdateError> {
        gradle::run_code_transformer(android_dir, sdk_version, self.logger)
    }
}
