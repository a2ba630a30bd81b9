//! Test infrastructure for expotools integration tests.
#![allow(dead_code)]

use anyhow::Result;
use expotools::git::{no_op_logger, run_git};
use expotools::paths::ExpoPaths;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const GRADLE_ARGS_FILE: &str = "gradle-args.txt";

fn git(path: &Path, args: &[&str]) -> Result<String> {
    Ok(run_git(path, args, no_op_logger)?)
}

/// A temporary git repository for testing.
/// Automatically cleaned up when dropped.
pub struct TestRepo {
    _temp_dir: TempDir,
    path: PathBuf,
    remote: Option<TempDir>,
}

impl TestRepo {
    /// Creates a new test repository with an initial commit on the master branch.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().to_path_buf();

        git(&path, &["init", "-b", "master"])?;
        git(&path, &["config", "user.email", "test@example.com"])?;
        git(&path, &["config", "user.name", "Test User"])?;

        std::fs::write(path.join("README.md"), "# Test Repo\n")?;
        git(&path, &["add", "README.md"])?;
        git(&path, &["commit", "-m", "Initial commit"])?;

        Ok(Self {
            _temp_dir: temp_dir,
            path,
            remote: None,
        })
    }

    /// Creates a test repository pushed to a bare remote named origin.
    pub fn with_remote() -> Result<Self> {
        let remote_dir = TempDir::new()?;
        git(remote_dir.path(), &["init", "--bare", "-b", "master"])?;

        let mut local = Self::new()?;
        let remote_path = remote_dir.path().to_string_lossy().into_owned();
        git(&local.path, &["remote", "add", "origin", &remote_path])?;
        git(&local.path, &["push", "-u", "origin", "master"])?;

        local.remote = Some(remote_dir);
        Ok(local)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn remote_path(&self) -> Option<&Path> {
        self.remote.as_ref().map(TempDir::path)
    }

    /// Clones the remote into `dest`.
    pub fn clone_remote_to(&self, dest: &Path) -> Result<()> {
        let remote = self
            .remote_path()
            .ok_or_else(|| anyhow::anyhow!("repository has no remote"))?
            .to_string_lossy()
            .into_owned();
        let parent = dest
            .parent()
            .ok_or_else(|| anyhow::anyhow!("clone destination has no parent"))?;
        std::fs::create_dir_all(parent)?;
        git(parent, &["clone", &remote, &dest.to_string_lossy()])?;
        Ok(())
    }

    /// Commits a file on a new branch and pushes it, then returns to master.
    /// Returns the new commit id.
    pub fn push_branch(&self, branch: &str, file: &str) -> Result<String> {
        git(&self.path, &["checkout", "-b", branch])?;
        std::fs::write(self.path.join(file), branch)?;
        git(&self.path, &["add", file])?;
        git(&self.path, &["commit", "-m", &format!("Add {file}")])?;
        let commit = git(&self.path, &["rev-parse", "HEAD"])?;
        git(&self.path, &["push", "origin", branch])?;
        git(&self.path, &["checkout", "master"])?;
        Ok(commit)
    }

    pub fn push_tag(&self, tag: &str) -> Result<()> {
        git(&self.path, &["tag", tag])?;
        git(&self.path, &["push", "origin", tag])?;
        Ok(())
    }
}

pub fn current_branch(repo: &Path) -> Result<String> {
    git(repo, &["rev-parse", "--abbrev-ref", "HEAD"])
}

/// A scratch Expo repository with vendored directories and an Android root.
pub struct ExpoFixture {
    _temp_dir: TempDir,
    pub paths: ExpoPaths,
}

impl ExpoFixture {
    /// Creates populated `ReactAndroid` and `ReactCommon` directories.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let paths = ExpoPaths::new(temp_dir.path());

        let react_android = paths.react_android();
        std::fs::create_dir_all(react_android.join("src/main/java/com/facebook/react"))?;
        std::fs::write(
            react_android.join("src/main/java/com/facebook/react/ReactActivity.java"),
            "class ReactActivity {}",
        )?;

        let react_common = paths.react_common();
        std::fs::create_dir_all(react_common.join("yoga"))?;
        std::fs::write(react_common.join("yoga/Yoga.h"), "#pragma once")?;

        Ok(Self {
            _temp_dir: temp_dir,
            paths,
        })
    }

    pub fn root(&self) -> &Path {
        self.paths.root()
    }

    pub fn write_sdk_versions(&self, versions: &[&str]) -> Result<()> {
        let quoted: Vec<String> = versions.iter().map(|v| format!("\"{v}\"")).collect();
        std::fs::write(
            self.paths.android().join("sdkVersions.json"),
            format!("{{ \"sdkVersions\": [{}] }}", quoted.join(", ")),
        )?;
        Ok(())
    }

    /// Installs a `gradlew` that records its arguments and exits with `exit_code`.
    #[cfg(unix)]
    pub fn install_gradle_wrapper(&self, exit_code: i32) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let wrapper = self.paths.android().join("gradlew");
        std::fs::write(
            &wrapper,
            format!("#!/bin/sh\necho \"$@\" > {GRADLE_ARGS_FILE}\nexit {exit_code}\n"),
        )?;
        std::fs::set_permissions(&wrapper, std::fs::Permissions::from_mode(0o755))?;
        Ok(())
    }

    pub fn gradle_args(&self) -> Option<String> {
        std::fs::read_to_string(self.paths.android().join(GRADLE_ARGS_FILE))
            .ok()
            .map(|s| s.trim().to_string())
    }

    pub fn vendored_dirs_exist(&self) -> [bool; 2] {
        self.paths.vendored_dirs().map(|dir| dir.exists())
    }
}
