//! Git command wrappers.
//!
//! Thin wrapper around the git CLI: runs a command in a working directory,
//! captures its output and turns failures into [`UpdateError`]s.

use crate::error::UpdateError;
use colored::Colorize;
use std::path::Path;

/// Callback invoked right before an external command is spawned.
pub type CommandLogger = fn(cwd: &Path, program: &str, args: &[&str]);

pub fn no_op_logger(_cwd: &Path, _program: &str, _args: &[&str]) {}

pub fn verbose_logger(cwd: &Path, program: &str, args: &[&str]) {
    eprintln!(
        "  {} {} {} {}",
        "$".dimmed(),
        program.dimmed(),
        args.join(" ").dimmed(),
        format!("(in {})", cwd.display()).dimmed()
    );
}

pub fn run_git(repo: &Path, args: &[&str], logger: CommandLogger) -> Result<String, UpdateError> {
    let command = format!("git {}", args.join(" "));
    logger(repo, "git", args);

    let output = std::process::Command::new("git")
        .current_dir(repo)
        .args(args)
        .output()
        .map_err(|e| UpdateError::spawn(&command, e))?;

    if output.status.success() {
        let result = String::from_utf8_lossy(&output.stdout);
        Ok(result.as_ref().trim().to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        Err(UpdateError::exit(command, output.status, stderr))
    }
}

/// Rejects refs that git would misread as options or that cannot name anything.
pub fn validate_ref(git_ref: &str) -> Result<(), UpdateError> {
    if git_ref.is_empty()
        || git_ref.starts_with('-')
        || git_ref.contains('\0')
        || git_ref.contains('\n')
    {
        return Err(UpdateError::InvalidRef(git_ref.to_string()));
    }
    Ok(())
}

pub fn fetch(repo: &Path, logger: CommandLogger) -> Result<(), UpdateError> {
    run_git(repo, &["fetch"], logger)?;
    Ok(())
}

/// Checks out a branch, tag or commit. Remote-only branches need a prior [`fetch`].
pub fn checkout(repo: &Path, git_ref: &str, logger: CommandLogger) -> Result<(), UpdateError> {
    validate_ref(git_ref)?;
    run_git(repo, &["checkout", git_ref], logger)?;
    Ok(())
}

pub fn get_current_commit(repo: &Path, logger: CommandLogger) -> Result<String, UpdateError> {
    run_git(repo, &["rev-parse", "HEAD"], logger)
}
