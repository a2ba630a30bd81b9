//! Gradle wrapper invocation.

use crate::constants::{CODE_TRANSFORMER_TASK, GRADLE_WRAPPER};
use crate::error::UpdateError;
use crate::git::CommandLogger;
use std::path::Path;

/// Arguments passed to the Gradle wrapper to run the code transformer.
pub fn code_transformer_args(sdk_version: &str) -> [&str; 3] {
    [CODE_TRANSFORMER_TASK, "--args", sdk_version]
}

/// Human-readable form of the transformer command, e.g. for progress output.
pub fn code_transformer_command(sdk_version: &str) -> String {
    format!(
        "./{} {}",
        GRADLE_WRAPPER,
        code_transformer_args(sdk_version).join(" ")
    )
}

/// Runs a task through the project's Gradle wrapper.
///
/// Output is not captured: the child inherits stdout and stderr so long
/// builds stream straight to the terminal.
pub fn run_task(
    android_dir: &Path,
    args: &[&str],
    logger: CommandLogger,
) -> Result<(), UpdateError> {
    let wrapper = android_dir.join(GRADLE_WRAPPER);
    let command = format!("./{} {}", GRADLE_WRAPPER, args.join(" "));
    logger(android_dir, &format!("./{}", GRADLE_WRAPPER), args);

    let status = std::process::Command::new(&wrapper)
        .current_dir(android_dir)
        .args(args)
        .status()
        .map_err(|e| UpdateError::spawn(&command, e))?;

    if status.success() {
        Ok(())
    } else {
        Err(UpdateError::exit(command, status, String::new()))
    }
}

pub fn run_code_transformer(
    android_dir: &Path,
    sdk_version: &str,
    logger: CommandLogger,
) -> Result<(), UpdateError> {
    run_task(android_dir, &code_transformer_args(sdk_version), logger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubprocessFailure;
    use crate::git::no_op_logger;
    use tempfile::TempDir;

    #[test]
    fn test_code_transformer_args_pass_version_to_task() {
        assert_eq!(
            code_transformer_args("50.0.0"),
            [":tools:execute", "--args", "50.0.0"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_code_transformer_command_matches_wrapper_invocation() {
        assert_eq!(
            code_transformer_command("50.0.0"),
            "./gradlew :tools:execute --args 50.0.0"
        );
    }

    #[test]
    fn test_run_task_without_wrapper_is_spawn_failure() -> anyhow::Result<()> {
        let temp = TempDir::new()?;

        let result = run_code_transformer(temp.path(), "50.0.0", no_op_logger);

        assert!(matches!(
            result,
            Err(UpdateError::SubprocessFailed {
                reason: SubprocessFailure::Spawn(_),
                ..
            })
        ));
        Ok(())
    }
}
