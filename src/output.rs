//! Spinner, colored progress lines and the final summary.

use crate::config::Config;
use crate::constants::{CODE_TRANSFORMER_NAME, PROGRESS_TICK_MS, REACT_ANDROID_DIR};
use crate::gradle;
use crate::paths::ExpoPaths;
use crate::update::{UpdateCallbacks, UpdateStep, UpdateSummary};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::OnceCell;
use std::path::Path;
use std::time::Duration;

/// No-op callbacks for when progress output is not needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpCallbacks;

impl UpdateCallbacks for NoOpCallbacks {
    fn on_step(&self, _step: &UpdateStep) {}
}

/// Terminal callbacks for the update command.
///
/// Major steps get a colored line on stdout. The short git steps in between
/// drive a spinner in normal mode, or a dimmed line on stderr in verbose mode.
/// The spinner is cleared before Gradle takes over the terminal.
pub struct ConsoleCallbacks {
    paths: ExpoPaths,
    config: Config,
    spinner: OnceCell<ProgressBar>,
}

impl ConsoleCallbacks {
    pub fn new(paths: ExpoPaths, config: Config) -> Self {
        Self {
            paths,
            config,
            spinner: OnceCell::new(),
        }
    }

    fn spin(&self, step: &UpdateStep) {
        if self.config.is_verbose() {
            eprintln!("  {}...", step.to_string().dimmed());
            return;
        }
        let spinner = self.spinner.get_or_init(create_spinner);
        spinner.set_message(format_step_message(step));
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.get() {
            spinner.finish_and_clear();
        }
    }
}

impl UpdateCallbacks for ConsoleCallbacks {
    fn on_step(&self, step: &UpdateStep) {
        if self.config.is_quiet() {
            return;
        }
        match step {
            UpdateStep::Fetching | UpdateStep::CheckingOut { .. } | UpdateStep::ResolvingVersion => {
                self.spin(step)
            }
            UpdateStep::Completed => self.clear_spinner(),
            _ => {
                self.clear_spinner();
                println!("{}", format_major_step(&self.paths, step));
            }
        }
    }

    fn on_complete(&self, summary: &UpdateSummary) {
        print_summary(summary, &self.config);
    }
}

impl Drop for ConsoleCallbacks {
    fn drop(&mut self) {
        self.clear_spinner();
    }
}

fn create_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
    spinner
}

pub fn print_working_dir(path: &Path, config: &Config) {
    if config.is_quiet() {
        return;
    }
    println!(
        "{} {}",
        "Working in:".cyan(),
        path.display().to_string().white().bold()
    )
}

pub fn print_summary(summary: &UpdateSummary, config: &Config) {
    if config.is_quiet() {
        return;
    }
    println!(
        "{} {} updated for SDK {} in {}",
        "✓".green(),
        REACT_ANDROID_DIR.green(),
        summary.sdk_version.cyan(),
        format_duration(summary.duration).dimmed()
    );
}

fn format_major_step(paths: &ExpoPaths, step: &UpdateStep) -> String {
    match step {
        UpdateStep::CheckingOutSubmodule { path, git_ref } => format!(
            "Checking out {} submodule at {} ref...",
            paths.display_relative(path).magenta(),
            git_ref.blue()
        ),
        UpdateStep::Updating { sdk_version } => format!(
            "Updating {} for SDK {} ...",
            REACT_ANDROID_DIR.green(),
            sdk_version.cyan()
        ),
        UpdateStep::Cleaning { path } => {
            format!("Cleaning {}...", paths.display_relative(path).magenta())
        }
        UpdateStep::RunningTransformer { sdk_version } => format!(
            "Running {} with {} command...",
            CODE_TRANSFORMER_NAME.blue(),
            gradle::code_transformer_command(sdk_version).yellow()
        ),
        other => format!("{}...", other),
    }
}

fn format_step_message(step: &UpdateStep) -> String {
    match step {
        UpdateStep::Fetching => "Fetching submodule from origin...".to_string(),
        UpdateStep::CheckingOut { git_ref } => format!("Checking out {}...", git_ref),
        UpdateStep::ResolvingVersion => "Resolving next Android SDK version...".to_string(),
        other => format!("{}...", other),
    }
}

fn format_duration(duration: Duration) -> String {
    format!("{:.2}s", duration.as_secs_f32())
}
