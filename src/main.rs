use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use expotools::config::{Config, Verbosity};
use expotools::constants;
use expotools::output::{self, ConsoleCallbacks};
use expotools::paths::ExpoPaths;
use expotools::toolchain::SystemToolchain;
use expotools::update::{self, UpdateOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "et", version, about = "Expo repository tools")]
struct Cli {
    #[arg(short, long, global = true, help = "Only print errors")]
    quiet: bool,
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "quiet",
        help = "Print every external command before it runs"
    )]
    verbose: bool,
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        help = "Expo repository root (defaults to $EXPO_ROOT_DIR, then the current directory)"
    )]
    expo_root: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Updates React Native submodule and applies Expo-specific code transformations on
    /// ReactAndroid and ReactCommon folders.
    #[command(name = "update-react-native", visible_aliases = ["update-rn", "urn"])]
    UpdateReactNative(UpdateReactNativeArgs),
}

#[derive(Args, Debug)]
struct UpdateReactNativeArgs {
    #[arg(
        short,
        long,
        value_name = "REF",
        help = "Git ref to the commit, tag or branch on which the React Native submodule should be checked out"
    )]
    checkout: Option<String>,
    #[arg(
        short = 's',
        long = "sdkVersion",
        value_name = "SDK_VERSION",
        help = "SDK version for which the forked React Native will be used. Defaults to the newest SDK version increased by a major update"
    )]
    sdk_version: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config {
        verbosity: Verbosity::from_flags(cli.quiet, cli.verbose),
    };

    let root = match cli.expo_root {
        Some(root) => root,
        None => constants::expo_root().context("Failed to determine the Expo root directory")?,
    };
    let root = std::path::absolute(&root)
        .with_context(|| format!("Invalid Expo root directory: {}", root.display()))?;
    let paths = ExpoPaths::new(root);

    match cli.command {
        Commands::UpdateReactNative(args) => update_react_native(&paths, args, &config),
    }
}

fn update_react_native(
    paths: &ExpoPaths,
    args: UpdateReactNativeArgs,
    config: &Config,
) -> anyhow::Result<()> {
    output::print_working_dir(paths.root(), config);

    let options = UpdateOptions::new(args.checkout, args.sdk_version);
    let toolchain = SystemToolchain::new(paths.root(), config);
    let callbacks = ConsoleCallbacks::new(paths.clone(), *config);

    update::run(paths, &options, &toolchain, &callbacks)
        .context("Failed to update React Native")?;
    Ok(())
}
