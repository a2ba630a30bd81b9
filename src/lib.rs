//! Expo repository tooling.
//!
//! This crate provides the `update-react-native` command, which:
//! - Optionally checks out a ref in the React Native submodule
//! - Resolves the SDK version to build the fork for
//! - Cleans the vendored `ReactAndroid` and `ReactCommon` directories
//! - Regenerates them with the Gradle code transformer

pub mod config;
pub mod constants;
pub mod error;
pub mod fs;
pub mod git;
pub mod gradle;
pub mod output;
pub mod paths;
pub mod toolchain;
pub mod update;
pub mod versions;
