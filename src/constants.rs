//! Application-wide constants.
//!
//! Fixed locations inside the Expo repository and the names of the external
//! tools this crate drives.

use std::path::PathBuf;

/// Environment variable that overrides the Expo repository root.
pub const EXPO_ROOT_ENV: &str = "EXPO_ROOT_DIR";

/// React Native submodule, relative to the Expo root.
pub const REACT_NATIVE_SUBMODULE_DIR: &str = "react-native-lab/react-native";

/// Android project root, relative to the Expo root.
pub const ANDROID_DIR: &str = "android";

/// Vendored directories regenerated inside the Android root.
pub const REACT_ANDROID_DIR: &str = "ReactAndroid";
pub const REACT_COMMON_DIR: &str = "ReactCommon";

/// Gradle wrapper script shipped in the Android root.
#[cfg(windows)]
pub const GRADLE_WRAPPER: &str = "gradlew.bat";
#[cfg(not(windows))]
pub const GRADLE_WRAPPER: &str = "gradlew";

/// Gradle task that runs ReactAndroidCodeTransformer.
pub const CODE_TRANSFORMER_TASK: &str = ":tools:execute";

/// Display name of the code transformer in progress output.
pub const CODE_TRANSFORMER_NAME: &str = "ReactAndroidCodeTransformer";

/// File listing the SDK versions already released for a platform.
pub const SDK_VERSIONS_FILE: &str = "sdkVersions.json";

/// Directory holding the iOS `sdkVersions.json`, relative to the Expo root.
pub const IOS_SUPPORTING_DIR: &str = "ios/Exponent/Supporting";

/// Spinner tick interval in milliseconds.
pub const PROGRESS_TICK_MS: u64 = 80;

/// Returns the Expo repository root.
///
/// Can be customized via the EXPO_ROOT_DIR environment variable.
/// Falls back to the current directory if not set or empty.
///
/// Example: `EXPO_ROOT_DIR=~/expo et update-rn`
pub fn expo_root() -> std::io::Result<PathBuf> {
    match std::env::var_os(EXPO_ROOT_ENV) {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => std::env::current_dir(),
    }
}
