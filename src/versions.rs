//! SDK version lookup.
//!
//! Each platform keeps a `sdkVersions.json` listing the SDK versions it has
//! already shipped. The next SDK is the newest of those bumped by one major.

use crate::constants::{ANDROID_DIR, IOS_SUPPORTING_DIR, SDK_VERSIONS_FILE};
use crate::error::UpdateError;
use semver::Version;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Android => f.write_str("android"),
            Platform::Ios => f.write_str("ios"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SdkVersionsManifest {
    #[serde(default)]
    sdk_versions: Vec<String>,
}

/// Reads released SDK versions from the platform manifests under an Expo root.
#[derive(Debug, Clone)]
pub struct SdkVersions {
    root: PathBuf,
}

impl SdkVersions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn manifest_path(&self, platform: Platform) -> PathBuf {
        match platform {
            Platform::Android => self.root.join(ANDROID_DIR).join(SDK_VERSIONS_FILE),
            Platform::Ios => self.root.join(IOS_SUPPORTING_DIR).join(SDK_VERSIONS_FILE),
        }
    }

    pub fn released(&self, platform: Platform) -> Result<Vec<Version>, UpdateError> {
        let path = self.manifest_path(platform);
        let contents = std::fs::read_to_string(&path).map_err(|e| manifest_error(&path, e))?;
        let manifest: SdkVersionsManifest =
            serde_json::from_str(&contents).map_err(|e| manifest_error(&path, e))?;

        manifest
            .sdk_versions
            .iter()
            .map(|v| {
                Version::parse(v)
                    .map_err(|e| manifest_error(&path, format!("invalid version {v:?}: {e}")))
            })
            .collect()
    }

    /// Returns the next SDK version not yet released on `platform`,
    /// or `None` if the platform has no released versions to bump.
    pub fn next(&self, platform: Platform) -> Result<Option<String>, UpdateError> {
        let released = self.released(platform)?;
        Ok(next_major(&released).map(|v| v.to_string()))
    }
}

fn next_major(versions: &[Version]) -> Option<Version> {
    versions
        .iter()
        .max()
        .map(|newest| Version::new(newest.major + 1, 0, 0))
}

fn manifest_error(path: &Path, reason: impl fmt::Display) -> UpdateError {
    UpdateError::SdkVersions {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
