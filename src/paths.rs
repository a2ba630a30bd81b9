//! Fixed locations inside the Expo repository.

use crate::constants::{
    ANDROID_DIR, REACT_ANDROID_DIR, REACT_COMMON_DIR, REACT_NATIVE_SUBMODULE_DIR,
};
use std::path::{Path, PathBuf};

/// Paths derived from the Expo repository root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpoPaths {
    root: PathBuf,
}

impl ExpoPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn react_native_submodule(&self) -> PathBuf {
        self.root.join(REACT_NATIVE_SUBMODULE_DIR)
    }

    pub fn android(&self) -> PathBuf {
        self.root.join(ANDROID_DIR)
    }

    pub fn react_android(&self) -> PathBuf {
        self.android().join(REACT_ANDROID_DIR)
    }

    pub fn react_common(&self) -> PathBuf {
        self.android().join(REACT_COMMON_DIR)
    }

    /// Vendored directories in the order they are cleaned.
    pub fn vendored_dirs(&self) -> [PathBuf; 2] {
        [self.react_android(), self.react_common()]
    }

    /// Formats `path` relative to the root for display.
    /// Paths outside the root are shown as-is.
    pub fn display_relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
