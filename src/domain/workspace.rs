//! Workspace handles.
//!
//! A Workspace locates one independently checkable project by the path
//! to its manifest. Handles are read from configuration at startup and
//! never mutated afterwards.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A handle to one project workspace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Workspace {
    path: PathBuf,
}

impl Workspace {
    /// Create a workspace handle from a path
    ///
    /// The path may point at the workspace directory or directly at
    /// its `Cargo.toml`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this handle was created with
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve the handle to a concrete manifest path
    ///
    /// Directory handles get `Cargo.toml` appended; handles that already
    /// name a manifest file pass through unchanged.
    pub fn manifest_path(&self) -> PathBuf {
        if self.path.file_name().map(|n| n == "Cargo.toml").unwrap_or(false) {
            self.path.clone()
        } else {
            self.path.join("Cargo.toml")
        }
    }
}

impl fmt::Display for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl From<&str> for Workspace {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_path_for_directory() {
        let ws = Workspace::new("roles/pool");
        assert_eq!(ws.manifest_path(), PathBuf::from("roles/pool/Cargo.toml"));
    }

    #[test]
    fn test_manifest_path_passthrough() {
        let ws = Workspace::new("roles/pool/Cargo.toml");
        assert_eq!(ws.manifest_path(), PathBuf::from("roles/pool/Cargo.toml"));
    }

    #[test]
    fn test_display_shows_original_path() {
        let ws = Workspace::new("protocols/v2");
        assert_eq!(ws.to_string(), "protocols/v2");
    }
}
