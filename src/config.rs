//! Configuration for the checkgate workspace list.
//!
//! Configuration sources (highest priority first):
//! 1. Explicit file path (--config flag or CHECKGATE_CONFIG)
//! 2. Discovered config file (.checkgate/config.yaml)
//! 3. Defaults (single workspace ".", cargo from PATH)
//!
//! Config file discovery:
//! - Searches current directory and parents for .checkgate/config.yaml
//! - Workspace paths in the file are relative to the project root
//!   (the parent of the .checkgate/ directory)
//!
//! The resolved configuration is an explicit value handed to the CLI and
//! the gate runner; nothing here is cached globally.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::Workspace;

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,

    /// Ordered list of workspace paths to gate
    #[serde(default)]
    pub workspaces: Vec<String>,

    #[serde(default)]
    pub cargo: Option<CargoConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CargoConfig {
    /// Cargo binary to invoke (default: "cargo" from PATH)
    pub binary: Option<String>,
}

/// Validation failures in a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config version cannot be empty")]
    EmptyVersion,

    #[error("workspace entry {index} is empty")]
    EmptyWorkspace { index: usize },

    #[error("duplicate workspace entry: {path}")]
    DuplicateWorkspace { path: String },
}

impl ConfigFile {
    /// Validate the workspace list before resolution
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version.is_empty() {
            return Err(ConfigError::EmptyVersion);
        }

        let mut seen = HashSet::new();
        for (index, path) in self.workspaces.iter().enumerate() {
            if path.trim().is_empty() {
                return Err(ConfigError::EmptyWorkspace { index });
            }
            if !seen.insert(path.as_str()) {
                return Err(ConfigError::DuplicateWorkspace { path: path.clone() });
            }
        }

        Ok(())
    }
}

/// Resolved configuration with absolute workspace paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Ordered, immutable workspace sequence for the run
    pub workspaces: Vec<Workspace>,

    /// Cargo binary used by all three checkers
    pub cargo_binary: String,

    /// Path to the config file (if one was found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            workspaces: vec![Workspace::new(".")],
            cargo_binary: "cargo".to_string(),
            config_file: None,
        }
    }
}

/// Find a config file by searching the current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".checkgate").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse a config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Project root a config file's workspace paths are relative to
///
/// For a discovered .checkgate/config.yaml that is the parent of the
/// .checkgate/ directory; for an explicit config file anywhere else it
/// is the file's own directory.
fn project_root(config_path: &Path) -> &Path {
    let parent = config_path.parent().unwrap_or(Path::new("."));
    if parent.file_name().map(|n| n == ".checkgate").unwrap_or(false) {
        parent.parent().unwrap_or(Path::new("."))
    } else {
        parent
    }
}

/// Resolve a parsed config file into runnable configuration
fn resolve(config: ConfigFile, config_path: &Path) -> Result<ResolvedConfig> {
    config.validate()?;

    let base = project_root(config_path);

    let workspaces = config
        .workspaces
        .iter()
        .map(|p| Workspace::new(resolve_path(base, p)))
        .collect();

    let cargo_binary = config
        .cargo
        .and_then(|c| c.binary)
        .unwrap_or_else(|| "cargo".to_string());

    Ok(ResolvedConfig {
        workspaces,
        cargo_binary,
        config_file: Some(config_path.to_path_buf()),
    })
}

/// Load configuration from all sources
///
/// `explicit` short-circuits discovery (the --config flag). Without a
/// config file anywhere, the current directory becomes the single
/// workspace so a bare `checkgate` still gates the project it runs in.
pub fn load(explicit: Option<&Path>) -> Result<ResolvedConfig> {
    let config_path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(),
    };

    match config_path {
        Some(path) => {
            let config = load_config_file(&path)?;
            resolve(config, &path)
        }
        None => Ok(ResolvedConfig::default()),
    }
}
