//! Cargo-backed checkers for lint, test, and format.
//!
//! Each checker shells out to a cargo subcommand with a fixed option set
//! and inherited stdio, so the tool's own output streams straight through
//! to the operator. Only the exit status feeds back into the gate.

use std::ffi::OsString;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::{Outcome, Workspace};

use super::Checker;

/// Clippy options: every warning is an error, dead code stays suppressible
const CLIPPY_OPTIONS: &[&str] = &["--", "-D", "warnings", "-A", "dead_code"];

/// rustfmt options: check only, never rewrite
const FMT_OPTIONS: &[&str] = &["--", "--check"];

/// Lint checker backed by `cargo clippy`
pub struct ClippyChecker {
    cargo_binary: String,
}

/// Test checker backed by `cargo test`
pub struct TestChecker {
    cargo_binary: String,
}

/// Format checker backed by `cargo fmt --check`
pub struct FmtChecker {
    cargo_binary: String,
}

impl ClippyChecker {
    /// Create a clippy checker using the given cargo binary
    pub fn new(cargo_binary: impl Into<String>) -> Self {
        Self {
            cargo_binary: cargo_binary.into(),
        }
    }
}

impl TestChecker {
    /// Create a test checker using the given cargo binary
    pub fn new(cargo_binary: impl Into<String>) -> Self {
        Self {
            cargo_binary: cargo_binary.into(),
        }
    }
}

impl FmtChecker {
    /// Create a format checker using the given cargo binary
    pub fn new(cargo_binary: impl Into<String>) -> Self {
        Self {
            cargo_binary: cargo_binary.into(),
        }
    }
}

#[async_trait]
impl Checker for ClippyChecker {
    fn name(&self) -> &str {
        "clippy"
    }

    async fn check(&self, workspace: &Workspace) -> Outcome {
        let mut args = manifest_args("clippy", workspace);
        args.extend(CLIPPY_OPTIONS.iter().copied().map(OsString::from));
        run_tool(&self.cargo_binary, &args, self.name()).await
    }
}

#[async_trait]
impl Checker for TestChecker {
    fn name(&self) -> &str {
        "cargo test"
    }

    async fn check(&self, workspace: &Workspace) -> Outcome {
        let args = manifest_args("test", workspace);
        run_tool(&self.cargo_binary, &args, self.name()).await
    }
}

#[async_trait]
impl Checker for FmtChecker {
    fn name(&self) -> &str {
        "rustfmt"
    }

    async fn check(&self, workspace: &Workspace) -> Outcome {
        let mut args = vec![
            OsString::from("fmt"),
            OsString::from("--all"),
            OsString::from("--manifest-path"),
            workspace.manifest_path().into_os_string(),
        ];
        args.extend(FMT_OPTIONS.iter().copied().map(OsString::from));
        run_tool(&self.cargo_binary, &args, self.name()).await
    }
}

/// Build `<subcommand> --manifest-path <workspace>/Cargo.toml`
fn manifest_args(subcommand: &str, workspace: &Workspace) -> Vec<OsString> {
    vec![
        OsString::from(subcommand),
        OsString::from("--manifest-path"),
        workspace.manifest_path().into_os_string(),
    ]
}

/// Spawn a tool and map its exit status to an Outcome
///
/// Stdio is inherited, so the child writes directly to the gate's own
/// stdout/stderr. There is no timeout: the gate waits for the tool no
/// matter how long it takes.
async fn run_tool(binary: &str, args: &[OsString], label: &str) -> Outcome {
    debug!(binary, ?args, "Spawning checker");

    let status = match Command::new(binary).args(args).status().await {
        Ok(status) => status,
        Err(e) => {
            return Outcome::failure(format!("failed to spawn {} ({}): {}", label, binary, e));
        }
    };

    if status.success() {
        Outcome::Success
    } else {
        let code = status.code().unwrap_or(-1);
        Outcome::failure(format!("{} exited with code {}", label, code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checker_names() {
        assert_eq!(ClippyChecker::new("cargo").name(), "clippy");
        assert_eq!(TestChecker::new("cargo").name(), "cargo test");
        assert_eq!(FmtChecker::new("cargo").name(), "rustfmt");
    }

    #[test]
    fn test_clippy_options_deny_warnings() {
        assert!(CLIPPY_OPTIONS.contains(&"-D"));
        assert!(CLIPPY_OPTIONS.contains(&"warnings"));
        assert!(CLIPPY_OPTIONS.contains(&"-A"));
    }

    #[test]
    fn test_manifest_args_target_the_workspace() {
        let ws = Workspace::new("roles/pool");
        let args = manifest_args("clippy", &ws);
        assert_eq!(args[0], OsString::from("clippy"));
        assert_eq!(args[1], OsString::from("--manifest-path"));
        assert_eq!(args[2], OsString::from("roles/pool/Cargo.toml"));
    }

    #[tokio::test]
    async fn test_run_tool_maps_zero_exit_to_success() {
        let args = [OsString::from("-c"), OsString::from("exit 0")];
        let outcome = run_tool("sh", &args, "sh").await;
        assert_eq!(outcome, Outcome::Success);
    }

    #[tokio::test]
    async fn test_run_tool_maps_nonzero_exit_to_failure() {
        let args = [OsString::from("-c"), OsString::from("exit 3")];
        let outcome = run_tool("sh", &args, "sh").await;
        match outcome {
            Outcome::Failure { diagnostic } => assert!(diagnostic.contains("code 3")),
            Outcome::Success => panic!("expected failure for non-zero exit"),
        }
    }

    #[tokio::test]
    async fn test_run_tool_missing_binary_is_failure() {
        let outcome = run_tool("checkgate-no-such-binary", &[], "missing").await;
        match outcome {
            Outcome::Failure { diagnostic } => assert!(diagnostic.contains("failed to spawn")),
            Outcome::Success => panic!("expected failure for missing binary"),
        }
    }
}
