//! Checker interfaces for the external quality tools.
//!
//! Checkers provide a unified interface over the three collaborators
//! (linter, test runner, formatter). The gate treats every checker as an
//! opaque subprocess and judges it solely by its exit status.

pub mod cargo;

use async_trait::async_trait;

use crate::domain::{Outcome, Workspace};

// Re-export the cargo-backed checkers
pub use cargo::{ClippyChecker, FmtChecker, TestChecker};

/// Trait for external check tools
///
/// `check` is infallible by signature: a collaborator that fails to run
/// at all (missing executable, spawn error) reports `Outcome::Failure`
/// exactly like one that ran and found problems.
#[async_trait]
pub trait Checker: Send + Sync {
    /// Human-readable checker name
    fn name(&self) -> &str;

    /// Run the check against one workspace, blocking until the tool exits
    async fn check(&self, workspace: &Workspace) -> Outcome;
}
