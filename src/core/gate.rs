//! The gate runner: fail-fast traversal of workspaces and stages.
//!
//! Drives the fixed Lint -> Test -> Format sequence over an ordered
//! workspace list, stopping the whole run at the first failure. This is
//! the only place the fail-fast policy lives.

use std::time::Instant;

use tracing::{error, info, instrument, warn};

use crate::adapters::{Checker, ClippyChecker, FmtChecker, TestChecker};
use crate::domain::{Outcome, RunResult, Stage, Workspace};

/// Runs the three check stages over an ordered workspace list
pub struct GateRunner {
    lint: Box<dyn Checker>,
    test: Box<dyn Checker>,
    format: Box<dyn Checker>,
}

impl GateRunner {
    /// Create a gate runner from three checkers, one per stage
    pub fn new(lint: Box<dyn Checker>, test: Box<dyn Checker>, format: Box<dyn Checker>) -> Self {
        Self { lint, test, format }
    }

    /// Create a gate runner wired to the cargo-backed checkers
    pub fn with_cargo(cargo_binary: &str) -> Self {
        Self::new(
            Box::new(ClippyChecker::new(cargo_binary)),
            Box::new(TestChecker::new(cargo_binary)),
            Box::new(FmtChecker::new(cargo_binary)),
        )
    }

    /// The checker responsible for a stage
    fn checker(&self, stage: Stage) -> &dyn Checker {
        match stage {
            Stage::Lint => self.lint.as_ref(),
            Stage::Test => self.test.as_ref(),
            Stage::Format => self.format.as_ref(),
        }
    }

    /// Run every stage of every workspace, in order, failing fast
    ///
    /// Workspaces are traversed in the exact order given. Within a
    /// workspace the stages run Lint -> Test -> Format; the first
    /// `Failure` anywhere terminates the run immediately and becomes the
    /// final result. An empty list is a legal no-op and passes trivially.
    #[instrument(skip(self, workspaces), fields(workspaces = workspaces.len()))]
    pub async fn run(&self, workspaces: &[Workspace]) -> RunResult {
        let started = Instant::now();

        if workspaces.is_empty() {
            warn!("No workspaces configured, nothing to check");
        }

        for workspace in workspaces {
            for stage in Stage::ORDER {
                println!("Executing {} on: {}", stage, workspace);

                match self.checker(stage).check(workspace).await {
                    Outcome::Success => {}
                    Outcome::Failure { diagnostic } => {
                        println!("{} failed for workspace {}: {}", stage, workspace, diagnostic);
                        error!(%workspace, %stage, %diagnostic, "Stage failed, aborting run");
                        return RunResult::FailedAt {
                            workspace: workspace.clone(),
                            stage,
                        };
                    }
                }
            }
        }

        println!(
            "All checks passed for {} workspace(s) in {:.1}s",
            workspaces.len(),
            started.elapsed().as_secs_f64()
        );
        info!(workspaces = workspaces.len(), "Gate run passed");

        RunResult::AllPassed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cargo_runner_stage_wiring() {
        let runner = GateRunner::with_cargo("cargo");

        assert_eq!(runner.checker(Stage::Lint).name(), "clippy");
        assert_eq!(runner.checker(Stage::Test).name(), "cargo test");
        assert_eq!(runner.checker(Stage::Format).name(), "rustfmt");
    }
}
