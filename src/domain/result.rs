//! Aggregate result of a gate run.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::stage::Stage;
use super::workspace::Workspace;

/// The terminal outcome of a whole orchestration run
///
/// Derived deterministically from the ordered sequence of stage outcomes:
/// `AllPassed` if and only if every stage of every workspace succeeded,
/// otherwise the first failure wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum RunResult {
    /// Every stage of every workspace succeeded
    AllPassed,

    /// The run stopped at the first failing stage
    FailedAt { workspace: Workspace, stage: Stage },
}

impl RunResult {
    /// Process exit code for this result
    ///
    /// `0` for `AllPassed`, `1` for any stage failure. Lint, Test, and
    /// Format failures are not distinguished in the exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::AllPassed => 0,
            Self::FailedAt { .. } => 1,
        }
    }

    /// Check whether the run passed everywhere
    pub fn is_all_passed(&self) -> bool {
        matches!(self, Self::AllPassed)
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllPassed => write!(f, "all workspaces passed"),
            Self::FailedAt { workspace, stage } => {
                write!(f, "{} failed for workspace {}", stage, workspace)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(RunResult::AllPassed.exit_code(), 0);

        let failed = RunResult::FailedAt {
            workspace: Workspace::new("roles/pool"),
            stage: Stage::Lint,
        };
        assert_eq!(failed.exit_code(), 1);
    }

    #[test]
    fn test_failure_display_names_workspace_and_stage() {
        let failed = RunResult::FailedAt {
            workspace: Workspace::new("roles/pool"),
            stage: Stage::Format,
        };
        let rendered = failed.to_string();
        assert!(rendered.contains("roles/pool"));
        assert!(rendered.contains("Format"));
    }
}
