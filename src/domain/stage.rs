//! Check stages and their outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three checks applied to a workspace
///
/// Stages always execute in the order of [`Stage::ORDER`]; a later stage
/// never runs if an earlier one failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Lint,
    Test,
    Format,
}

impl Stage {
    /// The fixed execution order within a workspace
    pub const ORDER: [Stage; 3] = [Stage::Lint, Stage::Test, Stage::Format];

    /// Stage name as used in diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Lint => "Lint",
            Stage::Test => "Test",
            Stage::Format => "Format",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of invoking one collaborator for one workspace
///
/// Produced by inspecting the collaborator's process exit status and
/// consumed immediately by the gate's control flow. A collaborator that
/// could not be spawned at all surfaces here as `Failure` too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Success,
    Failure { diagnostic: String },
}

impl Outcome {
    /// Create a failure outcome with a diagnostic message
    pub fn failure(diagnostic: impl Into<String>) -> Self {
        Self::Failure {
            diagnostic: diagnostic.into(),
        }
    }

    /// Check whether this outcome reports success
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order() {
        assert_eq!(Stage::ORDER, [Stage::Lint, Stage::Test, Stage::Format]);
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Lint.to_string(), "Lint");
        assert_eq!(Stage::Test.to_string(), "Test");
        assert_eq!(Stage::Format.to_string(), "Format");
    }

    #[test]
    fn test_outcome_success_check() {
        assert!(Outcome::Success.is_success());
        assert!(!Outcome::failure("clippy exited with code 101").is_success());
    }
}
