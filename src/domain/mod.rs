//! Domain types for the checkgate orchestrator.
//!
//! This module contains the core data structures:
//! - Workspace: handle to one checkable project
//! - Stage and Outcome: per-check identity and result
//! - RunResult: aggregate pass/fail for a whole run

pub mod result;
pub mod stage;
pub mod workspace;

// Re-export commonly used types
pub use result::RunResult;
pub use stage::{Outcome, Stage};
pub use workspace::Workspace;
