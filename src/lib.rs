//! checkgate - Fail-fast quality gate for multi-workspace repositories
//!
//! Runs a fixed sequence of quality checks (clippy, tests, rustfmt)
//! across an ordered list of workspaces, stopping at the first failure
//! anywhere.
//!
//! # Architecture
//!
//! The gate is built around one rule: first failure wins.
//! - Workspaces are traversed in configured order
//! - Within a workspace the stages run Lint -> Test -> Format
//! - A later stage never runs if an earlier one failed
//! - The process exits 0 only if every stage of every workspace passed
//!
//! # Modules
//!
//! - `adapters`: External check tools (clippy, cargo test, rustfmt)
//! - `core`: Orchestration logic (GateRunner)
//! - `domain`: Data structures (Workspace, Stage, Outcome, RunResult)
//! - `config`: Workspace list discovery and resolution
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Gate every configured workspace
//! checkgate
//!
//! # Show the workspace sequence
//! checkgate workspaces
//!
//! # Inspect resolved configuration
//! checkgate config
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;

// Re-export main types at crate root for convenience
pub use adapters::Checker;
pub use core::GateRunner;
pub use domain::{Outcome, RunResult, Stage, Workspace};
