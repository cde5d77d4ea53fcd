//! Command-line interface for checkgate.
//!
//! A bare invocation runs the full gate across the configured
//! workspaces; subcommands list the workspace sequence and show the
//! resolved configuration.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::{self, ResolvedConfig};
use crate::core::GateRunner;

/// checkgate - Fail-fast quality gate for multi-workspace repositories
#[derive(Parser, Debug)]
#[command(name = "checkgate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the gate configuration file
    #[arg(short, long, env = "CHECKGATE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run lint, test, and format checks across all workspaces (default)
    Run,

    /// List the configured workspaces in gate order
    Workspaces,

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let cfg = config::load(self.config.as_deref())?;

        match self.command.unwrap_or(Commands::Run) {
            Commands::Run => run_gate(&cfg).await,
            Commands::Workspaces => list_workspaces(&cfg),
            Commands::Config => show_config(&cfg),
        }
    }
}

/// Run the gate and terminate with the aggregated exit code
async fn run_gate(cfg: &ResolvedConfig) -> Result<()> {
    let runner = GateRunner::with_cargo(&cfg.cargo_binary);
    let result = runner.run(&cfg.workspaces).await;

    if !result.is_all_passed() {
        std::process::exit(result.exit_code());
    }

    Ok(())
}

/// List the configured workspaces in order
fn list_workspaces(cfg: &ResolvedConfig) -> Result<()> {
    if cfg.workspaces.is_empty() {
        println!("No workspaces configured");
        return Ok(());
    }

    for (index, workspace) in cfg.workspaces.iter().enumerate() {
        println!("{:>3}. {}", index + 1, workspace);
    }

    Ok(())
}

/// Show the resolved configuration
fn show_config(cfg: &ResolvedConfig) -> Result<()> {
    println!("checkgate configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!("Cargo binary: {}", cfg.cargo_binary);
    println!();
    println!("Workspaces ({}):", cfg.workspaces.len());
    for workspace in &cfg.workspaces {
        println!("  {}", workspace);
    }

    Ok(())
}
