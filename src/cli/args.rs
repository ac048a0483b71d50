// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;

/// gitgrade - GitHub repository report cards
///
/// Scores a public repository across nine quality categories and suggests
/// what to improve next.
#[derive(Parser, Debug)]
#[command(name = "gitgrade")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Report cards for GitHub repositories", long_about = None)]
#[command(propagate_version = true)]
#[command(subcommand_precedence_over_arg = true)]
pub struct Cli {
    /// The command to run (defaults to analyze if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Repositories to analyze, e.g. https://github.com/owner/repo
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Report format (overrides ui.format)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Fetch every repository afresh
    #[arg(long, global = true)]
    pub no_cache: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Analyze one or more repositories (default command)
    Analyze(AnalyzeArgs),

    /// Print version information
    Version,

    /// Write an example gitgrade.toml in the current directory
    Init(InitArgs),
}

/// Arguments for the analyze command.
#[derive(Parser, Debug, Default, Clone)]
pub struct AnalyzeArgs {
    /// Repositories to analyze; prompts when omitted
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short = 'F', long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Analyze with the top-level URLs.
    pub fn effective_command(&self) -> Commands {
        self.command.clone().unwrap_or_else(|| {
            Commands::Analyze(AnalyzeArgs {
                urls: self.urls.clone(),
            })
        })
    }
}
