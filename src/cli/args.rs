//! Command-line interface definitions.

use crate::config::FeedFormat;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Podcast feed generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: podfeed.toml)
    #[arg(short = 'C', long, global = true, default_value = "podfeed.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the feed and write it into the output directory
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Build the feed in memory and print it to stdout
    #[command(visible_alias = "p")]
    Print {
        #[command(flatten)]
        build_args: BuildArgs,
    },
}

/// Shared build arguments for Build and Print commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Episode manifest (JSON or TOML, relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub items: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Maximum number of episodes in the feed (0 = unlimited)
    #[arg(short = 'n', long = "max-items")]
    pub max_items: Option<usize>,

    /// Override site URL for deployment.
    ///
    /// Entry ids and relative audio links are resolved against this URL,
    /// so a CI build can target the production host without editing
    /// podfeed.toml.
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Feed format
    #[arg(short, long, value_enum)]
    pub format: Option<FeedFormat>,

    /// Pretty-print the XML output
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub pretty: Option<bool>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Cli {
    pub fn build_args(&self) -> &BuildArgs {
        match &self.command {
            Commands::Build { build_args } | Commands::Print { build_args } => build_args,
        }
    }

    pub const fn is_print(&self) -> bool {
        matches!(self.command, Commands::Print { .. })
    }
}
