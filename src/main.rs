//! Podfeed - a podcast feed generator.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use podfeed::{
    cli::{
        Cli,
        build::{build_podcast, print_podcast},
    },
    config::PodcastConfig,
    log,
};

fn main() {
    if let Err(e) = run() {
        log!("error"; "{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = PodcastConfig::load(&cli.config, cli.build_args())?;

    if cli.is_print() {
        print_podcast(&config)
    } else {
        build_podcast(&config).map(|_| ())
    }
}
