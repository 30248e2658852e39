//! seomatic-head - render SEOmatic meta containers into HTML.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use seomatic_head::cli::{Cli, Commands, inject, inspect, render};
use seomatic_head::config::SeomaticConfig;
use seomatic_head::log;

fn main() {
    if let Err(err) = run() {
        log!("error"; "{:#}", err);
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

    let config = SeomaticConfig::load(&cli)?;

    match &cli.command {
        Commands::Render { args } => render::run_render(args, &config),
        Commands::Inject { args } => inject::run_inject(args, &config),
        Commands::Inspect { args } => inspect::run_inspect(args),
    }
}
