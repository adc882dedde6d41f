//! blogconf - typed configuration for a personal blog theme.

#![allow(dead_code)]

mod asset;
mod cli;
mod config;
mod export;
mod logger;
mod render;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::BlogConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    if let Commands::Check { args } = &cli.command {
        logger::set_verbose(args.verbose);
    }

    match &cli.command {
        // Init runs before any config exists
        Commands::Init { name, dry } => cli::init::new_blog(name.as_deref(), &cli.config, *dry),
        Commands::Check { args } => cli::check::check_config(&BlogConfig::load(&cli)?, args),
        Commands::Export { args } => cli::export::export_config(&BlogConfig::load(&cli)?, args),
        Commands::Render { fragment } => {
            cli::render::render_fragment(&BlogConfig::load(&cli)?, *fragment)
        }
    }
}
