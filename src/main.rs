//! seomark - Open Graph, Twitter Card and Schema.org markup for rendered pages.

mod admin;
mod cli;
mod config;
mod logger;
mod page;
mod seo;
mod store;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, common::Session};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { force, dry } => cli::init::init(&cli.config, *force, *dry),
        Commands::Render { page, point } => cli::render::render(&open(&cli)?, page, *point),
        Commands::Inject { html, page, output } => {
            cli::render::inject_file(&open(&cli)?, html, page, output.as_deref())
        }
        Commands::Settings { action } => cli::settings::run(&mut open(&cli)?, action),
        Commands::Meta { action } => cli::meta::run(&mut open(&cli)?, action),
        Commands::Uninstall { yes } => cli::uninstall::run(&mut open(&cli)?, *yes),
    }
}

/// Load config and store for commands that need an initialized project.
fn open(cli: &Cli) -> Result<Session> {
    let config = cli::common::load_config(&cli.config)?;
    debug!("config"; "loaded {}", config.config_path.display());
    Session::open(config)
}
