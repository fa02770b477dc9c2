//! Albumart - procedural album-cover placeholder generator.

mod cli;
mod config;
mod error;
mod gradient;
mod output;
mod render;
mod shapes;
mod theme;
mod vignette;

use std::process;

use clap::Parser;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::CoverError;
use crate::output::{save_png, Summary};
use crate::render::render_cover;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CoverError> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(CoverError::Config)?;
    let output_path = config.output_path(cli.output.as_deref());

    if cli.verbose {
        eprintln!("Config: {}", config_path.display());
        eprintln!("Output: {}", output_path.display());
    }

    let canvas = render_cover(theme::COVER_SIZE, cli.verbose)?;

    if cli.verbose {
        eprintln!("Encoding PNG");
    }
    save_png(&canvas, &output_path)?;

    let summary = Summary::new(&output_path, &canvas);
    if cli.json {
        println!("{}", summary.to_json()?);
    } else {
        println!("{summary}");
    }

    Ok(())
}
