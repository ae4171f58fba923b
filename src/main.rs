//! This crate contains the source code for the binary for the game ratmaze.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::process::ExitCode;

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use ratmaze::{logging, App, Config};

/// Exit status of a failed startup, `-1` once truncated to a byte.
const FAILURE: u8 = 255;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:?}");
            ExitCode::from(FAILURE)
        }
    }
}

/// Loads the maze named on the command line and plays it, in the terminal or headless.
fn run() -> Result<()> {
    install()?;

    let config = Config::parse();
    logging::init(config.log_file.as_deref())?;

    // Files are loaded before the terminal is taken over so load errors reach a usable stderr.
    let mut app = App::from_config(&config)?;

    if config.headless {
        app.run_headless();
        for (idx, instance) in app.maze().rats().iter().enumerate() {
            let cell = instance.cell();
            println!(
                "rat {idx}: cell ({}, {}), {} steps",
                cell.x,
                cell.y,
                instance.rat().steps_taken()
            );
        }
        return Ok(());
    }

    let mut terminal = ratatui::try_init()?;
    let result = app.run(&mut terminal);
    ratatui::restore();

    result
}
