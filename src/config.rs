//! Command-line configuration.
//!
//! Every flag defaults to the behaviour of the plain `ratmaze` invocation: one rat replaying
//! `./assets/movements/rat1.txt` in `./assets/maps/maze1.txt` for 400 frames.

use std::path::PathBuf;

use clap::Parser;

use crate::{rat::DEFAULT_STEP_INTERVAL, types::PixelPos};

/// Default number of frames rendered before the game ends.
pub const DEFAULT_FRAMES: u32 = 400;

/// Default delay between two frames, in milliseconds.
pub const DEFAULT_FRAME_DELAY: u64 = 16;

/// Rats replaying scripted paths through a maze.
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
#[command(version, about)]
pub struct Config {
    /// Map file holding the maze's cell codes.
    #[arg(long, default_value = "./assets/maps/maze1.txt")]
    pub map: PathBuf,
    /// Movement file of a rat; repeat the flag to add more rats.
    #[arg(long = "movements", default_value = "./assets/movements/rat1.txt")]
    pub movements: Vec<PathBuf>,
    /// Text drawn for every rat.
    #[arg(long, default_value = "@")]
    pub sprite: String,
    /// Number of frames to render.
    #[arg(long, default_value_t = DEFAULT_FRAMES, value_parser = clap::value_parser!(u32).range(1..))]
    pub frames: u32,
    /// Delay between frames in milliseconds.
    #[arg(long, default_value_t = DEFAULT_FRAME_DELAY)]
    pub frame_delay: u64,
    /// Milliseconds between two steps of a rat.
    #[arg(long, default_value_t = DEFAULT_STEP_INTERVAL)]
    pub step_interval: u64,
    /// Pixel, as `X,Y` on the 1920x1080 reference screen, at which the maze's top-left cell is
    /// drawn. The maze is centred when omitted.
    #[arg(long, value_parser = parse_origin)]
    pub origin: Option<PixelPos>,
    /// Run without a terminal and print where every rat ends up.
    #[arg(long)]
    pub headless: bool,
    /// File to write logs to; nothing is logged without it.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Parses an `X,Y` pixel position.
fn parse_origin(input: &str) -> Result<PixelPos, String> {
    let (x, y) = input
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but found `{input}`"))?;
    let x = x
        .trim()
        .parse()
        .map_err(|err| format!("invalid X coordinate `{x}`: {err}"))?;
    let y = y
        .trim()
        .parse()
        .map_err(|err| format!("invalid Y coordinate `{y}`: {err}"))?;

    Ok(PixelPos::new(x, y))
}
