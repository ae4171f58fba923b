//! Terminal maze in which rats replay scripted paths.
//!
//! A maze is read from a map file of integer cell codes and every rat from a movement file of
//! grid steps. The [`App`] renders the maze on a canvas covering a 1920x1080 reference screen for
//! a fixed number of frames while the rats walk their scripts, one step per interval of ticks.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

pub mod app;
pub mod config;
pub mod error;
mod events;
mod file_loader;
pub mod logging;
pub mod map;
pub mod maze;
pub mod movement;
pub mod rat;
pub mod rat_instance;
pub mod types;
mod ui;

pub use app::App;
pub use config::Config;
pub use error::{LoadError, ParseError};
pub use maze::Maze;
