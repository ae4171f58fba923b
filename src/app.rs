//! Core application state and the fixed-length render loop.

use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{events, maze::Maze, types::PixelPos, ui, Config};

/// Application state container for the game.
///
/// This structure holds the maze being played and the loop settings taken from the
/// [`Config`]. Ratatui renders from it and key events write to it.
pub struct App {
    /// Application exit flag.
    ///
    /// Set when the user presses a quit key; the loop stops at the end of the current frame.
    pub(crate) exit: bool,
    /// The maze and the rats walking it.
    maze: Maze,
    /// Pixel at which the grid's top-left cell is drawn.
    origin: PixelPos,
    /// Index of the frame being rendered.
    frame: u32,
    /// Number of frames to render before stopping.
    frames: u32,
    /// Time the loop waits for input after each frame.
    pub(crate) frame_delay: Duration,
}

impl App {
    /// Creates an app around an already loaded maze.
    ///
    /// Without an explicit origin the grid is centred on the reference screen, the same way the
    /// rats' start offsets are.
    #[must_use]
    pub fn new(maze: Maze, config: &Config) -> Self {
        let origin = config
            .origin
            .unwrap_or_else(|| maze.grid().centered_origin());

        Self {
            exit: false,
            maze,
            origin,
            frame: 0,
            frames: config.frames,
            frame_delay: Duration::from_millis(config.frame_delay),
        }
    }

    /// Loads the map and movement files named by `config` and creates an app around them.
    ///
    /// # Errors
    ///
    /// - [`crate::LoadError`] if any of the files cannot be loaded.
    pub fn from_config(config: &Config) -> Result<Self> {
        let maze = Maze::from_files(
            &config.map,
            &config.movements,
            &config.sprite,
            config.step_interval,
        )?;

        Ok(Self::new(maze, config))
    }

    /// The maze being played.
    #[must_use]
    pub const fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Pixel at which the grid is drawn.
    #[must_use]
    pub const fn origin(&self) -> PixelPos {
        self.origin
    }

    /// Index of the frame being rendered.
    #[must_use]
    pub const fn frame(&self) -> u32 {
        self.frame
    }

    /// Number of frames the loop renders.
    #[must_use]
    pub const fn frames(&self) -> u32 {
        self.frames
    }

    /// Runs the render loop.
    ///
    /// Each frame updates the maze with the milliseconds elapsed since the loop started, draws it,
    /// and waits up to the frame delay for a quit key. The loop ends after the configured number
    /// of frames or as soon as a quit key is pressed.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`] if drawing or polling the terminal fails.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let started = Instant::now();

        while self.frame < self.frames && !self.exit {
            self.maze.update(elapsed_ticks(started.elapsed()));
            let _ = terminal.draw(|frame| ui::draw(self, frame))?;
            events::handle_events(self)?;
            self.frame += 1;
        }

        tracing::info!(
            frames = self.frame,
            finished = self.maze.is_finished(),
            "render loop ended"
        );

        Ok(())
    }

    /// Runs the same number of frames without a terminal.
    ///
    /// Frame `n` is given the tick `n * frame_delay`, so the outcome does not depend on how fast
    /// the machine is.
    pub fn run_headless(&mut self) {
        let delay = elapsed_ticks(self.frame_delay);

        while self.frame < self.frames {
            self.maze
                .update(u64::from(self.frame).saturating_mul(delay));
            self.frame += 1;
        }

        tracing::info!(
            frames = self.frame,
            finished = self.maze.is_finished(),
            "headless run ended"
        );
    }
}

/// Converts a duration to whole milliseconds, the unit ticks are counted in.
fn elapsed_ticks(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
