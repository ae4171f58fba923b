//! The maze: a grid plus the rats walking through it.

use std::path::{Path, PathBuf};

use ratatui::{style::Color, widgets::canvas::Context, widgets::canvas::Rectangle};

use crate::{
    error::LoadError,
    map::{self, Cell, Grid},
    movement,
    rat::Rat,
    rat_instance::RatInstance,
    types::{GridPos, PixelPos},
    ui,
};

/// Grid and rat instances updated and drawn once per frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Cell codes of the maze.
    grid: Grid,
    /// Every rat walking the maze.
    rats: Vec<RatInstance>,
}

impl Maze {
    /// Creates a maze without rats.
    #[must_use]
    pub const fn new(grid: Grid) -> Self {
        Self {
            grid,
            rats: Vec::new(),
        }
    }

    /// Loads the map at `map_path` and places one rat per movement file on its start cell.
    ///
    /// Every rat is drawn with `sprite` and takes one step every `step_interval` ticks. Loading
    /// stops at the first file that fails.
    ///
    /// # Errors
    ///
    /// - [`LoadError`] if the map or any of the movement files cannot be loaded.
    pub fn from_files(
        map_path: &Path,
        movement_paths: &[PathBuf],
        sprite: &str,
        step_interval: u64,
    ) -> Result<Self, LoadError> {
        let mut maze = Self::new(map::load(map_path)?);

        for path in movement_paths {
            let movements = movement::load(path)?;
            maze.add_rat(Rat::new(
                GridPos::default(),
                sprite.to_owned(),
                movements,
                step_interval,
            ));
        }

        Ok(maze)
    }

    /// Places `rat` on the start cell of the maze.
    pub fn add_rat(&mut self, rat: Rat) {
        self.rats.push(RatInstance::new(rat, &self.grid));
    }

    /// Cell codes of the maze.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Every rat walking the maze, in the order they were added.
    #[must_use]
    pub fn rats(&self) -> &[RatInstance] {
        &self.rats
    }

    /// Whether every rat has replayed its whole script.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.rats.iter().all(|instance| instance.rat().is_finished())
    }

    /// Advances every rat to `ticks`.
    pub fn update(&mut self, ticks: u64) {
        for rat in &mut self.rats {
            rat.update(ticks);
        }
    }

    /// Draws the grid with its top-left cell at `origin`, then every rat at its own position.
    pub fn draw(&self, ctx: &mut Context<'_>, origin: PixelPos) {
        for (row, col, cell) in self.grid.cells() {
            let Some(color) = cell_color(cell) else {
                continue;
            };
            let (Ok(row), Ok(col)) = (i32::try_from(row), i32::try_from(col)) else {
                continue;
            };

            // Canvas rectangles are anchored at their bottom-left corner.
            let corner = origin.offset_by_cells(GridPos::new(col, row.saturating_add(1)), 0);
            let (x, y) = ui::to_canvas(corner);
            ctx.draw(&Rectangle {
                x,
                y,
                width: ui::CANVAS_CELL,
                height: ui::CANVAS_CELL,
                color,
            });
        }

        ctx.layer();
        for rat in &self.rats {
            rat.draw(ctx);
        }
    }
}

/// Color a cell is outlined with, or [`None`] for cells that are left blank.
const fn cell_color(cell: Cell) -> Option<Color> {
    match cell {
        Cell::Floor => None,
        Cell::Wall => Some(Color::Green),
        Cell::Start => Some(Color::Red),
        Cell::Other(_) => Some(Color::DarkGray),
    }
}
