//! Map data and parsing module.
//!
//! This module contains the [`Grid`] type holding the cell codes of a maze, the parser for the
//! map file format, and the computations that place the maze on the reference screen.
//!
//! A map file starts with the number of columns and rows, followed by `rows * cols` integer cell
//! codes in row-major order:
//!
//! ```text
//! 3 2
//! 0 0 0
//! 0 4 0
//! ```

use std::path::Path;

use crate::{
    error::{LoadError, ParseError},
    file_loader::{self, Tokens},
    types::{GridPos, PixelPos, CELL_SIZE, REFERENCE_HEIGHT, REFERENCE_WIDTH},
};

/// Cell code marking the cell in which rats start.
pub const START_CODE: i32 = 4;

/// Typed view over a cell code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Walkable floor, code 0.
    Floor,
    /// Wall, code 1.
    Wall,
    /// Rat start cell, code 4.
    Start,
    /// Any other code, kept as read.
    Other(i32),
}

impl From<i32> for Cell {
    fn from(code: i32) -> Self {
        match code {
            0 => Self::Floor,
            1 => Self::Wall,
            START_CODE => Self::Start,
            other => Self::Other(other),
        }
    }
}

/// Labyrinth map data container.
///
/// The cells are stored flat in row-major order. The start cell is located once, when the grid is
/// parsed, since every rat instance built from the grid needs it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows declared in the header.
    rows: usize,
    /// Number of columns declared in the header.
    cols: usize,
    /// Cell codes in row-major order, exactly `rows * cols` of them.
    cells: Vec<i32>,
    /// Location of the first start cell, as `(row, col)`.
    start: Option<(usize, usize)>,
}

impl Grid {
    /// Parses the contents of a map file.
    ///
    /// Values after the declared `rows * cols` cells are ignored.
    ///
    /// # Errors
    ///
    /// - [`ParseError::Header`] if the column or row count is missing or negative.
    /// - [`ParseError::Dimensions`] if `cols * rows` overflows.
    /// - [`ParseError::Cell`] with the index of the first cell that is missing or not an
    ///   integer.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let mut tokens = Tokens::new(source);
        let cols: usize = tokens.next_value().ok_or(ParseError::Header)?;
        let rows: usize = tokens.next_value().ok_or(ParseError::Header)?;
        let len = cols
            .checked_mul(rows)
            .ok_or(ParseError::Dimensions { cols, rows })?;

        let mut cells = Vec::new();
        for index in 0..len {
            cells.push(tokens.next_value().ok_or(ParseError::Cell { index })?);
        }

        let start = cells
            .iter()
            .position(|&code| code == START_CODE)
            .map(|index| (index / cols, index % cols));

        Ok(Self {
            rows,
            cols,
            cells,
            start,
        })
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell at `row` and `col`, or [`None`] outside the grid.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if col >= self.cols {
            return None;
        }

        self.cells
            .get(row.checked_mul(self.cols)?.checked_add(col)?)
            .map(|&code| Cell::from(code))
    }

    /// Iterates over every cell as `(row, col, cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, &code)| (index / cols, index % cols, Cell::from(code)))
    }

    /// Returns the `(row, col)` of the first start cell in row-major order.
    #[must_use]
    pub const fn start(&self) -> Option<(usize, usize)> {
        self.start
    }

    /// Width of the maze in reference pixels.
    #[must_use]
    pub fn pixel_width(&self) -> i64 {
        to_pixels(self.cols)
    }

    /// Height of the maze in reference pixels.
    #[must_use]
    pub fn pixel_height(&self) -> i64 {
        to_pixels(self.rows)
    }

    /// Returns the pixel at which the top-left cell lands when the maze is centred on the
    /// reference screen.
    #[must_use]
    pub fn centered_origin(&self) -> PixelPos {
        PixelPos::new(
            (REFERENCE_WIDTH - self.pixel_width()) / 2,
            (REFERENCE_HEIGHT - self.pixel_height()) / 2,
        )
    }

    /// Returns the pixel of the start cell's top-left corner on the centred maze.
    ///
    /// Grids without a start cell place it at the first cell.
    #[must_use]
    pub fn screen_offset(&self) -> PixelPos {
        let (row, col) = self.start.unwrap_or_default();
        let origin = self.centered_origin();

        PixelPos::new(origin.x + to_pixels(col), origin.y + to_pixels(row))
    }

    /// Returns the start cell as a grid position, `x` along columns.
    #[must_use]
    pub fn start_pos(&self) -> Option<GridPos> {
        let (row, col) = self.start?;
        Some(GridPos::new(
            i32::try_from(col).ok()?,
            i32::try_from(row).ok()?,
        ))
    }
}

/// Converts a cell count to reference pixels, saturating for counts no screen could show.
fn to_pixels(cells: usize) -> i64 {
    i64::try_from(cells)
        .unwrap_or(i64::MAX)
        .saturating_mul(CELL_SIZE)
}

/// Loads the map stored in the file at `path`.
///
/// # Errors
///
/// - [`LoadError::Open`] if the file cannot be opened.
/// - [`LoadError::Parse`] if the header is invalid or fewer cells than declared are present.
pub fn load(path: &Path) -> Result<Grid, LoadError> {
    let source = file_loader::read_source(path)?;
    let grid = Grid::parse(&source).map_err(|err| LoadError::parse(path, err))?;

    tracing::info!(
        path = %path.display(),
        rows = grid.rows(),
        cols = grid.cols(),
        "loaded map"
    );
    if grid.start().is_none() {
        tracing::warn!(path = %path.display(), "map has no start cell, rats start at the first cell");
    }

    Ok(grid)
}
