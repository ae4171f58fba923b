//! Coordinate types and screen constants shared across the game.

use std::ops::Add;

/// Side length of a maze cell in reference pixels.
pub const CELL_SIZE: i64 = 60;

/// Width of the reference screen every pixel position is computed against.
pub const REFERENCE_WIDTH: i64 = 1920;

/// Height of the reference screen every pixel position is computed against.
pub const REFERENCE_HEIGHT: i64 = 1080;

/// Distance in reference pixels between a cell's top-left corner and the sprite drawn inside it.
pub const SPRITE_INSET: i64 = 5;

/// Movement delta read from a movement file.
///
/// Files list each pair as `col row`; the pair is stored here with the row first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Step {
    /// Row delta, applied to the vertical axis.
    pub row: i32,
    /// Column delta, applied to the horizontal axis.
    pub col: i32,
}

impl Step {
    /// Creates a step from its row and column deltas.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Position on the maze grid, `x` along columns and `y` along rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridPos {
    /// Column coordinate.
    pub x: i32,
    /// Row coordinate.
    pub y: i32,
}

impl GridPos {
    /// Creates a grid position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add<Step> for GridPos {
    type Output = Self;

    fn add(self, step: Step) -> Self {
        Self {
            x: self.x.saturating_add(step.col),
            y: self.y.saturating_add(step.row),
        }
    }
}

/// Position on the reference screen, `y` growing downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelPos {
    /// Horizontal pixel coordinate.
    pub x: i64,
    /// Vertical pixel coordinate.
    pub y: i64,
}

impl PixelPos {
    /// Creates a pixel position.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns the pixel reached by walking `pos` cells from `self` and stepping inside the cell
    /// by `inset` pixels on both axes.
    #[must_use]
    pub fn offset_by_cells(self, pos: GridPos, inset: i64) -> Self {
        Self {
            x: self.x + i64::from(pos.x) * CELL_SIZE + inset,
            y: self.y + i64::from(pos.y) * CELL_SIZE + inset,
        }
    }
}
