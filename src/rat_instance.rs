//! Placement of a rat on the reference screen.

use ratatui::widgets::canvas::Context;

use crate::{
    map::Grid,
    rat::Rat,
    types::{GridPos, PixelPos, SPRITE_INSET},
};

/// A rat tied to the maze it walks in.
///
/// The rat itself only knows where it is relative to its start cell. The instance keeps the pixel
/// offset of that start cell, computed once from the grid, and turns the rat's position into a
/// pixel position for drawing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RatInstance {
    /// The rat being placed.
    rat: Rat,
    /// Pixel of the start cell's top-left corner.
    offset: PixelPos,
    /// Start cell on the grid, when the grid has one.
    start: Option<GridPos>,
}

impl RatInstance {
    /// Places `rat` on the start cell of `grid`.
    #[must_use]
    pub fn new(rat: Rat, grid: &Grid) -> Self {
        Self {
            rat,
            offset: grid.screen_offset(),
            start: grid.start_pos(),
        }
    }

    /// The placed rat.
    #[must_use]
    pub const fn rat(&self) -> &Rat {
        &self.rat
    }

    /// Pixel offset of the start cell.
    #[must_use]
    pub const fn offset(&self) -> PixelPos {
        self.offset
    }

    /// Grid cell the rat currently stands on, counted from the grid's top-left cell.
    #[must_use]
    pub fn cell(&self) -> GridPos {
        let start = self.start.unwrap_or_default();
        let position = self.rat.position();

        GridPos::new(
            start.x.saturating_add(position.x),
            start.y.saturating_add(position.y),
        )
    }

    /// Pixel at which the rat's sprite is drawn.
    #[must_use]
    pub fn pixel_position(&self) -> PixelPos {
        self.offset
            .offset_by_cells(self.rat.position(), SPRITE_INSET)
    }

    /// Forwards `ticks` to the rat.
    pub fn update(&mut self, ticks: u64) {
        self.rat.update(ticks);
    }

    /// Draws the rat at its pixel position.
    pub fn draw(&self, ctx: &mut Context<'_>) {
        self.rat.draw(ctx, self.pixel_position());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Step;

    /// Creates an instance on a 3x2 grid whose start cell sits at row 1, col 1.
    fn create_test_instance(movements: Vec<Step>) -> RatInstance {
        let grid = Grid::parse("3 2\n0 0 0\n0 4 0").expect("test map should parse");
        let rat = Rat::new(GridPos::default(), "@".to_owned(), movements, 10);

        RatInstance::new(rat, &grid)
    }

    #[test]
    fn test_pixel_position_at_start() {
        let instance = create_test_instance(Vec::new());

        assert_eq!(instance.offset(), PixelPos::new(930, 540), "offset of the start cell");
        assert_eq!(
            instance.pixel_position(),
            PixelPos::new(935, 545),
            "the sprite is inset inside its cell"
        );
        assert_eq!(instance.cell(), GridPos::new(1, 1), "rat stands on the start cell");
    }

    #[test]
    fn test_pixel_position_follows_rat() {
        let mut instance = create_test_instance(vec![Step::new(-1, 1)]);

        instance.update(0);
        instance.update(10);

        assert_eq!(instance.rat().position(), GridPos::new(1, -1), "rat moved up and right");
        assert_eq!(
            instance.pixel_position(),
            PixelPos::new(995, 485),
            "one cell right and one cell up from the start"
        );
        assert_eq!(instance.cell(), GridPos::new(2, 0), "top-right cell of the grid");
    }
}
