//! Terminal rendering of the maze on a canvas spanning the reference screen.
//!
//! Positions are computed in reference pixels with `y` growing downwards. The canvas covers the
//! same 1920x1080 space with `y` growing upwards and scales it to whatever the terminal offers.

use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Context},
        Clear,
    },
    Frame,
};

use crate::{
    types::{PixelPos, CELL_SIZE, REFERENCE_HEIGHT, REFERENCE_WIDTH},
    App,
};

/// Side length of a maze cell in canvas units.
pub(crate) const CANVAS_CELL: f64 = CELL_SIZE as f64;

/// Converts a reference pixel to canvas coordinates.
pub(crate) fn to_canvas(pixel: PixelPos) -> (f64, f64) {
    (
        pixel.x as f64,
        REFERENCE_HEIGHT.saturating_sub(pixel.y) as f64,
    )
}

/// Builds a canvas whose bounds are the reference screen.
pub(crate) fn reference_canvas<F>(paint: F) -> Canvas<'static, F>
where
    F: Fn(&mut Context<'_>),
{
    Canvas::default()
        .x_bounds([0.0, REFERENCE_WIDTH as f64])
        .y_bounds([0.0, REFERENCE_HEIGHT as f64])
        .marker(Marker::Braille)
        .paint(paint)
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
pub(crate) fn clear(frame: &mut Frame) {
    frame.render_widget(Clear, frame.area());
}

/// Renders one frame of the game: the maze canvas and a status line below it.
pub(crate) fn draw(app: &App, frame: &mut Frame) {
    clear(frame);

    let [maze_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    let maze = app.maze();
    let origin = app.origin();
    let canvas = reference_canvas(|ctx| maze.draw(ctx, origin));
    frame.render_widget(canvas, maze_area);

    let status = Line::styled(
        format!("frame {}/{} | (q) quit", app.frame(), app.frames()),
        Style::default().fg(Color::Green),
    )
    .centered();
    frame.render_widget(status, status_area);
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{map::Grid, maze::Maze, rat::Rat, types::GridPos, Config};

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(96, 28);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    /// Creates an app around a small maze holding one rat.
    fn create_test_app() -> App {
        let grid = Grid::parse("3 3\n1 1 1\n1 4 1\n1 1 1").expect("test map should parse");
        let mut maze = Maze::new(grid);
        maze.add_rat(Rat::new(GridPos::default(), "@".to_owned(), Vec::new(), 1));
        let config = Config::try_parse_from(["ratmaze", "--frames", "10"])
            .expect("test arguments should parse");

        App::new(maze, &config)
    }

    #[test]
    fn test_to_canvas_flips_vertical_axis() {
        let (left, top) = to_canvas(PixelPos::new(0, 0));
        assert!(left.abs() < f64::EPSILON, "left edge stays at zero");
        assert!((top - 1080.0).abs() < f64::EPSILON, "top row is the canvas' top edge");

        let (right, bottom) = to_canvas(PixelPos::new(1920, 1080));
        assert!((right - 1920.0).abs() < f64::EPSILON, "right edge stays at 1920");
        assert!(bottom.abs() < f64::EPSILON, "bottom row is the canvas' zero height");
    }

    #[test]
    fn test_draw_frame() {
        let app = create_test_app();
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| draw(&app, frame));

        assert!(result.is_ok(), "drawing a frame should succeed");
        let printed: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(printed.contains('@'), "the rat is drawn");
        assert!(printed.contains("frame 0/10"), "the status line shows progress");
    }

    #[test]
    fn test_draw_tiny_terminal() {
        let app = create_test_app();
        let mut terminal =
            Terminal::new(TestBackend::new(4, 2)).expect("failed to create test terminal");

        let result = terminal.draw(|frame| draw(&app, frame));

        assert!(result.is_ok(), "drawing should not fail on tiny terminals");
    }

    #[test]
    fn test_clear_function() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(clear);

        assert!(result.is_ok(), "clearing screen should succeed");
    }
}
