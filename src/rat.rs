//! Rat entity replaying a scripted sequence of movements.
//!
//! A rat does not decide where to go: it is handed the steps read from a movement file and plays
//! them back, one step every `step_interval` ticks, starting from the first tick it is updated
//! with.

use ratatui::{
    style::{Color, Style},
    text::Line,
    widgets::canvas::Context,
};

use crate::{
    types::{GridPos, PixelPos, Step},
    ui,
};

/// Ticks between two consecutive steps when nothing else is configured.
pub const DEFAULT_STEP_INTERVAL: u64 = 250;

/// Rat entity state.
///
/// This structure tracks the replay of a movement sequence: the position reached so far, the
/// index of the next step to apply, and the tick at which the replay started.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rat {
    /// Current position, relative to the cell the rat started in.
    position: GridPos,
    /// Steps to replay, in order.
    movements: Vec<Step>,
    /// Index into `movements` of the next step to apply.
    next: usize,
    /// Text drawn on the canvas to represent the rat.
    sprite: String,
    /// Number of ticks between two steps.
    step_interval: u64,
    /// Tick of the first update, once one has happened.
    started_at: Option<u64>,
}

impl Rat {
    /// Creates a rat at `position` that will replay `movements`.
    #[must_use]
    pub const fn new(
        position: GridPos,
        sprite: String,
        movements: Vec<Step>,
        step_interval: u64,
    ) -> Self {
        Self {
            position,
            movements,
            next: 0,
            sprite,
            step_interval,
            started_at: None,
        }
    }

    /// Current position of the rat.
    #[must_use]
    pub const fn position(&self) -> GridPos {
        self.position
    }

    /// Text used to draw the rat.
    #[must_use]
    pub fn sprite(&self) -> &str {
        &self.sprite
    }

    /// Whether every movement has been applied.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.next >= self.movements.len()
    }

    /// Number of movements applied so far.
    #[must_use]
    pub const fn steps_taken(&self) -> usize {
        self.next
    }

    /// Advances the replay to `ticks`.
    ///
    /// The first call only records the starting tick. Afterwards one step becomes due every
    /// `step_interval` ticks and every due step is applied, so a late update catches up. With an
    /// interval of zero each call applies exactly one step. Once the sequence is exhausted this
    /// does nothing.
    pub fn update(&mut self, ticks: u64) {
        if self.is_finished() {
            return;
        }

        let started_at = *self.started_at.get_or_insert(ticks);
        let due = ticks
            .saturating_sub(started_at)
            .checked_div(self.step_interval)
            .map_or(self.next.saturating_add(1), |due| {
                usize::try_from(due).unwrap_or(usize::MAX)
            })
            .min(self.movements.len());

        while self.next < due {
            if let Some(&step) = self.movements.get(self.next) {
                self.position = self.position + step;
                tracing::debug!(
                    step = self.next,
                    x = self.position.x,
                    y = self.position.y,
                    "rat moved"
                );
            }
            self.next += 1;
        }
    }

    /// Draws the rat's sprite with its top-left corner at `at`.
    pub fn draw(&self, ctx: &mut Context<'_>, at: PixelPos) {
        let (x, y) = ui::to_canvas(at);
        ctx.print(
            x,
            y,
            Line::styled(self.sprite.clone(), Style::default().fg(Color::Yellow)),
        );
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// Creates a rat at the origin with a short scripted path.
    fn create_test_rat(step_interval: u64) -> Rat {
        Rat::new(
            GridPos::default(),
            "@".to_owned(),
            vec![Step::new(0, 1), Step::new(1, 0), Step::new(2, 2)],
            step_interval,
        )
    }

    #[test]
    fn test_first_update_only_starts_replay() {
        let mut rat = create_test_rat(100);

        rat.update(5_000);

        assert_eq!(rat.position(), GridPos::default(), "no step is due yet");
        assert_eq!(rat.steps_taken(), 0, "nothing has been consumed");
    }

    #[test]
    fn test_update_paces_steps() {
        let mut rat = create_test_rat(100);

        rat.update(1_000);
        rat.update(1_099);
        assert_eq!(rat.steps_taken(), 0, "one interval has not passed yet");

        rat.update(1_100);
        assert_eq!(rat.position(), GridPos::new(1, 0), "first step moves one column");

        rat.update(1_200);
        assert_eq!(rat.position(), GridPos::new(1, 1), "second step moves one row");
    }

    #[test]
    fn test_update_catches_up_after_late_tick() {
        let mut rat = create_test_rat(100);

        rat.update(0);
        rat.update(250);

        assert_eq!(rat.steps_taken(), 2, "two intervals have passed");
        assert_eq!(rat.position(), GridPos::new(1, 1), "both due steps are applied");
    }

    #[test]
    fn test_update_after_exhaustion_is_noop() {
        let mut rat = create_test_rat(10);

        rat.update(0);
        rat.update(1_000);
        assert!(rat.is_finished(), "every step is due");
        let position = rat.position();

        rat.update(2_000);

        assert_eq!(rat.position(), position, "exhausted rats stay put");
        assert_eq!(rat.steps_taken(), 3, "no step is taken twice");
    }

    #[test]
    fn test_zero_interval_steps_once_per_update() {
        let mut rat = create_test_rat(0);

        rat.update(7);
        assert_eq!(rat.steps_taken(), 1, "first update takes a step");

        rat.update(7);
        assert_eq!(rat.steps_taken(), 2, "second update takes another");
    }

    #[test]
    fn test_rat_without_movements() {
        let mut rat = Rat::new(GridPos::new(3, 4), "r".to_owned(), Vec::new(), 1);

        rat.update(100);

        assert!(rat.is_finished(), "an empty script is finished from the start");
        assert_eq!(rat.position(), GridPos::new(3, 4), "the rat never moves");
        assert_eq!(rat.sprite(), "r", "sprite is kept as given");
    }

    proptest! {
        #[test]
        fn test_final_position_is_cumulative_sum(
            start_x in -1_000_i32..1_000,
            start_y in -1_000_i32..1_000,
            deltas in proptest::collection::vec((-50_i32..50, -50_i32..50), 0..64),
            interval in 0_u64..20,
        ) {
            let movements: Vec<Step> = deltas.iter().map(|&(row, col)| Step::new(row, col)).collect();
            let mut rat = Rat::new(GridPos::new(start_x, start_y), "@".to_owned(), movements, interval);

            let mut ticks = 0;
            while !rat.is_finished() {
                rat.update(ticks);
                ticks += interval.max(1);
            }

            let expected = deltas.iter().fold(GridPos::new(start_x, start_y), |pos, &(row, col)| {
                GridPos::new(pos.x + col, pos.y + row)
            });
            prop_assert_eq!(rat.position(), expected);
            prop_assert_eq!(rat.steps_taken(), deltas.len());
        }
    }
}
