//! Event handling for the render loop.
//!
//! The game takes no input; the only key it listens for ends the loop early.

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::App;

/// Waits up to the frame delay for a key press and marks the app for exit on a quit key.
///
/// This doubles as the frame delay: the loop is paced by how long this function polls.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(app.frame_delay)? {
        if let Event::Key(key) = event::read()? {
            if is_quit_key(key) {
                tracing::info!("quit requested");
                app.exit = true;
            }
        }
    }

    Ok(())
}

/// Whether `key` asks the loop to stop.
const fn is_quit_key(key: KeyEvent) -> bool {
    matches!(key.kind, KeyEventKind::Press) && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
}

#[cfg(test)]
mod tests {
    use ratatui::crossterm::event::KeyModifiers;

    use super::*;

    #[test]
    fn test_quit_keys() {
        assert!(
            is_quit_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            "q quits"
        );
        assert!(
            is_quit_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            "escape quits"
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        assert!(
            !is_quit_key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)),
            "movement keys do nothing"
        );
    }

    #[test]
    fn test_release_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;

        assert!(!is_quit_key(key), "only presses count");
    }
}
