//! Log subscriber setup.
//!
//! The terminal belongs to the canvas while the game runs, so logs only ever go to a file.

use std::{fs::File, path::Path, sync::Mutex};

use color_eyre::eyre::{eyre, Result, WrapErr as _};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "info";

/// Installs a global subscriber writing to `log_file`, or does nothing without one.
///
/// The verbosity follows `RUST_LOG` and falls back to `info`.
///
/// # Errors
///
/// - The log file cannot be created.
/// - A global subscriber is already installed.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_without_file_is_noop() {
        assert!(init(None).is_ok(), "no file means no subscriber and no error");
    }

    #[test]
    fn test_init_unwritable_file() {
        let result = init(Some(Path::new("./no/such/dir/ratmaze.log")));

        assert!(result.is_err(), "the log file's directory does not exist");
    }
}
