//! Loader for scripted rat movements.
//!
//! A movement file starts with the number of steps `n`, followed by `n` pairs of integers. Each
//! pair is written as `col row` and is stored as a [`Step`] with the row delta first:
//!
//! ```text
//! 3
//! 1 0
//! 0 1
//! 2 2
//! ```
//!
//! The values themselves are not bounded; only their presence and integer-ness are checked.

use std::path::Path;

use crate::{
    error::{LoadError, ParseError},
    file_loader::{self, Tokens},
    types::Step,
};

/// Loads the movement sequence stored in the file at `path`.
///
/// # Errors
///
/// - [`LoadError::Open`] if the file cannot be opened.
/// - [`LoadError::Parse`] if the count or one of the declared pairs is missing or not an
///   integer.
pub fn load(path: &Path) -> Result<Vec<Step>, LoadError> {
    let source = file_loader::read_source(path)?;
    let steps = parse(&source).map_err(|err| LoadError::parse(path, err))?;

    tracing::info!(path = %path.display(), steps = steps.len(), "loaded movements");

    Ok(steps)
}

/// Parses the contents of a movement file.
///
/// Values after the declared number of pairs are ignored.
///
/// # Errors
///
/// - [`ParseError::Header`] if the leading count is missing or negative.
/// - [`ParseError::Movement`] with the index of the first pair that is missing or malformed.
pub fn parse(source: &str) -> Result<Vec<Step>, ParseError> {
    let mut tokens = Tokens::new(source);
    let count: usize = tokens.next_value().ok_or(ParseError::Header)?;

    // The count comes from the file, so it only bounds the loop and never the allocation.
    let mut steps = Vec::new();
    for index in 0..count {
        let col = tokens.next_value().ok_or(ParseError::Movement { index })?;
        let row = tokens.next_value().ok_or(ParseError::Movement { index })?;
        steps.push(Step::new(row, col));
    }

    Ok(steps)
}
