//! Error types for loading map and movement files.
//!
//! Every failure to load one of the two text formats is an invalid-argument condition: the path
//! handed to the loader either cannot be opened or does not hold what its format promises.

use std::{io, path::PathBuf};

/// Failure to load a map or movement file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to open file: {}", path.display())]
    Open {
        /// Path that was handed to the loader.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// The file was read but its contents do not follow the expected format.
    #[error("invalid contents in file {}: {source}", path.display())]
    Parse {
        /// Path that was handed to the loader.
        path: PathBuf,
        /// What was wrong with the contents.
        source: ParseError,
    },
}

/// Format violation found while tokenising a map or movement file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The leading header is missing or is not made of non-negative integers.
    #[error("missing or invalid header")]
    Header,
    /// The declared `cols * rows` does not fit in memory addressing.
    #[error("map dimensions {cols}x{rows} are too large")]
    Dimensions {
        /// Declared column count.
        cols: usize,
        /// Declared row count.
        rows: usize,
    },
    /// A cell value is missing or is not an integer.
    #[error("invalid cell value at index {index}")]
    Cell {
        /// Row-major index of the offending cell.
        index: usize,
    },
    /// A movement pair is missing or is not made of integers.
    #[error("invalid movement at index {index}")]
    Movement {
        /// Position of the offending pair in the sequence.
        index: usize,
    },
}

impl LoadError {
    /// Attaches a path to a format violation.
    pub(crate) fn parse<P: Into<PathBuf>>(path: P, source: ParseError) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
