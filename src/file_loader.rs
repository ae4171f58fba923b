//! File reading and integer tokenising shared by the map and movement loaders.

use std::{fs, path::Path, str::FromStr, str::SplitAsciiWhitespace};

use crate::error::LoadError;

/// Reads the whole file at `path` into memory.
///
/// Both formats are small enough that reading them in one go is cheaper than streaming them. Any
/// I/O failure, including the file not existing, is reported as [`LoadError::Open`].
pub(crate) fn read_source(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Cursor over the whitespace-separated integers of a file.
///
/// Line breaks carry no meaning in either format, so values are consumed one after the other
/// regardless of how they are laid out.
pub(crate) struct Tokens<'src> {
    /// Remaining whitespace-separated words of the source.
    words: SplitAsciiWhitespace<'src>,
}

impl<'src> Tokens<'src> {
    /// Creates a cursor positioned before the first value of `source`.
    pub(crate) fn new(source: &'src str) -> Self {
        Self {
            words: source.split_ascii_whitespace(),
        }
    }

    /// Consumes the next value and parses it as `T`.
    ///
    /// Returns [`None`] once the source is exhausted or when the next word is not a valid `T`.
    pub(crate) fn next_value<T: FromStr>(&mut self) -> Option<T> {
        self.words.next()?.parse().ok()
    }
}

/// Writes `contents` to a uniquely named file in a per-process scratch directory.
#[cfg(test)]
pub(crate) fn write_fixture(name: &str, contents: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("ratmaze-tests-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("failed to create fixture directory");
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write fixture file");
    path
}
