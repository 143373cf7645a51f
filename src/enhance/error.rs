//! Error types for loading puzzles and reading grids.

use std::path::PathBuf;

use crate::config::enhance::TABLE_LEN;

/// Failure to build a [`Puzzle`](super::Puzzle) from its text form.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("missing enhancement line")]
    MissingTable,
    #[error("enhancement line has {len} pixels, expected {}", TABLE_LEN)]
    TableLength { len: usize },
    #[error("enhancement and grid should be separated by a blank line")]
    MissingSeparator,
    #[error("separator line should be blank, found {0:?}")]
    NonBlankSeparator(String),
}

/// Failure to answer a question about a [`Grid`](super::Grid).
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("background is lit, so infinitely many pixels are lit")]
    InfiniteLit,
}
