//! Error types for the game engine.

use derive_more::{Display, Error};
use tracing::instrument;

/// A board index outside 0-8 was supplied.
///
/// This signals a caller bug, not a game event: occupied squares and
/// finished games are reported as [`crate::Rejection`] values instead.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Board index {} out of range (must be 0-8) at {}:{}", index, file, line)]
pub struct InvalidIndexError {
    /// The offending index.
    pub index: usize,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InvalidIndexError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(index: usize) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            index,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
