//! Errors used when sizing the board.

use thiserror::Error;

/// Reason a [`BoardSize`][crate::board::BoardSize] could not be constructed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum BoardSizeError {
    /// The requested side length was 0.
    #[error("board must have at least one cell")]
    Empty,
    /// The requested side length overflows the cell count.
    #[error("board size {0} is too large")]
    TooLarge(usize),
}
