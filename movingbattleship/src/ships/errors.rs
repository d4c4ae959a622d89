use thiserror::Error;

use crate::board::{BoardSize, Coordinate};

/// Reason why a ship could not be constructed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ShipError {
    /// Ships must occupy at least one cell.
    #[error("ship length must be at least 1")]
    ZeroLength,

    /// A ship longer than one cell needs a sailing direction to pick its axis.
    #[error("a ship of length {0} needs a sailing direction")]
    NoAxis(usize),

    /// Part of the ship would be off the board.
    #[error("a ship of length {length} at {head} does not fit on a {board}x{board} board")]
    OffBoard {
        /// Requested head position.
        head: Coordinate,
        /// Requested length.
        length: usize,
        /// Board the ship was meant for.
        board: BoardSize,
    },
}
