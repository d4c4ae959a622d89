use thiserror::Error;

use crate::board::BoardSize;

/// Error returned when a game is given a ship built for a different board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("ship {index} was built for a {ship}x{ship} board but the game is {game}x{game}")]
pub struct GameError {
    /// Position of the offending ship in the list passed to the game.
    index: usize,
    /// Board the ship was built for.
    ship: BoardSize,
    /// Board of the game.
    game: BoardSize,
}

impl GameError {
    pub(super) fn new(index: usize, ship: BoardSize, game: BoardSize) -> Self {
        Self { index, ship, game }
    }

    /// Position of the offending ship in the list passed to the game.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Board the ship was built for.
    pub fn ship_board(&self) -> BoardSize {
        self.ship
    }

    /// Board of the game.
    pub fn game_board(&self) -> BoardSize {
        self.game
    }
}
