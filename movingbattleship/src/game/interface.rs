use crate::board::{BoardSize, BoardView, Coordinate};

/// Everything the game needs from the outside world: a source of targets and somewhere
/// to show the board and the results of each round.
///
/// All calls are blocking. An error from any method aborts
/// [`Game::play`][crate::game::Game::play] and is handed back to the caller.
pub trait Interface {
    /// Error produced by this interface.
    type Error;

    /// Choose the coordinate to bomb this round. Must be on the board.
    fn target(&mut self, board: BoardSize) -> Result<Coordinate, Self::Error>;

    /// Show the board.
    fn render(&mut self, view: &BoardView) -> Result<(), Self::Error>;

    /// Explain the game and the board symbols before the first round.
    fn report_legend(&mut self) -> Result<(), Self::Error>;

    /// Summarize a round: how many bombs hit and how many ships were terminated.
    fn report_round(&mut self, hits: usize, terminated: usize) -> Result<(), Self::Error>;

    /// Announce that every ship has been terminated.
    fn report_game_over(&mut self) -> Result<(), Self::Error>;
}
