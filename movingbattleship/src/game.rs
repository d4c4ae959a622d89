//! Implementation of the game as a whole.
//!
//! A [`Game`] owns the ships and the bombs and advances them one round at a time. The
//! player, the display and the messages are supplied through the [`Interface`] trait,
//! so the same game can be driven from a terminal or from a test script.
use std::fmt;

use log::{debug, info};

use crate::{
    board::{BoardSize, BoardView, Coordinate},
    ships::Ship,
};

pub use self::{bombs::Bombs, errors::GameError, interface::Interface};

mod bombs;
mod errors;
mod interface;

/// Number of turns a freshly placed bomb stays on the board.
pub const NEW_BOMB_TURNS: u32 = 3;

/// Whether the game is still running.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GameStatus {
    /// At least one ship is left.
    Ongoing,
    /// Every ship has been terminated.
    Over,
}

/// Outcome of a single round.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Round {
    /// Coordinate bombed this round.
    target: Coordinate,
    /// Bomb coordinates that hit a ship, once per ship hit.
    hits: Vec<Coordinate>,
    /// Number of ships removed this round.
    terminated: usize,
    /// Status of the game after the round.
    status: GameStatus,
}

impl Round {
    /// Coordinate bombed this round.
    pub fn target(&self) -> Coordinate {
        self.target
    }

    /// Bomb coordinates that hit a ship this round. A coordinate appears once for each
    /// ship it hit.
    pub fn hits(&self) -> &[Coordinate] {
        &self.hits
    }

    /// Number of new hits scored this round.
    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }

    /// Number of ships terminated this round.
    pub fn terminated(&self) -> usize {
        self.terminated
    }

    /// Status of the game after the round.
    pub fn status(&self) -> GameStatus {
        self.status
    }
}

/// A game of moving battleship on a single square board.
#[derive(Debug, Clone)]
pub struct Game {
    /// Size of the board.
    board: BoardSize,

    /// Ships that have not been terminated yet.
    ships: Vec<Ship>,

    /// Live bombs.
    bombs: Bombs,

    /// Current status. `Over` exactly when `ships` is empty.
    status: GameStatus,

    /// Intact ship cells as of the last round, in ship order.
    intact_cells: Vec<Coordinate>,

    /// Damaged ship cells as of the last round, in ship order.
    damaged_cells: Vec<Coordinate>,

    /// Number of rounds played.
    rounds: usize,
}

impl Game {
    /// Start a game on the given board with the given ships.
    /// Panics if any ship was built for a different board size.
    pub fn new(board: BoardSize, ships: Vec<Ship>) -> Self {
        match Self::try_new(board, ships) {
            Ok(game) => game,
            Err(err) => panic!("{}", err),
        }
    }

    /// Start a game on the given board with the given ships. Fails if any ship was
    /// built for a different board size. A game without ships is over from the start.
    pub fn try_new(board: BoardSize, ships: Vec<Ship>) -> Result<Self, GameError> {
        if let Some((index, ship)) = ships
            .iter()
            .enumerate()
            .find(|(_, ship)| ship.board() != board)
        {
            return Err(GameError::new(index, ship.board(), board));
        }
        let intact_cells = ships.iter().flat_map(|ship| ship.intact_cells()).collect();
        let damaged_cells = ships
            .iter()
            .flat_map(|ship| ship.damaged_cells().iter().copied())
            .collect();
        let status = if ships.is_empty() {
            GameStatus::Over
        } else {
            GameStatus::Ongoing
        };
        Ok(Self {
            board,
            ships,
            bombs: Bombs::default(),
            status,
            intact_cells,
            damaged_cells,
            rounds: 0,
        })
    }

    /// Size of the board.
    pub fn board(&self) -> BoardSize {
        self.board
    }

    /// Ships still in play.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Live bombs.
    pub fn bombs(&self) -> &Bombs {
        &self.bombs
    }

    /// Current status of the game.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once every ship has been terminated.
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    /// Number of rounds played so far.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Intact ship cells as of the end of the last round.
    pub fn intact_cells(&self) -> &[Coordinate] {
        &self.intact_cells
    }

    /// Damaged ship cells as of the end of the last round.
    pub fn damaged_cells(&self) -> &[Coordinate] {
        &self.damaged_cells
    }

    /// View of the board without any hits highlighted. Before the first round this
    /// shows every ship intact.
    pub fn view(&self) -> BoardView<'_> {
        BoardView::new(
            self.board,
            &[],
            &self.bombs,
            &self.damaged_cells,
            &self.intact_cells,
        )
    }

    /// View of the board after `round`, highlighting the hits it scored.
    pub fn round_view<'a>(&'a self, round: &'a Round) -> BoardView<'a> {
        BoardView::new(
            self.board,
            &round.hits,
            &self.bombs,
            &self.damaged_cells,
            &self.intact_cells,
        )
    }

    /// Run one round with `target` as the newly bombed coordinate.
    ///
    /// The new bomb is placed (or refreshes the bomb already there), then every ship
    /// sails one cell and is checked against every live bomb, new one included.
    /// Terminated ships are removed, the older bombs age by one turn, and bombs that
    /// scored a hit or ran out of turns are cleared.
    pub fn resolve_round(&mut self, target: Coordinate) -> Round {
        debug_assert!(
            self.board.contains(&target),
            "target {} is off the {}x{} board",
            target,
            self.board,
            self.board
        );
        self.rounds += 1;
        self.bombs.place(target);

        let mut hits = Vec::new();
        self.intact_cells.clear();
        self.damaged_cells.clear();
        for ship in self.ships.iter_mut() {
            ship.sail();
            for bomb in self.bombs.coordinates() {
                if ship.hit(bomb) {
                    hits.push(bomb);
                }
            }
            self.damaged_cells
                .extend(ship.damaged_cells().iter().copied());
            self.intact_cells.extend(ship.intact_cells());
        }

        let before = self.ships.len();
        self.ships.retain(|ship| {
            if ship.terminated() {
                info!("ship terminated: {}", ship);
                false
            } else {
                true
            }
        });
        let terminated = before - self.ships.len();

        self.bombs.age(target, &hits);

        if self.ships.is_empty() && self.status != GameStatus::Over {
            info!("all ships terminated after {} rounds", self.rounds);
            self.status = GameStatus::Over;
        }
        debug!(
            "round {}: target {}, {} hits, {} terminated, bombs {}",
            self.rounds,
            target,
            hits.len(),
            terminated,
            self.bombs
        );
        Round {
            target,
            hits,
            terminated,
            status: self.status,
        }
    }

    /// Play one round: ask the interface for a target, resolve the round, then render
    /// the board and report the result. Returns the status after the round.
    pub fn play_round<I: Interface>(&mut self, interface: &mut I) -> Result<GameStatus, I::Error> {
        let target = interface.target(self.board)?;
        let round = self.resolve_round(target);
        interface.render(&self.round_view(&round))?;
        interface.report_round(round.hit_count(), round.terminated())?;
        Ok(round.status())
    }

    /// Play until every ship has been terminated.
    pub fn play<I: Interface>(&mut self, interface: &mut I) -> Result<(), I::Error> {
        interface.report_legend()?;
        interface.render(&self.view())?;
        while !self.is_over() {
            self.play_round(interface)?;
        }
        interface.report_game_over()
    }
}

impl fmt::Display for Game {
    /// Formats as `(board size, {bombs}, [ships])`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, [", self.board, self.bombs)?;
        for (i, ship) in self.ships.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", ship)?;
        }
        f.write_str("])")
    }
}
