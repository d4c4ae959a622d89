//! A variant of Battleship where the ships don't sit still.
//!
//! Ships sail back and forth along a fixed axis of a square board, bouncing off the
//! edges. Every round the player drops one bomb. Bombs linger for a few rounds and
//! damage any ship that sails into them. A ship that takes any damage stops moving, and
//! a ship with every cell damaged is removed from the board. The game ends once no
//! ships remain.
//!
//! [`board`] holds the coordinate types and the snapshot handed to renderers.
//! [`ships`] implements a single moving ship. [`game`] runs the rounds and talks to the
//! outside world through the [`game::Interface`] trait. [`fleet`] builds initial ship
//! sets.

pub mod board;
pub mod fleet;
pub mod game;
pub mod ships;

pub use crate::{
    board::{BoardSize, Coordinate},
    game::{Game, GameStatus, Interface, NEW_BOMB_TURNS},
    ships::{Direction, Ship},
};
