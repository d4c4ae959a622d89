//! Sailing directions and the axes they run along.
use std::{fmt, str::FromStr};

use enumflags2::BitFlags;
use thiserror::Error;

/// Direction a ship is sailing in.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Towards `y = 0`.
    Up = 0b0_0001,
    /// Towards `y = size - 1`.
    Down = 0b0_0010,
    /// Towards `x = 0`.
    Left = 0b0_0100,
    /// Towards `x = size - 1`.
    Right = 0b0_1000,
    /// The ship has been hit and will never move again.
    NotMoving = 0b1_0000,
}

impl Direction {
    /// The four directions a ship can actually sail in.
    pub const SAILING: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Get the axis this direction runs along. `None` for [`Direction::NotMoving`].
    pub fn axis(self) -> Option<Axis> {
        if Axis::Vertical.directions().contains(self) {
            Some(Axis::Vertical)
        } else if Axis::Horizontal.directions().contains(self) {
            Some(Axis::Horizontal)
        } else {
            None
        }
    }

    /// Get the opposite direction along the same axis. [`Direction::NotMoving`] is its
    /// own reverse.
    pub fn reverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::NotMoving => Direction::NotMoving,
        }
    }

    /// Change in `(x, y)` from one step in this direction.
    pub(crate) fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::NotMoving => (0, 0),
        }
    }

    /// Lower-case name of the direction.
    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::NotMoving => "not moving",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when parsing a [`Direction`] from an unrecognized name.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("invalid direction {0:?}, choose \"up\", \"down\", \"left\", or \"right\"")]
pub struct ParseDirectionError(String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Parses a sailing direction. Accepts the direction names, compass points and
    /// their first letters, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" | "north" | "u" | "n" => Ok(Direction::Up),
            "down" | "south" | "d" | "s" => Ok(Direction::Down),
            "left" | "west" | "l" | "w" => Ok(Direction::Left),
            "right" | "east" | "r" | "e" => Ok(Direction::Right),
            _ => Err(ParseDirectionError(s.to_owned())),
        }
    }
}

#[cfg(feature = "rng_gen")]
impl rand::distributions::Distribution<Direction> for rand::distributions::Standard {
    /// Picks one of the four sailing directions uniformly.
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::SAILING[rng.gen_range(0, Direction::SAILING.len())]
    }
}

/// Orientation axis of a ship, fixed by the direction it starts out sailing in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Ships extend in `+x` and sail left and right.
    Horizontal,
    /// Ships extend in `+y` and sail up and down.
    Vertical,
}

impl Axis {
    /// The set of directions that sail along this axis.
    pub fn directions(self) -> BitFlags<Direction> {
        match self {
            Axis::Horizontal => Direction::Left | Direction::Right,
            Axis::Vertical => Direction::Up | Direction::Down,
        }
    }
}
