// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Ships that sail back and forth across the board.
use std::fmt;

use log::trace;

use crate::board::{BoardSize, Coordinate};

pub use self::{
    direction::{Axis, Direction, ParseDirectionError},
    errors::ShipError,
};

mod direction;
mod errors;

/// Status of a single coordinate relative to a ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellStatus {
    /// The coordinate is not part of the ship.
    Absent,
    /// Part of the ship that has not been hit.
    Intact,
    /// Part of the ship that has been hit.
    Damaged,
}

/// A linear ship on a square board.
///
/// The ship occupies `len` consecutive cells starting at its head and extending in `+x`
/// or `+y`, depending on the axis of the direction it started out sailing in. Each call
/// to [`sail`][Ship::sail] moves it one cell, bouncing off the edges of the board. Once
/// any cell has been hit the ship stops for good.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    /// Position of the cell closest to the origin.
    head: Coordinate,

    /// Number of cells the ship occupies.
    length: usize,

    /// Current sailing direction.
    direction: Direction,

    /// Direction the ship was created with. Fixes the axis.
    starting_direction: Direction,

    /// Board the ship sails on.
    board: BoardSize,

    /// Hit cells, in the order they were hit.
    damaged: Vec<Coordinate>,
}

impl Ship {
    /// Construct a ship with its head at `head`, sailing in `direction`.
    /// Panics if the ship would not be valid; see [`try_new`][Ship::try_new].
    pub fn new(head: Coordinate, length: usize, direction: Direction, board: BoardSize) -> Self {
        match Self::try_new(head, length, direction, board) {
            Ok(ship) => ship,
            Err(err) => panic!("invalid ship: {}", err),
        }
    }

    /// Construct a ship with its head at `head`, sailing in `direction`.
    ///
    /// Fails if `length` is 0, if a ship longer than one cell is given
    /// [`Direction::NotMoving`] (leaving it without an axis), or if any of its cells
    /// would be off the board.
    pub fn try_new(
        head: Coordinate,
        length: usize,
        direction: Direction,
        board: BoardSize,
    ) -> Result<Self, ShipError> {
        if length == 0 {
            return Err(ShipError::ZeroLength);
        }
        if length > 1 && direction.axis().is_none() {
            return Err(ShipError::NoAxis(length));
        }
        let ship = Self {
            head,
            length,
            direction,
            starting_direction: direction,
            board,
            damaged: Vec::new(),
        };
        match ship.tail_from(head) {
            Some(tail) if board.contains(&head) && board.contains(&tail) => Ok(ship),
            _ => Err(ShipError::OffBoard {
                head,
                length,
                board,
            }),
        }
    }

    /// Position of the ship's first cell.
    pub fn head(&self) -> Coordinate {
        self.head
    }

    /// Number of cells the ship occupies.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Board the ship sails on.
    pub fn board(&self) -> BoardSize {
        self.board
    }

    /// Current sailing direction, or [`Direction::NotMoving`] once the ship has been
    /// hit.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The direction the ship was created with.
    pub fn starting_direction(&self) -> Direction {
        self.starting_direction
    }

    /// Axis the ship lies along. `None` only for a single-cell ship that was created
    /// not moving.
    pub fn axis(&self) -> Option<Axis> {
        self.starting_direction.axis()
    }

    /// Move the ship one cell in its current direction.
    ///
    /// If that would take any part of the ship off the board, the ship turns around and
    /// moves one cell the other way instead. A damaged ship doesn't move and its
    /// direction becomes [`Direction::NotMoving`]. Returns the resulting direction.
    pub fn sail(&mut self) -> Direction {
        if !self.damaged.is_empty() {
            self.direction = Direction::NotMoving;
            return self.direction;
        }
        match self.advance(self.direction) {
            Some(head) => self.head = head,
            None => {
                self.direction = self.direction.reverse();
                // A ship spanning the whole board has nowhere to go either way.
                if let Some(head) = self.advance(self.direction) {
                    self.head = head;
                }
            }
        }
        trace!("ship sailed {} to {}", self.direction, self.head);
        self.direction
    }

    /// Tell the ship a bomb is at `pos`. Returns true if that damaged a previously
    /// intact cell of the ship, which also stops the ship for good.
    pub fn hit(&mut self, pos: Coordinate) -> bool {
        if self.cell_status(pos) == CellStatus::Intact {
            self.damaged.push(pos);
            self.direction = Direction::NotMoving;
            trace!("ship at {} hit at {}", self.head, pos);
            true
        } else {
            false
        }
    }

    /// Returns true once every cell of the ship has been damaged.
    pub fn terminated(&self) -> bool {
        self.damaged.len() == self.length
    }

    /// Get an iterator over the cells the ship currently occupies, starting from the
    /// head.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let (dx, dy) = self.extent();
        let head = self.head;
        (0..self.length).map(move |i| Coordinate::new(head.x + i * dx, head.y + i * dy))
    }

    /// Returns true if the ship occupies `pos`.
    pub fn contains(&self, pos: Coordinate) -> bool {
        self.coordinates().any(|c| c == pos)
    }

    /// Cells of the ship that have been hit.
    pub fn damaged_cells(&self) -> &[Coordinate] {
        &self.damaged
    }

    /// Get an iterator over the cells of the ship that have not been hit.
    pub fn intact_cells<'a>(&'a self) -> impl 'a + Iterator<Item = Coordinate> {
        self.coordinates()
            .filter(move |coord| !self.damaged.contains(coord))
    }

    /// Check whether `pos` is part of this ship and if so whether it has been hit.
    pub fn cell_status(&self, pos: Coordinate) -> CellStatus {
        if !self.contains(pos) {
            CellStatus::Absent
        } else if self.damaged.contains(&pos) {
            CellStatus::Damaged
        } else {
            CellStatus::Intact
        }
    }

    /// Step along the ship's axis from one cell to the next.
    fn extent(&self) -> (usize, usize) {
        match self.axis() {
            Some(Axis::Horizontal) => (1, 0),
            Some(Axis::Vertical) => (0, 1),
            None => (0, 0),
        }
    }

    /// Last cell of the ship if its head were at `head`.
    fn tail_from(&self, head: Coordinate) -> Option<Coordinate> {
        let (dx, dy) = self.extent();
        let span = self.length - 1;
        Some(Coordinate::new(
            head.x.checked_add(span * dx)?,
            head.y.checked_add(span * dy)?,
        ))
    }

    /// Where the head would be after one step in `dir`, if the whole ship stays on the
    /// board.
    fn advance(&self, dir: Direction) -> Option<Coordinate> {
        let (dx, dy) = dir.delta();
        let head = self.head.offset(dx, dy)?;
        let tail = self.tail_from(head)?;
        self.board.check_bounds(tail).map(|_| head)
    }
}

impl fmt::Display for Ship {
    /// Formats as `([cells], [damaged cells], direction, board size)`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("([")?;
        for (i, coord) in self.coordinates().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", coord)?;
        }
        f.write_str("], [")?;
        for (i, coord) in self.damaged.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", coord)?;
        }
        write!(f, "], {}, {})", self.direction, self.board)
    }
}
