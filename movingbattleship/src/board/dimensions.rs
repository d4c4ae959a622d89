use std::{borrow::Borrow, fmt};

use crate::board::{BoardSizeError, Coordinate};

/// Side length of the board used when none is specified.
pub const DEFAULT_BOARD_SIZE: usize = 5;

/// Side length of a square board. Valid coordinates have both components in
/// `0..size`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BoardSize(usize);

impl BoardSize {
    /// Create a [`BoardSize`] with the given side length.
    /// Panics if `size` is 0 or `size * size` exceeds `usize::max_value()`.
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Ok(board) => board,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create a [`BoardSize`] with the given side length.
    /// Returns an error if `size` is 0 or `size * size` exceeds `usize::max_value()`.
    pub fn try_new(size: usize) -> Result<Self, BoardSizeError> {
        if size == 0 {
            Err(BoardSizeError::Empty)
        } else if size.checked_mul(size).is_none() {
            Err(BoardSizeError::TooLarge(size))
        } else {
            Ok(BoardSize(size))
        }
    }

    /// Get the side length of the board.
    pub fn size(&self) -> usize {
        self.0
    }

    /// Total number of cells on the board.
    pub fn total_size(&self) -> usize {
        self.0 * self.0
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.x < self.0 && coord.y < self.0
    }

    /// Check if the given [`Coordinate`] is on the board. If so, return it, otherwise
    /// return `None`.
    #[inline]
    pub fn check_bounds<B: Borrow<Coordinate>>(&self, coord: B) -> Option<B> {
        if self.contains(coord.borrow()) {
            Some(coord)
        } else {
            None
        }
    }

    /// Convert a coordinate to a linear row-major index. Returns `None` if the
    /// coordinate is off the board.
    pub(crate) fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        self.check_bounds(coord).map(|coord| coord.y * self.0 + coord.x)
    }

    /// Get an iterator over rows of this board. Each row is an iterator over the
    /// coordinates of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let size = self.0;
        (0..size).map(move |y| (0..size).map(move |x| Coordinate { x, y }))
    }
}

impl Default for BoardSize {
    /// Construct the default board, 5x5.
    fn default() -> Self {
        BoardSize(DEFAULT_BOARD_SIZE)
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
