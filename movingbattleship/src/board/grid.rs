//! Dense per-cell storage used to flatten a board snapshot.

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::board::{BoardSize, Coordinate};

/// One value per board cell, stored row-major.
#[derive(Debug)]
pub(super) struct Grid<T> {
    /// Dimensions of this grid.
    pub(super) board: BoardSize,
    /// Cells that make up this grid.
    cells: Box<[T]>,
}

impl<T: Default> Grid<T> {
    pub(super) fn new(board: BoardSize) -> Self {
        let cells = (0..board.total_size()).map(|_| Default::default()).collect();
        Self { board, cells }
    }
}

impl<T> Grid<T> {
    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&T> {
        self.board
            .try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut T> {
        self.board
            .try_linearize(coord.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }
}

impl<T, B: Borrow<Coordinate>> Index<B> for Grid<T> {
    type Output = T;

    fn index(&self, coord: B) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl<T, B: Borrow<Coordinate>> IndexMut<B> for Grid<T> {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
