//! Snapshot of the board handed to renderers after each round.

use crate::{
    board::{grid::Grid, BoardSize, Coordinate},
    game::Bombs,
};

/// What a renderer should draw in a single cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Cell {
    /// Nothing here.
    Water,
    /// A live bomb with the given number of remaining turns.
    Bomb(u32),
    /// An undamaged part of a ship.
    Intact,
    /// A damaged part of a ship.
    Damaged,
    /// A bomb hit a ship here this round.
    Hit,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Water
    }
}

/// Read-only view of the board at the end of a round: the hits scored this round, the
/// surviving bombs, and the damaged and intact ship cells.
#[derive(Debug)]
pub struct BoardView<'a> {
    board: BoardSize,
    hits: &'a [Coordinate],
    bombs: &'a Bombs,
    damaged: &'a [Coordinate],
    intact: &'a [Coordinate],
    /// Flattened cells. Later layers win: bombs, then intact, damaged, hits.
    cells: Grid<Cell>,
}

impl<'a> BoardView<'a> {
    pub(crate) fn new(
        board: BoardSize,
        hits: &'a [Coordinate],
        bombs: &'a Bombs,
        damaged: &'a [Coordinate],
        intact: &'a [Coordinate],
    ) -> Self {
        let mut cells = Grid::new(board);
        for (coord, turns) in bombs.iter() {
            if let Some(cell) = cells.get_mut(coord) {
                *cell = Cell::Bomb(turns);
            }
        }
        let layers = [
            (intact, Cell::Intact),
            (damaged, Cell::Damaged),
            (hits, Cell::Hit),
        ];
        for &(coords, kind) in layers.iter() {
            for coord in coords {
                if let Some(cell) = cells.get_mut(coord) {
                    *cell = kind;
                }
            }
        }
        Self {
            board,
            hits,
            bombs,
            damaged,
            intact,
            cells,
        }
    }

    /// Size of the board being shown.
    pub fn board(&self) -> BoardSize {
        self.board
    }

    /// Bomb coordinates that scored a hit this round. A coordinate appears once per
    /// ship it hit.
    pub fn hits(&self) -> &'a [Coordinate] {
        self.hits
    }

    /// Bombs that are still live.
    pub fn bombs(&self) -> &'a Bombs {
        self.bombs
    }

    /// Damaged cells of every ship processed this round.
    pub fn damaged(&self) -> &'a [Coordinate] {
        self.damaged
    }

    /// Intact cells of every live ship.
    pub fn intact(&self) -> &'a [Coordinate] {
        self.intact
    }

    /// Get what to draw at the given coordinate, or `None` if it is off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        self.cells.get(coord).copied()
    }

    /// Get an iterator over the rows of the board. Each row is an iterator over the
    /// cells in that row, left to right.
    pub fn rows<'b>(&'b self) -> impl 'b + Iterator<Item = impl 'b + Iterator<Item = Cell>> {
        let cells = &self.cells;
        self.board
            .iter_coordinates()
            .map(move |row| row.map(move |coord| cells[coord]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_layers_win() {
        let board = BoardSize::new(3);
        let mut bombs = Bombs::default();
        bombs.place(Coordinate::new(0, 0));
        bombs.place(Coordinate::new(1, 1));
        bombs.place(Coordinate::new(2, 2));
        let hits = [Coordinate::new(2, 2)];
        let damaged = [Coordinate::new(1, 1), Coordinate::new(2, 2)];
        let intact = [Coordinate::new(1, 0), Coordinate::new(1, 1)];
        let view = BoardView::new(board, &hits, &bombs, &damaged, &intact);

        assert_eq!(view.cell(Coordinate::new(0, 0)), Some(Cell::Bomb(3)));
        assert_eq!(view.cell(Coordinate::new(1, 0)), Some(Cell::Intact));
        assert_eq!(view.cell(Coordinate::new(1, 1)), Some(Cell::Damaged));
        assert_eq!(view.cell(Coordinate::new(2, 2)), Some(Cell::Hit));
        assert_eq!(view.cell(Coordinate::new(0, 2)), Some(Cell::Water));
        assert_eq!(view.cell(Coordinate::new(3, 0)), None);
    }

    #[test]
    fn rows_cover_the_board() {
        let board = BoardSize::new(2);
        let bombs = Bombs::default();
        let intact = [Coordinate::new(1, 0)];
        let view = BoardView::new(board, &[], &bombs, &[], &intact);
        let rows: Vec<Vec<Cell>> = view.rows().map(|row| row.collect()).collect();
        assert_eq!(
            rows,
            vec![
                vec![Cell::Water, Cell::Intact],
                vec![Cell::Water, Cell::Water]
            ]
        );
    }
}
