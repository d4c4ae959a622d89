//! Types that make up the game board.

pub use self::{
    coordinate::Coordinate,
    dimensions::{BoardSize, DEFAULT_BOARD_SIZE},
    errors::BoardSizeError,
    view::{BoardView, Cell},
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;
mod view;
