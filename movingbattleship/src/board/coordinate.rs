use std::fmt;

/// The coordinates of a single cell on the board. `x` grows to the right and `y` grows
/// downwards, both starting from 0.
///
/// Ordering is by `x` first, then `y`, which keeps bomb maps and debug output stable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coordinate {
    /// Horizontal position of the cell.
    pub x: usize,
    /// Vertical position of the cell.
    pub y: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Offset this coordinate by `dx` and `dy`, returning `None` if either component
    /// would go below zero.
    pub(crate) fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        Some(Self {
            x: shift(self.x, dx)?,
            y: shift(self.y, dy)?,
        })
    }
}

fn shift(v: usize, by: isize) -> Option<usize> {
    if by < 0 {
        v.checked_sub(by.unsigned_abs())
    } else {
        v.checked_add(by as usize)
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(x, y)` pair.
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into an `(x, y)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
