//! Bombs on the board and how long each one has left.
use std::{collections::BTreeMap, fmt};

use crate::{board::Coordinate, game::NEW_BOMB_TURNS};

/// Live bombs on the board, mapped to the number of turns they have left.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Bombs {
    bombs: BTreeMap<Coordinate, u32>,
}

impl Bombs {
    /// Drop a bomb at `coord` with a full lifetime, replacing any bomb already there.
    pub fn place(&mut self, coord: Coordinate) {
        self.bombs.insert(coord, NEW_BOMB_TURNS);
    }

    /// Remaining turns of the bomb at `coord`, if there is one.
    pub fn get(&self, coord: Coordinate) -> Option<u32> {
        self.bombs.get(&coord).copied()
    }

    /// Returns true if there is a live bomb at `coord`.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.bombs.contains_key(&coord)
    }

    /// Number of live bombs.
    pub fn len(&self) -> usize {
        self.bombs.len()
    }

    /// Returns true if there are no live bombs.
    pub fn is_empty(&self) -> bool {
        self.bombs.is_empty()
    }

    /// Get an iterator over bomb positions and their remaining turns, ordered by
    /// coordinate.
    pub fn iter<'a>(&'a self) -> impl 'a + Iterator<Item = (Coordinate, u32)> {
        self.bombs.iter().map(|(&coord, &turns)| (coord, turns))
    }

    /// Get an iterator over bomb positions, ordered by coordinate.
    pub fn coordinates<'a>(&'a self) -> impl 'a + Iterator<Item = Coordinate> {
        self.bombs.keys().copied()
    }

    /// Age every bomb except `fresh` by one turn, then drop bombs that ran out of turns
    /// or that are listed in `hits`.
    pub(crate) fn age(&mut self, fresh: Coordinate, hits: &[Coordinate]) {
        self.bombs.retain(|coord, turns| {
            if *coord != fresh {
                *turns = turns.saturating_sub(1);
            }
            *turns != 0 && !hits.contains(coord)
        });
    }
}

impl fmt::Display for Bombs {
    /// Formats as `{(x, y): turns, ...}`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("{")?;
        for (i, (coord, turns)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", coord, turns)?;
        }
        f.write_str("}")
    }
}
