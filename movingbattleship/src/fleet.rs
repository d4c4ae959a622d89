//! Helpers for building the initial set of ships.
//!
//! With the `rng_gen` feature, [`random_fleet`] places ships at random. With the `parse`
//! feature, [`parse_ship`] reads a ship from a short text description such as
//! `"1,2 3 right"`.
use thiserror::Error;

#[cfg(feature = "rng_gen")]
use log::debug;

use crate::ships::{ParseDirectionError, ShipError};

#[cfg(any(feature = "rng_gen", feature = "parse"))]
use crate::{
    board::{BoardSize, Coordinate},
    ships::{Direction, Ship},
};

#[cfg(feature = "rng_gen")]
use crate::ships::Axis;

/// Number of ships in a fleet when none is specified.
pub const DEFAULT_SHIP_COUNT: usize = 4;

/// Longest ship in a random fleet when none is specified.
pub const DEFAULT_MAX_LENGTH: usize = 2;

/// Number of placements tried per ship before giving up.
#[cfg(feature = "rng_gen")]
const MAX_ATTEMPTS: usize = 1000;

/// Error building a fleet.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum FleetError {
    /// Couldn't find a free spot for every ship.
    #[error("only found room for {placed} of {requested} ships")]
    NoRoom {
        /// Ships placed before running out of attempts.
        placed: usize,
        /// Ships asked for.
        requested: usize,
    },

    /// A ship description didn't match `x,y length direction`.
    #[error("could not parse ship {0:?}, expected \"x,y length direction\"")]
    Malformed(String),

    /// The description named an unknown direction.
    #[error(transparent)]
    Direction(#[from] ParseDirectionError),

    /// The described ship doesn't fit on the board.
    #[error(transparent)]
    Ship(#[from] ShipError),
}

/// Place `count` non-overlapping ships at random on `board`.
///
/// Each ship gets a random length between 1 and `max_length` (capped at the board size)
/// and a random sailing direction. Fails if `max_length` is 0 or if the ships can't all
/// be fit on the board.
#[cfg(feature = "rng_gen")]
pub fn random_fleet<R: rand::Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    max_length: usize,
    board: BoardSize,
) -> Result<Vec<Ship>, FleetError> {
    if max_length == 0 {
        return Err(ShipError::ZeroLength.into());
    }
    let max_length = max_length.min(board.size());
    let mut ships: Vec<Ship> = Vec::with_capacity(count);
    while ships.len() < count {
        let mut placed = None;
        for _ in 0..MAX_ATTEMPTS {
            let ship = random_ship(rng, max_length, board)?;
            let overlaps = ship
                .coordinates()
                .any(|coord| ships.iter().any(|other| other.contains(coord)));
            if !overlaps {
                placed = Some(ship);
                break;
            }
        }
        match placed {
            Some(ship) => {
                debug!("placed ship {}", ship);
                ships.push(ship);
            }
            None => {
                return Err(FleetError::NoRoom {
                    placed: ships.len(),
                    requested: count,
                })
            }
        }
    }
    Ok(ships)
}

/// Pick a single ship anywhere it fits on the board.
#[cfg(feature = "rng_gen")]
fn random_ship<R: rand::Rng + ?Sized>(
    rng: &mut R,
    max_length: usize,
    board: BoardSize,
) -> Result<Ship, FleetError> {
    let length = rng.gen_range(1, max_length + 1);
    let direction: Direction = rng.gen();
    let span = board.size() - length + 1;
    let (x, y) = match direction.axis() {
        Some(Axis::Horizontal) => (rng.gen_range(0, span), rng.gen_range(0, board.size())),
        _ => (rng.gen_range(0, board.size()), rng.gen_range(0, span)),
    };
    Ok(Ship::try_new(Coordinate::new(x, y), length, direction, board)?)
}

/// Parse a ship from `"x,y length direction"`.
///
/// The coordinates may be separated by a comma or by whitespace. The direction accepts
/// the same names as [`Direction`]'s `FromStr` implementation, so `"0 3 2 e"` is a
/// two-cell ship at `(0, 3)` sailing right.
#[cfg(feature = "parse")]
pub fn parse_ship(text: &str, board: BoardSize) -> Result<Ship, FleetError> {
    use once_cell::sync::Lazy;
    use regex::Regex;

    static SHIP: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^\s*(?P<x>\d+)\s*(?:,\s*|\s+)(?P<y>\d+)\s+(?P<len>\d+)\s+(?P<dir>[[:alpha:]]+)\s*$",
        )
        .unwrap()
    });

    let malformed = || FleetError::Malformed(text.to_owned());
    let captures = SHIP.captures(text).ok_or_else(malformed)?;
    let x = captures["x"].parse().map_err(|_| malformed())?;
    let y = captures["y"].parse().map_err(|_| malformed())?;
    let length = captures["len"].parse().map_err(|_| malformed())?;
    let direction: Direction = captures["dir"].parse()?;
    Ok(Ship::try_new(Coordinate::new(x, y), length, direction, board)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "rng_gen")]
    mod random {
        use rand::{rngs::StdRng, SeedableRng};

        use super::*;

        #[test]
        fn fleet_fits_without_overlap() {
            let board = BoardSize::new(5);
            for seed in 0..32 {
                let mut rng = StdRng::seed_from_u64(seed);
                let ships =
                    random_fleet(&mut rng, DEFAULT_SHIP_COUNT, DEFAULT_MAX_LENGTH, board)
                        .unwrap();
                assert_eq!(ships.len(), DEFAULT_SHIP_COUNT);
                let mut seen = Vec::new();
                for ship in &ships {
                    assert!(ship.len() >= 1 && ship.len() <= DEFAULT_MAX_LENGTH);
                    assert_ne!(ship.direction(), Direction::NotMoving);
                    for coord in ship.coordinates() {
                        assert!(board.contains(&coord));
                        assert!(!seen.contains(&coord), "overlap at {}", coord);
                        seen.push(coord);
                    }
                }
            }
        }

        #[test]
        fn length_is_capped_at_board_size() {
            let board = BoardSize::new(2);
            let mut rng = StdRng::seed_from_u64(7);
            let ships = random_fleet(&mut rng, 1, 10, board).unwrap();
            assert!(ships[0].len() <= 2);
        }

        #[test]
        fn too_many_ships() {
            let board = BoardSize::new(1);
            let mut rng = StdRng::seed_from_u64(3);
            assert_eq!(
                random_fleet(&mut rng, 2, 1, board),
                Err(FleetError::NoRoom {
                    placed: 1,
                    requested: 2
                })
            );
        }

        #[test]
        fn zero_max_length() {
            let mut rng = StdRng::seed_from_u64(0);
            assert_eq!(
                random_fleet(&mut rng, 1, 0, BoardSize::new(5)),
                Err(FleetError::Ship(ShipError::ZeroLength))
            );
        }
    }

    #[cfg(feature = "parse")]
    mod parse {
        use super::*;

        fn board() -> BoardSize {
            BoardSize::new(5)
        }

        #[test]
        fn comma_or_space_separated() {
            let ship = parse_ship("1,2 3 right", board()).unwrap();
            assert_eq!(ship.head(), Coordinate::new(1, 2));
            assert_eq!(ship.len(), 3);
            assert_eq!(ship.direction(), Direction::Right);

            let ship = parse_ship(" 0 3 2 N ", board()).unwrap();
            assert_eq!(ship.head(), Coordinate::new(0, 3));
            assert_eq!(ship.direction(), Direction::Up);
        }

        #[test]
        fn malformed() {
            assert_eq!(
                parse_ship("1,2", board()),
                Err(FleetError::Malformed("1,2".to_owned()))
            );
            assert_eq!(
                parse_ship("a,b 1 up", board()),
                Err(FleetError::Malformed("a,b 1 up".to_owned()))
            );
        }

        #[test]
        fn unknown_direction() {
            assert!(matches!(
                parse_ship("1,1 1 sideways", board()),
                Err(FleetError::Direction(_))
            ));
        }

        #[test]
        fn off_board() {
            assert!(matches!(
                parse_ship("4,0 2 right", board()),
                Err(FleetError::Ship(ShipError::OffBoard { .. }))
            ));
            assert_eq!(
                parse_ship("0,0 0 right", board()),
                Err(FleetError::Ship(ShipError::ZeroLength))
            );
        }
    }
}
