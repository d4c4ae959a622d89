//! Plays the game on stdin and stdout.
use std::{
    fmt,
    io::{self, BufRead, Write},
};

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use movingbattleship::{
    board::{BoardView, Cell},
    BoardSize, Coordinate, Interface, NEW_BOMB_TURNS,
};

/// Reason a typed target was rejected.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum TargetError {
    #[error("invalid target \"{0}\", expected \"x,y\"")]
    Malformed(String),

    #[error("target {coord} is off the board, x and y must be in range [0,{max}]")]
    OffBoard { coord: Coordinate, max: usize },
}

/// Parse a target typed as `x,y` or `x y` and check that it is on the board.
pub fn parse_target(input: &str, board: BoardSize) -> Result<Coordinate, TargetError> {
    static TARGET: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(?P<x>[0-9]+)(?:\s*,\s*|\s+)(?P<y>[0-9]+)$").unwrap());

    let malformed = || TargetError::Malformed(input.to_owned());
    let captures = TARGET.captures(input).ok_or_else(malformed)?;
    let x = captures["x"].parse().map_err(|_| malformed())?;
    let y = captures["y"].parse().map_err(|_| malformed())?;
    board
        .check_bounds(Coordinate::new(x, y))
        .ok_or_else(|| TargetError::OffBoard {
            coord: Coordinate::new(x, y),
            max: board.size() - 1,
        })
}

/// Plays the game on a text terminal: reads targets from `read` and writes the board and
/// reports to `out`.
pub struct Terminal<B, W> {
    read: B,
    out: W,
    buf: String,
}

impl<B, W> Terminal<B, W> {
    pub fn new(read: B, out: W) -> Self {
        Self {
            read,
            out,
            buf: String::new(),
        }
    }
}

impl<B: BufRead, W: Write> Terminal<B, W> {
    /// Repeatedly tries to read input until the input checker succeeds, printing the
    /// checker's complaint after each bad line.
    fn read_input<F, T, E>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Result<T, E>,
        E: fmt::Display,
    {
        loop {
            self.read_input_inner(prompt)?;
            match checker(self.buf.trim()) {
                Ok(val) => return Ok(val),
                Err(err) => writeln!(self.out, "{}", err)?,
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line. Running out
    /// of input is reported as [`io::ErrorKind::UnexpectedEof`].
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.out, "{} ", prompt)?;
        self.out.flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            writeln!(self.out)?;
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no more input",
            ));
        }
        Ok(())
    }
}

impl<B: BufRead, W: Write> Interface for Terminal<B, W> {
    type Error = io::Error;

    fn target(&mut self, board: BoardSize) -> io::Result<Coordinate> {
        let target = self.read_input("Choose a target (x,y):", |input| {
            parse_target(input, board)
        })?;
        trace!("player chose {}", target);
        Ok(target)
    }

    fn render(&mut self, view: &BoardView) -> io::Result<()> {
        show_board(
            &mut self.out,
            view.board(),
            view.rows().map(|row| row.map(CellSymbol)),
        )
    }

    fn report_legend(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "Terminate every ship. Each round, drop a bomb by choosing a target.
Ships sail back and forth and stop for good once they are hit.
Bombs stay on the board for {} rounds or until they hit a ship.

    {}  hit this round
    {}  damaged ship
    {}  intact ship
    1-{}  bomb, with the rounds it has left
    {}  water
",
            NEW_BOMB_TURNS,
            CellSymbol(Cell::Hit),
            CellSymbol(Cell::Damaged),
            CellSymbol(Cell::Intact),
            NEW_BOMB_TURNS,
            CellSymbol(Cell::Water),
        )
    }

    fn report_round(&mut self, hits: usize, terminated: usize) -> io::Result<()> {
        writeln!(self.out, "hits: {}, terminated: {}", hits, terminated)?;
        writeln!(self.out)
    }

    fn report_game_over(&mut self) -> io::Result<()> {
        writeln!(self.out, "All ships terminated. Game over!")
    }
}

/// Display helper that prints the symbol for a board cell.
struct CellSymbol(Cell);

impl fmt::Display for CellSymbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Cell::Water => f.pad("~"),
            Cell::Bomb(turns) => fmt::Display::fmt(&turns, f),
            Cell::Intact => f.pad("S"),
            Cell::Damaged => f.pad("X"),
            Cell::Hit => f.pad("*"),
        }
    }
}

/// Show the board by printing the grid. Takes an iterator over the rows of iterators over
/// the items.
fn show_board<W: Write>(
    out: &mut W,
    board: BoardSize,
    rows: impl Iterator<Item = impl Iterator<Item = impl fmt::Display>>,
) -> io::Result<()> {
    write!(out, "   ")?;
    for i in 0..board.size() {
        write!(out, "{:^4}", i)?;
    }
    writeln!(out)?;
    for (i, row) in rows.enumerate() {
        write!(out, "{:>2} ", i)?;
        for cell in row {
            write!(out, "{:^4}", cell)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
