use std::{io, process};

use clap::{value_t, App, Arg, ArgMatches};
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use thiserror::Error;

use movingbattleship::{
    board::{BoardSizeError, DEFAULT_BOARD_SIZE},
    fleet::{self, FleetError, DEFAULT_MAX_LENGTH, DEFAULT_SHIP_COUNT},
    game::GameError,
    BoardSize, Game, Ship,
};

use crate::terminal::Terminal;

mod terminal;

/// Anything that stops the game from being set up or played.
#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Board(#[from] BoardSizeError),

    #[error(transparent)]
    Fleet(#[from] FleetError),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

fn main() {
    pretty_env_logger::init();

    let default_size = DEFAULT_BOARD_SIZE.to_string();
    let default_ships = DEFAULT_SHIP_COUNT.to_string();
    let default_max_length = DEFAULT_MAX_LENGTH.to_string();
    let matches = App::new("Moving Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Command line battleship where the ships keep sailing.")
        .arg(
            Arg::with_name("size")
                .short("n")
                .long("size")
                .value_name("SIZE")
                .help("width and height of the board")
                .takes_value(true)
                .default_value(&default_size),
        )
        .arg(
            Arg::with_name("ships")
                .short("s")
                .long("ships")
                .value_name("COUNT")
                .help("number of randomly placed ships")
                .takes_value(true)
                .default_value(&default_ships),
        )
        .arg(
            Arg::with_name("max_length")
                .short("l")
                .long("max-length")
                .value_name("LENGTH")
                .help("longest randomly placed ship")
                .takes_value(true)
                .default_value(&default_max_length),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for the random fleet, for repeatable games")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("ship")
                .long("ship")
                .value_name("\"X,Y LENGTH DIR\"")
                .help("place a ship explicitly instead of randomly, may be repeated")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1),
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

/// Set up the game from the command line options and play it on stdin/stdout.
fn run(matches: &ArgMatches) -> Result<(), AppError> {
    let size = value_t!(matches, "size", usize).unwrap_or_else(|e| e.exit());
    let board = BoardSize::try_new(size)?;
    let ships = choose_fleet(matches, board)?;
    let mut game = Game::try_new(board, ships)?;
    info!("starting game {}", game);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut terminal = Terminal::new(stdin.lock(), stdout.lock());
    match game.play(&mut terminal) {
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            info!("input closed after {} rounds", game.rounds());
            Ok(())
        }
        other => Ok(other?),
    }
}

/// Build the ships either from explicit `--ship` options or at random.
fn choose_fleet(matches: &ArgMatches, board: BoardSize) -> Result<Vec<Ship>, FleetError> {
    if let Some(descriptions) = matches.values_of("ship") {
        return descriptions
            .map(|text| fleet::parse_ship(text, board))
            .collect();
    }
    let count = value_t!(matches, "ships", usize).unwrap_or_else(|e| e.exit());
    let max_length = value_t!(matches, "max_length", usize).unwrap_or_else(|e| e.exit());
    let mut rng = match matches.value_of("seed") {
        Some(_) => {
            let seed = value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit());
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    fleet::random_fleet(&mut rng, count, max_length, board)
}
