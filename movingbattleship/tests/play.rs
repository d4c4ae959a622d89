use std::collections::VecDeque;

use movingbattleship::{
    board::{BoardView, Cell},
    BoardSize, Coordinate, Direction, Game, GameStatus, Interface, Ship, NEW_BOMB_TURNS,
};

/// Interface that plays a fixed list of targets and records everything it is shown.
#[derive(Default)]
struct Script {
    targets: VecDeque<Coordinate>,
    renders: Vec<Vec<Vec<Cell>>>,
    rounds: Vec<(usize, usize)>,
    legends: usize,
    game_overs: usize,
}

#[derive(Debug, Eq, PartialEq)]
struct OutOfTargets;

impl Script {
    fn new(targets: &[(usize, usize)]) -> Self {
        Self {
            targets: targets.iter().copied().map(Coordinate::from).collect(),
            ..Self::default()
        }
    }
}

impl Interface for Script {
    type Error = OutOfTargets;

    fn target(&mut self, board: BoardSize) -> Result<Coordinate, OutOfTargets> {
        let target = self.targets.pop_front().ok_or(OutOfTargets)?;
        assert!(board.contains(&target));
        Ok(target)
    }

    fn render(&mut self, view: &BoardView) -> Result<(), OutOfTargets> {
        self.renders
            .push(view.rows().map(|row| row.collect()).collect());
        Ok(())
    }

    fn report_legend(&mut self) -> Result<(), OutOfTargets> {
        self.legends += 1;
        Ok(())
    }

    fn report_round(&mut self, hits: usize, terminated: usize) -> Result<(), OutOfTargets> {
        self.rounds.push((hits, terminated));
        Ok(())
    }

    fn report_game_over(&mut self) -> Result<(), OutOfTargets> {
        self.game_overs += 1;
        Ok(())
    }
}

fn board() -> BoardSize {
    BoardSize::new(5)
}

fn ship(x: usize, y: usize, length: usize, direction: Direction) -> Ship {
    Ship::new(Coordinate::new(x, y), length, direction, board())
}

#[test]
fn ship_sails_out_from_under_the_first_bomb() {
    let mut game = Game::new(board(), vec![ship(0, 0, 2, Direction::Right)]);
    let mut script = Script::new(&[(0, 0)]);

    let status = game.play_round(&mut script).unwrap();
    assert_eq!(status, GameStatus::Ongoing);
    assert_eq!(script.rounds, vec![(0, 0)]);
    let cells: Vec<_> = game.ships()[0].coordinates().collect();
    assert_eq!(cells, vec![Coordinate::new(1, 0), Coordinate::new(2, 0)]);

    let render = &script.renders[0];
    assert_eq!(render[0][0], Cell::Bomb(NEW_BOMB_TURNS));
    assert_eq!(render[0][1], Cell::Intact);
    assert_eq!(render[0][2], Cell::Intact);
    assert_eq!(render[0][3], Cell::Water);
}

#[test]
fn unhit_bomb_ages_out() {
    // Ship sails along the bottom row and never comes near the bomb.
    let mut game = Game::new(board(), vec![ship(0, 4, 1, Direction::Right)]);
    let mut script = Script::new(&[(0, 0), (0, 1), (0, 2), (0, 3)]);
    let bomb = Coordinate::new(0, 0);

    game.play_round(&mut script).unwrap();
    assert_eq!(game.bombs().get(bomb), Some(NEW_BOMB_TURNS));
    for remaining in (1..NEW_BOMB_TURNS).rev() {
        game.play_round(&mut script).unwrap();
        assert_eq!(game.bombs().get(bomb), Some(remaining));
    }
    game.play_round(&mut script).unwrap();
    assert_eq!(game.bombs().get(bomb), None);
}

#[test]
fn single_cell_ship_is_only_hit_where_it_sails_to() {
    // Bombing the ship's starting cell misses; the next cell along catches it.
    let mut game = Game::new(board(), vec![ship(2, 2, 1, Direction::Down)]);
    let mut script = Script::new(&[(2, 2), (2, 4)]);

    assert_eq!(game.play_round(&mut script), Ok(GameStatus::Ongoing));
    assert_eq!(game.ships()[0].head(), Coordinate::new(2, 3));
    assert_eq!(game.play_round(&mut script), Ok(GameStatus::Over));
    assert_eq!(script.rounds, vec![(0, 0), (1, 1)]);
    assert_eq!(script.renders[1][4][2], Cell::Hit);
}

#[test]
fn full_game() {
    let ships = vec![ship(0, 0, 1, Direction::Right), ship(4, 4, 1, Direction::Up)];
    let mut game = Game::new(board(), ships);
    // First ship goes to (1,0) and is hit, second to (4,3) then (4,2).
    let mut script = Script::new(&[(1, 0), (4, 2)]);

    game.play(&mut script).unwrap();

    assert!(game.is_over());
    assert_eq!(game.rounds(), 2);
    assert_eq!(script.legends, 1);
    assert_eq!(script.game_overs, 1);
    assert_eq!(script.rounds, vec![(1, 1), (1, 1)]);
    // Initial board plus one render per round.
    assert_eq!(script.renders.len(), 3);
    assert_eq!(script.renders[0][0][0], Cell::Intact);
    assert_eq!(script.renders[0][4][4], Cell::Intact);
    assert!(script.targets.is_empty());
}

#[test]
fn damaged_ship_waits_for_the_rest_of_its_cells() {
    let mut game = Game::new(board(), vec![ship(0, 0, 2, Direction::Down)]);
    // Ship moves to (0,1)-(0,2) and is hit at (0,2), then stays put.
    let mut script = Script::new(&[(0, 2), (3, 3), (0, 1)]);

    game.play(&mut script).unwrap();

    assert_eq!(script.rounds, vec![(1, 0), (0, 0), (1, 1)]);
    assert_eq!(script.renders[2][1][0], Cell::Intact);
    assert_eq!(script.renders[2][2][0], Cell::Damaged);
    assert_eq!(script.renders[2][3][3], Cell::Bomb(NEW_BOMB_TURNS));
    assert_eq!(script.renders[3][1][0], Cell::Hit);
    assert_eq!(script.renders[3][2][0], Cell::Damaged);
    assert_eq!(script.renders[3][3][3], Cell::Bomb(NEW_BOMB_TURNS - 1));
}

#[test]
fn interface_errors_stop_the_game() {
    let mut game = Game::new(board(), vec![ship(0, 0, 1, Direction::Right)]);
    let mut script = Script::new(&[(4, 4)]);

    assert_eq!(game.play(&mut script), Err(OutOfTargets));
    assert_eq!(game.status(), GameStatus::Ongoing);
    assert_eq!(script.rounds, vec![(0, 0)]);
    assert_eq!(script.game_overs, 0);
}

#[test]
fn game_without_ships_ends_immediately() {
    let mut game = Game::new(board(), Vec::new());
    let mut script = Script::new(&[]);

    game.play(&mut script).unwrap();

    assert_eq!(game.rounds(), 0);
    assert_eq!(script.legends, 1);
    assert_eq!(script.renders.len(), 1);
    assert_eq!(script.game_overs, 1);
}
