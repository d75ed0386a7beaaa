use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{Coord, Game, GameError, GameStatus, ShipShape, GRID_SIZE};

fn new_game(seed: u64) -> Game {
    let mut rng = SmallRng::seed_from_u64(seed);
    Game::standard(&mut rng).unwrap()
}

/// Some coordinate not occupied by any ship. Always exists: the fleet covers
/// 10 of 100 cells.
fn empty_coord(game: &Game) -> Coord {
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let coord = Coord::new(x, y);
            if game.cell(coord).unwrap().ship.is_none() {
                return coord;
            }
        }
    }
    unreachable!("fleet cannot cover the whole board");
}

#[test]
fn fire_at_out_of_bounds_is_rejected() {
    let mut game = new_game(1);
    let err = game.fire_at(Coord::new(GRID_SIZE, 0)).unwrap_err();
    assert!(matches!(err, GameError::OutOfBounds { .. }));
    let err = game.fire_at(Coord::new(0, 255)).unwrap_err();
    assert!(matches!(err, GameError::OutOfBounds { .. }));
}

#[test]
fn second_shot_on_same_cell_fails() {
    let mut game = new_game(2);
    let coord = empty_coord(&game);
    assert!(game.fire_at(coord).is_ok());
    assert_eq!(game.fire_at(coord).unwrap_err(), GameError::AlreadyHit(coord));
    // the failed re-fire left the cell hit
    assert!(game.cell(coord).unwrap().hit);
}

#[test]
fn empty_cell_shot_marks_hit_only() {
    let mut game = new_game(3);
    let coord = empty_coord(&game);
    let shot = game.fire_at(coord).unwrap();
    assert!(shot.hit);
    assert_eq!(shot.ship, None);
    assert!(!shot.sunk);
    assert!(!shot.game_over);
    assert!(game.cell(coord).unwrap().hit);
    // no ship lost a dot
    for ship in game.ships() {
        assert_eq!(ship.remaining_dots(), ship.shape().dots());
    }
}

#[test]
fn sinking_the_i_ship_leaves_others_untouched() {
    let mut game = new_game(4);
    let i_ship = game
        .ships()
        .iter()
        .find(|s| s.shape() == ShipShape::IShaped)
        .unwrap();
    let id = i_ship.id();
    let cells: Vec<Coord> = i_ship.cells().to_vec();

    for (n, &coord) in cells.iter().enumerate() {
        let shot = game.fire_at(coord).unwrap();
        assert_eq!(shot.ship, Some(id));
        assert_eq!(shot.sunk, n == cells.len() - 1);
    }

    for ship in game.ships() {
        if ship.id() == id {
            assert!(ship.is_sunk());
            assert_eq!(ship.remaining_dots(), 0);
        } else {
            assert!(!ship.is_sunk());
            assert_eq!(ship.remaining_dots(), ship.shape().dots());
        }
    }
}

#[test]
fn game_ends_exactly_on_tenth_ship_hit() {
    let mut game = new_game(5);
    // an empty-cell hit first: must not count toward game over
    let miss = empty_coord(&game);
    assert!(!game.fire_at(miss).unwrap().game_over);

    let all_cells: Vec<Coord> = game
        .ships()
        .iter()
        .flat_map(|s| s.cells().to_vec())
        .collect();
    assert_eq!(all_cells.len(), 10);

    for (n, &coord) in all_cells.iter().enumerate() {
        assert!(!game.is_over());
        let shot = game.fire_at(coord).unwrap();
        if n < 9 {
            assert!(!shot.game_over, "game ended early on ship hit {}", n + 1);
            assert_eq!(game.status(), GameStatus::InProgress);
        } else {
            assert!(shot.game_over);
            assert_eq!(game.status(), GameStatus::Over);
        }
    }
}

#[test]
fn fire_random_never_picks_a_hit_cell() {
    let mut game = new_game(6);
    let mut rng = SmallRng::seed_from_u64(99);
    let mut fired = std::collections::HashSet::new();
    for _ in 0..60 {
        if game.is_over() {
            break;
        }
        let shot = game.fire_random(&mut rng).unwrap();
        assert!(fired.insert((shot.coord.x, shot.coord.y)), "refired {}", shot.coord);
    }
}

#[test]
fn board_exhausted_after_every_cell_is_hit() {
    let mut game = new_game(8);
    let mut rng = SmallRng::seed_from_u64(8);
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            game.fire_at(Coord::new(x, y)).unwrap();
        }
    }
    assert!(game.is_over());
    assert_eq!(game.fire_random(&mut rng).unwrap_err(), GameError::BoardExhausted);
}
