//! Plain-text board rendering for the CLI front end. Presentation only;
//! nothing here mutates game state.

use crate::common::Coord;
use crate::game::Game;

/// Print the grid with column letters and row numbers. `X` marks a hit ship
/// cell, `o` a hit empty cell, `.` an untouched cell. With `reveal`, un-hit
/// ship cells show as `S`.
pub fn print_board(game: &Game, reveal: bool) {
    let size = game.size();
    print!("   ");
    for c in 0..size {
        let ch = (b'A' + c) as char;
        print!(" {}", ch);
    }
    println!();
    for r in 0..size {
        print!("{:2} ", r + 1);
        for c in 0..size {
            let cell = game.cell(Coord::new(c, r)).unwrap_or_default();
            let ch = match (cell.hit, cell.ship) {
                (true, Some(_)) => 'X',
                (true, None) => 'o',
                (false, Some(_)) if reveal => 'S',
                _ => '.',
            };
            print!(" {}", ch);
        }
        println!();
    }
}

/// Print one line per ship: name, id and damage state.
pub fn print_fleet_status(game: &Game) {
    for ship in game.ships() {
        let state = if ship.is_sunk() {
            "sunk".to_string()
        } else {
            format!(
                "{}/{} dots left",
                ship.remaining_dots(),
                ship.shape().dots()
            )
        };
        println!("  {} {}: {}", ship.shape().name(), ship.id(), state);
    }
}
