use std::io::{self, BufRead, Write};

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::ui::{print_board, print_fleet_status};
use seabattle::{init_logging, Coord, Game, GameError, ShotResult};

#[derive(Parser)]
#[command(author, version, about = "Single-player sea battle on a 10x10 grid", long_about = None)]
struct Cli {
    /// Fix RNG seed for reproducible games (e.g., --seed 12345)
    #[arg(long)]
    seed: Option<u64>,
    /// Play the whole game automatically with random shots.
    #[arg(long)]
    auto: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let mut game = Game::standard(&mut rng)?;
    println!("Fleet placed. Enter a cell like B4 to fire, or press Enter for a random shot.");

    while !game.is_over() {
        print_board(&game, false);
        let shot = if cli.auto {
            game.fire_random(&mut rng)?
        } else {
            prompt_shot(&mut game, &mut rng)?
        };
        report(&game, &shot);
    }

    println!("Game over! Final board:");
    print_board(&game, true);
    print_fleet_status(&game);
    Ok(())
}

/// Read one fire command from stdin and resolve it. Re-prompts on malformed
/// input and on already-hit cells; an empty line fires at random.
fn prompt_shot(game: &mut Game, rng: &mut SmallRng) -> anyhow::Result<ShotResult> {
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF: finish the game with random shots
            return Ok(game.fire_random(rng)?);
        }
        let input = line.trim();
        if input.is_empty() {
            return Ok(game.fire_random(rng)?);
        }
        let Some(coord) = parse_coord(input) else {
            println!("Could not read '{}'; try a cell like B4.", input);
            continue;
        };
        match game.fire_at(coord) {
            Ok(shot) => return Ok(shot),
            Err(GameError::AlreadyHit(c)) => {
                println!("Cell {} was already hit; pick another.", c);
            }
            Err(GameError::OutOfBounds { coord: c, size }) => {
                println!("Cell {} is off the {}x{} board.", c, size, size);
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Parse a cell like `B4`: column letter then 1-based row number.
fn parse_coord(input: &str) -> Option<Coord> {
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let x = col_ch as u8 - b'A';
    let row: u8 = chars.as_str().trim().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some(Coord::new(x, row - 1))
}

fn report(game: &Game, shot: &ShotResult) {
    match shot.ship {
        Some(id) if shot.sunk => {
            let ship = game
                .ships()
                .iter()
                .find(|s| s.id() == id)
                .map(|s| s.shape().name())
                .unwrap_or("ship");
            println!("{}: hit and sunk ({})!", shot.coord, ship);
        }
        Some(_) => println!("{}: hit!", shot.coord),
        None => println!("{}: miss.", shot.coord),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_coord;
    use seabattle::Coord;

    #[test]
    fn parse_coord_accepts_letter_number() {
        assert_eq!(parse_coord("B4"), Some(Coord::new(1, 3)));
        assert_eq!(parse_coord("a1"), Some(Coord::new(0, 0)));
        assert_eq!(parse_coord("J10"), Some(Coord::new(9, 9)));
    }

    #[test]
    fn parse_coord_rejects_garbage() {
        assert_eq!(parse_coord(""), None);
        assert_eq!(parse_coord("44"), None);
        assert_eq!(parse_coord("B0"), None);
        assert_eq!(parse_coord("B"), None);
    }
}
