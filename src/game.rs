//! Game state and shot resolution.

use log::info;
use rand::Rng;

use crate::common::{Coord, GameError, ShotResult};
use crate::config::{FLEET, GRID_SIZE};
use crate::grid::{Cell, Grid};
use crate::placement::place_fleet;
use crate::ship::{Ship, ShipShape};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Terminal: every ship cell has been hit. Callers stop issuing shots
    /// and construct a fresh `Game` for a rematch.
    Over,
}

/// A single-player game: the grid, the fleet and aggregate damage.
///
/// Constructed once per game by the placement generator; thereafter mutated
/// only through [`Game::fire_at`] / [`Game::fire_random`]. A finished game is
/// discarded, not reset.
pub struct Game {
    grid: Grid,
    ships: Vec<Ship>,
    total_dots: usize,
    damaged_dots: usize,
    status: GameStatus,
}

impl Game {
    /// Build a game on a `size`×`size` grid, randomly placing one ship per
    /// entry of `fleet` in order. Fails with `PlacementExhausted` when a
    /// ship cannot be placed within the attempt budget.
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        size: u8,
        fleet: &[ShipShape],
    ) -> Result<Self, GameError> {
        let mut grid = Grid::new(size);
        let ships = place_fleet(rng, &mut grid, fleet)?;
        let total_dots = ships.iter().map(|s| s.shape().dots()).sum();
        Ok(Self {
            grid,
            ships,
            total_dots,
            damaged_dots: 0,
            status: GameStatus::InProgress,
        })
    }

    /// Standard game: 10×10 grid with the fixed default fleet.
    pub fn standard<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, GameError> {
        Self::new(rng, GRID_SIZE, &FLEET)
    }

    pub fn size(&self) -> u8 {
        self.grid.size()
    }

    /// Cell state at `coord`, for rendering.
    pub fn cell(&self, coord: Coord) -> Result<Cell, GameError> {
        self.grid.cell(coord)
    }

    /// Snapshot of the fleet, for damage indicators.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    /// Fire at `coord`. Fails with `OutOfBounds` for an invalid coordinate
    /// and `AlreadyHit` for a spent cell, both without touching game state.
    /// On success the cell is marked hit; a shot on an occupied cell also
    /// damages the owning ship and, on its last dot, sinks it. The game ends
    /// the instant the fleet's last dot is hit.
    pub fn fire_at(&mut self, coord: Coord) -> Result<ShotResult, GameError> {
        let cell = self.grid.cell(coord)?;
        if cell.hit {
            return Err(GameError::AlreadyHit(coord));
        }
        self.grid.mark_hit(coord);

        let mut sunk = false;
        if let Some(id) = cell.ship {
            let ship = &mut self.ships[id.index()];
            sunk = ship.register_hit();
            if sunk {
                info!("{} {} sunk", ship.shape().name(), id);
            }
            self.damaged_dots += 1;
            if self.damaged_dots == self.total_dots {
                self.status = GameStatus::Over;
                info!("all ships sunk, game over");
            }
        }

        Ok(ShotResult {
            coord,
            hit: true,
            ship: cell.ship,
            sunk,
            game_over: self.is_over(),
        })
    }

    /// Fire at a uniformly random undamaged cell. Fails with
    /// `BoardExhausted` only when every cell is already hit, which a caller
    /// that stops at game over never reaches.
    pub fn fire_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<ShotResult, GameError> {
        let candidates: Vec<Coord> = self.grid.undamaged().collect();
        if candidates.is_empty() {
            return Err(GameError::BoardExhausted);
        }
        let coord = candidates[rng.random_range(0..candidates.len())];
        self.fire_at(coord)
    }
}
