//! Shared core types: coordinates, ship identifiers, shot outcomes and game
//! errors.

use core::fmt;

use thiserror::Error;

/// Zero-indexed grid coordinate. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Identifier of a ship within one game. Assigned sequentially from 1 in
/// catalog order and stable for the game's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipId(pub u8);

impl ShipId {
    /// Position of this ship in the fleet vector.
    pub(crate) fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outcome of an accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotResult {
    /// The cell that was fired at.
    pub coord: Coord,
    /// The cell is now marked hit. Always `true` for an accepted shot;
    /// rejected shots surface as [`GameError`] instead.
    pub hit: bool,
    /// Ship occupying the cell, if any.
    pub ship: Option<ShipId>,
    /// The occupying ship ran out of dots on this shot.
    pub sunk: bool,
    /// This shot ended the game.
    pub game_over: bool,
}

/// Errors returned by core game operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate lies outside the grid. A caller bug; rejected before any
    /// state changes.
    #[error("coordinate {coord} is outside the {size}x{size} grid")]
    OutOfBounds { coord: Coord, size: u8 },
    /// The cell was already hit by an earlier shot.
    #[error("cell {0} was already hit")]
    AlreadyHit(Coord),
    /// The placement generator gave up after its retry budget.
    #[error("could not place {ship} after {attempts} attempts")]
    PlacementExhausted { ship: &'static str, attempts: u32 },
    /// Every cell on the board has been hit already.
    #[error("no undamaged cells remain")]
    BoardExhausted,
}
