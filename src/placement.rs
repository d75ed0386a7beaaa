//! Randomized fleet placement: propose a geometry per ship, validate it
//! against grid bounds and previously placed ships, retry within a bounded
//! attempt budget.

use log::debug;
use rand::Rng;

use crate::common::{Coord, GameError, ShipId};
use crate::config::MAX_PLACEMENT_ATTEMPTS;
use crate::grid::Grid;
use crate::ship::{Ship, ShipShape};

/// Candidate geometry before validation. Cells may fall outside the grid in
/// any direction; `validate` rejects those.
type Candidate = Vec<(i16, i16)>;

/// Place every ship of `fleet` onto `grid`, in catalog order. Each ship is
/// validated only against the ships placed before it.
pub(crate) fn place_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    grid: &mut Grid,
    fleet: &[ShipShape],
) -> Result<Vec<Ship>, GameError> {
    let mut ships: Vec<Ship> = Vec::with_capacity(fleet.len());
    for (i, &shape) in fleet.iter().enumerate() {
        let id = ShipId(i as u8 + 1);
        let cells = place_ship(rng, grid.size(), shape, &ships)?;
        for &coord in &cells {
            grid.mark_occupied(coord, id);
        }
        ships.push(Ship::new(id, shape, cells));
    }
    Ok(ships)
}

/// Propose-and-validate loop for one ship. Re-rolls the full geometry on
/// every failure; gives up after `MAX_PLACEMENT_ATTEMPTS` so an unlucky
/// sequence cannot loop (or recurse) forever.
fn place_ship<R: Rng + ?Sized>(
    rng: &mut R,
    size: u8,
    shape: ShipShape,
    placed: &[Ship],
) -> Result<Vec<Coord>, GameError> {
    for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
        let candidate = propose(rng, shape, size);
        if let Some(cells) = validate(&candidate, size, placed) {
            debug!("placed {} after {} attempt(s)", shape.name(), attempt);
            return Ok(cells);
        }
    }
    Err(GameError::PlacementExhausted {
        ship: shape.name(),
        attempts: MAX_PLACEMENT_ATTEMPTS,
    })
}

/// Roll a random geometry for `shape`. The start cell is always on the grid;
/// the remaining cells may run off any edge and are caught by `validate`.
fn propose<R: Rng + ?Sized>(rng: &mut R, shape: ShipShape, size: u8) -> Candidate {
    let start_x = rng.random_range(0..size) as i16;
    let start_y = rng.random_range(0..size) as i16;
    match shape {
        ShipShape::DotShaped => vec![(start_x, start_y)],
        ShipShape::IShaped => {
            let horizontal: bool = rng.random();
            (0..4)
                .map(|i| {
                    if horizontal {
                        (start_x + i, start_y)
                    } else {
                        (start_x, start_y + i)
                    }
                })
                .collect()
        }
        ShipShape::LShaped => {
            let horizontal: bool = rng.random();
            let foot_at_start: bool = rng.random();
            let foot_offset: i16 = if rng.random() { 1 } else { -1 };
            let mut cells: Candidate = (0..3)
                .map(|i| {
                    if horizontal {
                        (start_x + i, start_y)
                    } else {
                        (start_x, start_y + i)
                    }
                })
                .collect();
            // Foot sits one cell perpendicular to the run, at either end.
            let along = if foot_at_start { 0 } else { 2 };
            let foot = if horizontal {
                (start_x + along, start_y + foot_offset)
            } else {
                (start_x + foot_offset, start_y + along)
            };
            cells.push(foot);
            cells
        }
    }
}

/// Check a candidate against grid bounds and the no-touch buffer around
/// already placed ships. Returns the committed coordinates on success.
///
/// Ships may not touch, even diagonally: a candidate cell is rejected when
/// some cell of another ship is within Chebyshev distance < 2, i.e. both
/// `|Δx| < 2` and `|Δy| < 2`. Sharing a row or column at distance ≥ 2 on the
/// other axis is fine.
fn validate(candidate: &Candidate, size: u8, placed: &[Ship]) -> Option<Vec<Coord>> {
    let mut cells = Vec::with_capacity(candidate.len());
    for &(x, y) in candidate {
        if x < 0 || y < 0 || x >= size as i16 || y >= size as i16 {
            return None;
        }
        for other in placed {
            for &c in other.cells() {
                if (c.x as i16 - x).abs() < 2 && (c.y as i16 - y).abs() < 2 {
                    return None;
                }
            }
        }
        cells.push(Coord::new(x as u8, y as u8));
    }
    Some(cells)
}
