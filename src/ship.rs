//! Fleet definitions: ship shapes and per-ship damage state.

use crate::common::{Coord, ShipId};

/// The three fixed ship geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipShape {
    /// Straight run of 3 cells plus one perpendicular foot cell.
    LShaped,
    /// Straight line of 4 cells.
    IShaped,
    /// Single cell.
    DotShaped,
}

impl ShipShape {
    /// Number of cells this shape occupies.
    pub const fn dots(self) -> usize {
        match self {
            ShipShape::LShaped | ShipShape::IShaped => 4,
            ShipShape::DotShaped => 1,
        }
    }

    /// Display name of the shape.
    pub const fn name(self) -> &'static str {
        match self {
            ShipShape::LShaped => "L-shaped ship",
            ShipShape::IShaped => "I-shaped ship",
            ShipShape::DotShaped => "Dot-shaped ship",
        }
    }
}

/// A placed ship and its damage bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    id: ShipId,
    shape: ShipShape,
    cells: Vec<Coord>,
    remaining_dots: usize,
}

impl Ship {
    pub(crate) fn new(id: ShipId, shape: ShipShape, cells: Vec<Coord>) -> Self {
        debug_assert_eq!(cells.len(), shape.dots());
        let remaining_dots = cells.len();
        Self {
            id,
            shape,
            cells,
            remaining_dots,
        }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn shape(&self) -> ShipShape {
        self.shape
    }

    /// The grid cells this ship occupies, in generation order.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Undamaged cells left on this ship.
    pub fn remaining_dots(&self) -> usize {
        self.remaining_dots
    }

    /// Whether every cell of this ship has been hit.
    pub fn is_sunk(&self) -> bool {
        self.remaining_dots == 0
    }

    /// Record one distinct hit on this ship. Returns `true` when the hit
    /// sank it. Duplicate hits on a cell are rejected upstream, so each call
    /// corresponds to a fresh cell.
    pub(crate) fn register_hit(&mut self) -> bool {
        self.remaining_dots = self.remaining_dots.saturating_sub(1);
        self.remaining_dots == 0
    }
}
