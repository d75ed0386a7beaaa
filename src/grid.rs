//! Grid state: which ship occupies each cell and which cells have been hit.

use crate::common::{Coord, GameError, ShipId};

/// A single cell on the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    /// Ship occupying this cell, if any.
    pub ship: Option<ShipId>,
    /// Whether this cell has been hit. Monotonic: set once, never cleared.
    pub hit: bool,
}

/// Square grid of cells, indexed by [`Coord`].
#[derive(Debug, Clone)]
pub struct Grid {
    size: u8,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty `size`×`size` grid: no ships, nothing hit.
    pub fn new(size: u8) -> Self {
        Self {
            size,
            cells: vec![Cell::default(); size as usize * size as usize],
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    fn index(&self, coord: Coord) -> usize {
        coord.y as usize * self.size as usize + coord.x as usize
    }

    /// Cell at `coord`, or `OutOfBounds`.
    pub fn cell(&self, coord: Coord) -> Result<Cell, GameError> {
        if !self.contains(coord) {
            return Err(GameError::OutOfBounds {
                coord,
                size: self.size,
            });
        }
        Ok(self.cells[self.index(coord)])
    }

    /// Record `id` as the occupant of `coord`. Bounds are validated by the
    /// placement generator before this is called.
    pub(crate) fn mark_occupied(&mut self, coord: Coord, id: ShipId) {
        let i = self.index(coord);
        self.cells[i].ship = Some(id);
    }

    /// Mark `coord` as hit. Bounds are validated by the shot resolver before
    /// this is called.
    pub(crate) fn mark_hit(&mut self, coord: Coord) {
        let i = self.index(coord);
        self.cells[i].hit = true;
    }

    /// All coordinates whose cells have not been hit yet, in row order.
    pub fn undamaged(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.size)
            .flat_map(move |y| (0..self.size).map(move |x| Coord::new(x, y)))
            .filter(move |&c| !self.cells[self.index(c)].hit)
    }
}
