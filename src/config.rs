use crate::ship::ShipShape;

/// Grid side length used by the standard game.
pub const GRID_SIZE: u8 = 10;

/// Fixed fleet catalog, in placement order.
pub const FLEET: [ShipShape; 4] = [
    ShipShape::LShaped,
    ShipShape::IShaped,
    ShipShape::DotShaped,
    ShipShape::DotShaped,
];

/// Placement proposals per ship before giving up with `PlacementExhausted`.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 200;
