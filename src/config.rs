use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("carrier", 5),
    ShipType::new("battleship", 4),
    ShipType::new("cruiser", 3),
    ShipType::new("submarine", 3),
    ShipType::new("destroyer", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Look up a fleet entry by name. Returns `None` if no ship carries that name.
pub fn ship_by_name(name: &str) -> Option<ShipType> {
    SHIPS.iter().copied().find(|def| def.name() == name)
}
