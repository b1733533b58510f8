//! Conway's Game of Life transition rule (B3/S23)

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Neighbor counts that bring a dead cell to life
    pub const BIRTH: [u8; 1] = [3];

    /// Neighbor counts that keep a live cell alive
    pub const SURVIVAL: [u8; 2] = [2, 3];

    /// Size of the Moore neighborhood
    pub const MAX_NEIGHBORS: u8 = 8;

    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        match (current_state, neighbor_count) {
            (_, 3) => true,
            (true, 2) => true,
            _ => false,
        }
    }

    /// Check if a neighbor count is possible (0-8)
    pub fn is_valid_neighbor_count(count: u8) -> bool {
        count <= Self::MAX_NEIGHBORS
    }
}
