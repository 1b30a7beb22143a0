use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Minimum wall-clock time between simulation steps
    pub tick_interval: Duration,
    /// Starting cell for the snake head
    pub snake_start: (usize, usize),
    /// Starting cell for the food
    pub food_start: (usize, usize),
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(16)
    }
}

impl GameConfig {
    /// Create a configuration for a custom grid size, with the snake starting
    /// in the upper-left quadrant and the food in the lower-right
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            tick_interval: Duration::from_millis(150),
            snake_start: (grid_size / 4, grid_size / 4),
            food_start: (3 * grid_size / 4, 3 * grid_size / 4),
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(8)
    }
}
