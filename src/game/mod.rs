//! Core game logic for Snake
//!
//! Everything in this module is pure state manipulation with no I/O or
//! rendering dependencies; the mode loop feeds it input and time and reads
//! its state back out to draw.

pub mod board;
pub mod config;
pub mod direction;
pub mod engine;

// Re-export commonly used types
pub use board::{Board, Cell};
pub use config::GameConfig;
pub use direction::{Direction, InputFrame};
pub use engine::GameEngine;
