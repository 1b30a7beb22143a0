//! Grid Snake - a real-time snake game on a fixed 16x16 board
//!
//! This library provides:
//! - Core simulation logic (game module): board, movement, collisions,
//!   growth, food placement and the wall-clock tick gate
//! - Terminal input translation (input module)
//! - TUI rendering (render module)
//! - The interactive play loop (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
