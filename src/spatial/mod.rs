//! Spatial data structures
//!
//! This module contains the board representation:
//! - Candy alphabet, cells and positions
//! - The square grid itself
//! - Adjacent swaps between grid cells

/// Grid, cell and candy types
pub mod grid;
/// Adjacent swap moves
pub mod moves;

pub use grid::{Candy, Cell, Grid, Position};
pub use moves::Move;
