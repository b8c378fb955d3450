//! Match-3 puzzle engine with cascade simulation and exhaustive best-move search
//!
//! The engine keeps a square grid of candies, clears runs of three or more,
//! lets the remaining candies fall, refills the gaps and repeats until the
//! grid settles. For any settled grid it can simulate every adjacent swap on
//! a private copy and report the one whose cascade clears the most cells.

#![forbid(unsafe_code)]

/// Grid algorithms: detection, gravity, refill, simulation, search and the turn loop
pub mod algorithm;
/// Experimental timing of the search
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Randomness sources and curve fitting
pub mod math;
/// Grid, cell and move types
pub mod spatial;

pub use io::error::{GameError, Result};
