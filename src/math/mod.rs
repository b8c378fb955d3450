//! Mathematical utilities for the engine

/// Injectable randomness for candy draws
pub mod random;
/// Least squares fits used by the complexity analysis
pub mod regression;
