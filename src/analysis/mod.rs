//! Experimental analysis of the engine

/// Timing harness for the best-move search
pub mod complexity;
