/// Run detection and clearing
pub mod detection;
/// Stabilization state machine and the turn loop
pub mod executor;
/// Initial random grid construction
pub mod generation;
/// Column compaction after clearing
pub mod gravity;
/// Best-effort refill of empty cells
pub mod refill;
/// Exhaustive best-move search
pub mod search;
/// Isolated cascade simulation for a candidate move
pub mod simulation;
