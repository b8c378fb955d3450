pub mod generation;
pub mod refill;
pub mod search;
pub mod simulation;
