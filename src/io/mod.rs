//! Input/output around the engine core

/// Command-line parsing and mode dispatch
pub mod cli;
/// Engine constants and defaults
pub mod configuration;
/// Interactive console player
pub mod console;
/// Error types
pub mod error;
/// PNG export of grids
pub mod image;
/// Progress bars for long-running analysis
pub mod progress;
/// Plain-text grid rendering
pub mod render;
/// GIF capture of cascades
pub mod visualization;
