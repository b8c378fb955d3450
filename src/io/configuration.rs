//! Engine constants and runtime configuration defaults

// Rules of the game
/// Number of distinct candy symbols
pub const CANDY_COUNT: usize = 5;
/// Shortest run of identical candies that gets cleared
pub const MIN_RUN_LENGTH: usize = 3;

/// Draws the refiller makes before accepting a candy that completes a run
pub const REFILL_ATTEMPTS: usize = 50;

// Grid size limits
/// Smallest dimension the grid factory accepts
pub const MIN_DIMENSION: usize = 3;
// Search cost grows with the fifth power of the dimension
/// Largest dimension the grid factory accepts
pub const MAX_DIMENSION: usize = 64;

// Only reachable with a symbol source that keeps recreating runs
/// Detect, collapse and refill cycles allowed before a cascade is abandoned
pub const MAX_CASCADE_CYCLES: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible games
pub const DEFAULT_SEED: u64 = 42;
/// Default grid dimension
pub const DEFAULT_DIMENSION: usize = 8;
/// Default pause between displayed cycle steps
pub const DEFAULT_STEP_DELAY_MS: u64 = 500;

// Complexity analysis settings
/// Grid sizes timed by the complexity analysis
pub const DEFAULT_ANALYSIS_SIZES: [usize; 10] = [3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
/// Random grids searched per size
pub const DEFAULT_ANALYSIS_TRIALS: usize = 100;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Side length in pixels of one cell in exported images
pub const CELL_PIXELS: u32 = 16;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 400;
/// Multiplier applied to the delay of the last GIF frame
pub const FINAL_FRAME_HOLD: u32 = 5;
