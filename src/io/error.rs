//! Error types for grid construction, move handling and export operations

use std::fmt;
use std::path::PathBuf;

use crate::spatial::moves::Move;

/// Main error type for all engine operations
#[derive(Debug)]
pub enum GameError {
    /// Requested grid dimension is outside the supported range
    InvalidDimension {
        /// Requested dimension
        dimension: usize,
        /// Smallest accepted dimension
        minimum: usize,
        /// Largest accepted dimension
        maximum: usize,
    },

    /// A swap reaching a cell outside the grid
    InvalidMove {
        /// The rejected move
        swap: Move,
        /// Dimension of the grid the move was applied to
        dimension: usize,
        /// Explanation of why the move is invalid
        reason: String,
    },

    /// A swap between two cells that are not 4-connected neighbours
    NotAdjacent {
        /// The rejected move
        swap: Move,
    },

    /// A cascade kept producing matches past the cycle cap
    ///
    /// A simulated cascade reaches it when the symbol source keeps recreating
    /// runs, such as one that always yields the same candy. Stabilization
    /// only reaches it if every cycle leaves a grid different from the one it
    /// started with.
    CascadeLimit {
        /// Number of cycles executed before giving up
        cycles: usize,
    },

    /// Textual grid representation could not be parsed
    ParseGrid {
        /// 1-based line number of the offending row (0 for whole-grid problems)
        line: usize,
        /// Description of the parse failure
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Reading from or writing to the console failed
    Input {
        /// Description of the failure
        reason: String,
    },

    /// Failed to save a rendered grid or animation to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension {
                dimension,
                minimum,
                maximum,
            } => {
                write!(
                    f,
                    "Grid dimension {dimension} is outside the supported range {minimum}..={maximum}"
                )
            }
            Self::InvalidMove {
                swap,
                dimension,
                reason,
            } => {
                write!(
                    f,
                    "Invalid move {} <-> {} on a {dimension}x{dimension} grid: {reason}",
                    swap.from, swap.to
                )
            }
            Self::NotAdjacent { swap } => {
                write!(
                    f,
                    "Invalid move {} <-> {}: cells are not adjacent",
                    swap.from, swap.to
                )
            }
            Self::CascadeLimit { cycles } => {
                write!(f, "Cascade did not settle after {cycles} cycles")
            }
            Self::ParseGrid { line, reason } => {
                write!(f, "Failed to parse grid at line {line}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Input { reason } => write!(f, "Console error: {reason}"),
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, GameError>;

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        Self::Input {
            reason: err.to_string(),
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GameError {
    GameError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a console input error
pub fn input_error(reason: &impl ToString) -> GameError {
    GameError::Input {
        reason: reason.to_string(),
    }
}
