//! Square candy grid with an explicit empty marker
//!
//! The grid is a fixed-size `n x n` matrix backed by `ndarray`. Cells hold
//! either a candy from the five-symbol alphabet or the empty marker left
//! behind by a cleared match. All accessors are bounds-checked and return
//! `Option` instead of panicking.

use std::fmt;
use std::str::FromStr;

use ndarray::Array2;

use crate::io::configuration::CANDY_COUNT;
use crate::io::error::{GameError, Result};
use crate::spatial::moves::Move;

/// One symbol of the candy alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Candy {
    /// Glyph `A`
    A,
    /// Glyph `B`
    B,
    /// Glyph `C`
    C,
    /// Glyph `D`
    D,
    /// Glyph `E`
    E,
}

impl Candy {
    /// Every candy in alphabet order
    pub const ALL: [Self; CANDY_COUNT] = [Self::A, Self::B, Self::C, Self::D, Self::E];

    /// Map an index onto the alphabet, wrapping around its length
    pub const fn from_index(index: usize) -> Self {
        match index % CANDY_COUNT {
            0 => Self::A,
            1 => Self::B,
            2 => Self::C,
            3 => Self::D,
            _ => Self::E,
        }
    }

    /// Position of this candy in the alphabet
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Character used in textual renderings
    pub const fn glyph(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
        }
    }

    /// Parse a glyph, accepting lower case
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            _ => None,
        }
    }
}

/// Content of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Cleared cell awaiting refill
    #[default]
    Empty,
    /// Cell holding a candy
    Filled(Candy),
}

impl Cell {
    /// Glyph of the empty marker
    pub const EMPTY_GLYPH: char = '-';

    /// Candy held by the cell, if any
    pub const fn candy(self) -> Option<Candy> {
        match self {
            Self::Empty => None,
            Self::Filled(candy) => Some(candy),
        }
    }

    /// Test for the empty marker
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Character used in textual renderings
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => Self::EMPTY_GLYPH,
            Self::Filled(candy) => candy.glyph(),
        }
    }

    /// Parse a candy glyph or the empty marker
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        if glyph == Self::EMPTY_GLYPH {
            return Some(Self::Empty);
        }
        match Candy::from_glyph(glyph) {
            Some(candy) => Some(Self::Filled(candy)),
            None => None,
        }
    }
}

impl From<Candy> for Cell {
    fn from(candy: Candy) -> Self {
        Self::Filled(candy)
    }
}

/// Zero-based grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index, growing downwards
    pub row: usize,
    /// Column index, growing to the right
    pub col: usize,
}

impl Position {
    /// Create a position from row and column indices
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Index pair understood by `ndarray`
    pub const fn index(self) -> [usize; 2] {
        [self.row, self.col]
    }

    /// Test whether the position lies inside an `n x n` grid
    pub const fn within(self, dimension: usize) -> bool {
        self.row < dimension && self.col < dimension
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square matrix of cells with a dimension fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Create an `n x n` grid where every cell is empty
    pub fn empty(dimension: usize) -> Self {
        Self {
            cells: Array2::from_elem((dimension, dimension), Cell::Empty),
        }
    }

    /// Wrap an existing cell matrix
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square
    pub fn from_cells(cells: Array2<Cell>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows != cols {
            return Err(GameError::ParseGrid {
                line: 0,
                reason: format!("grid must be square, got {rows}x{cols}"),
            });
        }
        Ok(Self { cells })
    }

    /// Number of rows, equal to the number of columns
    pub fn dimension(&self) -> usize {
        self.cells.nrows()
    }

    /// Read a cell, `None` when out of bounds
    pub fn get(&self, position: Position) -> Option<Cell> {
        self.cells.get(position.index()).copied()
    }

    /// Overwrite a cell, ignoring positions outside the grid
    pub fn set(&mut self, position: Position, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(position.index()) {
            *slot = cell;
        }
    }

    /// Exchange the contents of the two cells of a move
    ///
    /// # Errors
    ///
    /// Returns an error if either end of the move lies outside the grid
    pub fn swap(&mut self, swap: Move) -> Result<()> {
        let dimension = self.dimension();
        if !swap.fits(dimension) {
            return Err(GameError::InvalidMove {
                swap,
                dimension,
                reason: "cell outside the grid".to_string(),
            });
        }
        self.cells.swap(swap.from.index(), swap.to.index());
        Ok(())
    }

    /// Count cells holding the empty marker
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Copy out one column from top to bottom, `None` when out of bounds
    pub fn column(&self, col: usize) -> Option<Vec<Cell>> {
        (col < self.dimension()).then(|| self.cells.column(col).to_vec())
    }

    /// Underlying cell matrix
    pub const fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    pub(crate) const fn cells_mut(&mut self) -> &mut Array2<Cell> {
        &mut self.cells
    }
}

impl FromStr for Grid {
    type Err = GameError;

    /// Parse one row per non-blank line; whitespace between glyphs is optional
    fn from_str(text: &str) -> Result<Self> {
        let mut rows: Vec<Vec<Cell>> = Vec::new();

        for (line_index, line) in text.lines().enumerate() {
            let glyphs: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if glyphs.is_empty() {
                continue;
            }

            let row = glyphs
                .iter()
                .map(|&glyph| {
                    Cell::from_glyph(glyph).ok_or_else(|| GameError::ParseGrid {
                        line: line_index + 1,
                        reason: format!("unknown glyph '{glyph}'"),
                    })
                })
                .collect::<Result<Vec<Cell>>>()?;

            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(GameError::ParseGrid {
                        line: line_index + 1,
                        reason: format!("expected {} cells, found {}", first.len(), row.len()),
                    });
                }
            }
            rows.push(row);
        }

        let dimension = rows.len();
        let flat: Vec<Cell> = rows.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec((dimension, flat.len() / dimension.max(1)), flat)
            .map_err(|e| GameError::ParseGrid {
                line: 0,
                reason: e.to_string(),
            })?;

        Self::from_cells(cells)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.rows().into_iter().enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|cell| cell.glyph().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
