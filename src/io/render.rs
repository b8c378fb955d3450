//! Plain-text rendering of grids and suggestions

use std::io::Write;
use std::time::Duration;

use crate::algorithm::executor::{CycleStep, Observer};
use crate::algorithm::search::ScoredMove;
use crate::io::error::Result;
use crate::spatial::grid::Grid;
use crate::spatial::moves::Move;

/// Caption printed above the grid for each cycle step
pub const fn step_caption(step: CycleStep) -> &'static str {
    match step {
        CycleStep::Board => "Board",
        CycleStep::Cleared { .. } => "Matches cleared",
        CycleStep::Collapsed => "Gravity",
        CycleStep::Refilled => "Refill",
    }
}

/// Draw the grid with 1-based row and column labels inside a border
///
/// ```text
///     1 2 3
///    +- - - +
/// 1 | A B C |
/// 2 | - A B |
/// 3 | C C A |
///    +- - - +
/// ```
pub fn render_grid(grid: &Grid) -> String {
    let dimension = grid.dimension();
    let width = dimension.to_string().len();
    let margin = " ".repeat(width + 2);
    let mut out = String::new();

    out.push_str(&margin);
    out.push(' ');
    for col in 1..=dimension {
        out.push_str(&format!("{col:<width$} "));
    }
    out.truncate(out.trim_end().len());
    out.push('\n');

    let border = format!("{margin}+{}+\n", format!("{:<width$} ", "-").repeat(dimension));
    out.push_str(&border);

    for (row_index, row) in grid.cells().rows().into_iter().enumerate() {
        out.push_str(&format!("{:>width$} | ", row_index + 1));
        for cell in row {
            out.push_str(&format!("{:<width$} ", cell.glyph()));
        }
        out.push_str("|\n");
    }

    out.push_str(&border);
    out
}

/// Describe a move with 1-based coordinates, `(r1,c1) <-> (r2,c2)`
pub fn describe_move(swap: Move) -> String {
    format!(
        "({},{}) <-> ({},{})",
        swap.from.row + 1,
        swap.from.col + 1,
        swap.to.row + 1,
        swap.to.col + 1
    )
}

/// One-line report of the searcher's suggestion
pub fn describe_suggestion(suggestion: Option<&ScoredMove>) -> String {
    suggestion.map_or_else(
        || "No improving move found.".to_string(),
        |scored| {
            format!(
                ">>> Best move: {} clears {} cells",
                describe_move(scored.swap),
                scored.score
            )
        },
    )
}

/// Observer printing every cycle step to a writer
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    /// Render to `out`
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Observer for TextRenderer<W> {
    fn on_step(&mut self, step: CycleStep, grid: &Grid) -> Result<()> {
        match step {
            CycleStep::Cleared { cells } if cells > 0 => {
                writeln!(self.out, "{} ({cells} cells)", step_caption(step))?;
            }
            _ => writeln!(self.out, "{}", step_caption(step))?,
        }
        write!(self.out, "{}", render_grid(grid))?;
        self.out.flush()?;
        Ok(())
    }

    fn on_suggestion(&mut self, suggestion: Option<&ScoredMove>) -> Result<()> {
        writeln!(self.out, "{}", describe_suggestion(suggestion))?;
        Ok(())
    }

    fn on_move(&mut self, swap: Move, _grid: &Grid) -> Result<()> {
        writeln!(self.out, "Playing {}", describe_move(swap))?;
        Ok(())
    }

    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}
