//! Stabilization and the turn loop
//!
//! [`Game`] owns the authoritative grid. A turn first drives the
//! detect, collapse and refill cycle to a fixed point, then asks the searcher
//! for a suggestion and an [`Actor`] for the move to play. The loop is
//! iterative and ends when the actor returns no move or the turn limit is hit.

use std::time::Duration;

use crate::algorithm::detection::clear_matches;
use crate::algorithm::generation::generate_grid;
use crate::algorithm::gravity::collapse;
use crate::algorithm::refill::refill;
use crate::algorithm::search::{ScoredMove, search};
use crate::io::configuration::{DEFAULT_DIMENSION, MAX_CASCADE_CYCLES};
use crate::io::error::{GameError, Result};
use crate::math::random::SymbolSource;
use crate::spatial::grid::Grid;
use crate::spatial::moves::Move;

/// Session parameters
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    /// Grid dimension used when the game generates its own grid
    pub dimension: usize,
    /// Stop after this many applied moves
    pub max_turns: Option<usize>,
    /// Pause handed to the observer after every displayed cycle step
    pub step_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            max_turns: None,
            step_delay: Duration::ZERO,
        }
    }
}

/// Stability of the authoritative grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Freshly built or just swapped; may hold runs
    Unstable,
    /// A full cycle changed nothing
    Stable,
}

/// The step of a stabilization cycle that just completed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleStep {
    /// Grid at the start of a cycle
    Board,
    /// Runs replaced by the empty marker
    Cleared {
        /// Cells cleared in this step
        cells: usize,
    },
    /// Candies fell to the bottom of their columns
    Collapsed,
    /// Empty cells received new candies
    Refilled,
}

/// Display and pacing collaborator
///
/// Observers receive the grid by shared reference and cannot alter it.
pub trait Observer {
    /// Called after every step of a stabilization cycle
    ///
    /// # Errors
    ///
    /// Returns an error if the observer fails to record or display the grid
    fn on_step(&mut self, _step: CycleStep, _grid: &Grid) -> Result<()> {
        Ok(())
    }

    /// Called once per turn with the searcher's suggestion
    ///
    /// # Errors
    ///
    /// Returns an error if the observer fails to display the suggestion
    fn on_suggestion(&mut self, _suggestion: Option<&ScoredMove>) -> Result<()> {
        Ok(())
    }

    /// Called after a move has been applied to the grid
    ///
    /// # Errors
    ///
    /// Returns an error if the observer fails to record or display the grid
    fn on_move(&mut self, _swap: Move, _grid: &Grid) -> Result<()> {
        Ok(())
    }

    /// Pacing delay between displayed steps; no-op unless overridden
    fn pause(&mut self, _delay: Duration) {}
}

/// Observer that ignores everything
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl Observer for NullObserver {}

/// Fans every notification out to several observers in order
#[derive(Default)]
pub struct ObserverChain<'a> {
    observers: Vec<&'a mut dyn Observer>,
}

impl<'a> ObserverChain<'a> {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observer
    pub fn push(&mut self, observer: &'a mut dyn Observer) {
        self.observers.push(observer);
    }
}

impl Observer for ObserverChain<'_> {
    fn on_step(&mut self, step: CycleStep, grid: &Grid) -> Result<()> {
        self.observers
            .iter_mut()
            .try_for_each(|observer| observer.on_step(step, grid))
    }

    fn on_suggestion(&mut self, suggestion: Option<&ScoredMove>) -> Result<()> {
        self.observers
            .iter_mut()
            .try_for_each(|observer| observer.on_suggestion(suggestion))
    }

    fn on_move(&mut self, swap: Move, grid: &Grid) -> Result<()> {
        self.observers
            .iter_mut()
            .try_for_each(|observer| observer.on_move(swap, grid))
    }

    fn pause(&mut self, delay: Duration) {
        for observer in &mut self.observers {
            observer.pause(delay);
        }
    }
}

/// Source of the moves played on the authoritative grid
pub trait Actor {
    /// Choose the next move, or `None` to end the session
    ///
    /// Returned moves must join two in-bounds neighbouring cells.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor cannot produce an answer
    fn next_move(&mut self, grid: &Grid, suggestion: Option<ScoredMove>) -> Result<Option<Move>>;
}

/// Plays the searcher's suggestion until none is left
#[derive(Clone, Copy, Debug, Default)]
pub struct Autopilot;

impl Actor for Autopilot {
    fn next_move(&mut self, _grid: &Grid, suggestion: Option<ScoredMove>) -> Result<Option<Move>> {
        Ok(suggestion.map(|scored| scored.swap))
    }
}

/// Why a session ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// The searcher found no swap scoring above zero and the actor stopped
    NoImprovingMove,
    /// The actor asked to stop while a scoring swap was still available
    ActorStopped,
    /// The configured number of turns was played
    TurnLimit,
}

/// Outcome of a finished session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    /// Moves applied to the grid
    pub turns: usize,
    /// Cells cleared during stabilization over the whole session
    pub cells_cleared: usize,
    /// Reason the session ended
    pub end: EndReason,
}

/// Owner of the authoritative grid and its symbol source
pub struct Game<S> {
    grid: Grid,
    source: S,
    phase: Phase,
    config: GameConfig,
    turns: usize,
    cells_cleared: usize,
}

impl<S> Game<S>
where
    S: SymbolSource + Clone,
{
    /// Start a game on a freshly generated grid
    ///
    /// # Errors
    ///
    /// Returns an error if the configured dimension is outside the supported range
    pub fn new(config: GameConfig, mut source: S) -> Result<Self> {
        let grid = generate_grid(config.dimension, &mut source)?;
        Ok(Self::from_grid(grid, source, config))
    }

    /// Start a game on an existing grid
    pub const fn from_grid(grid: Grid, source: S, config: GameConfig) -> Self {
        Self {
            grid,
            source,
            phase: Phase::Unstable,
            config,
            turns: 0,
            cells_cleared: 0,
        }
    }

    /// Access the authoritative grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current stability phase
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Moves applied so far
    pub const fn turns(&self) -> usize {
        self.turns
    }

    /// Cells cleared by stabilization so far
    pub const fn cells_cleared(&self) -> usize {
        self.cells_cleared
    }

    /// Session parameters
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Run detect, collapse and refill cycles until one changes nothing
    ///
    /// Each cycle compares the grid against a snapshot taken before it; the
    /// grid is stable once they are equal. Returns the cells cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if an observer fails or the grid has not settled
    /// after `MAX_CASCADE_CYCLES` cycles
    pub fn stabilize(&mut self, observer: &mut dyn Observer) -> Result<usize> {
        let delay = self.config.step_delay;
        let mut cleared_total = 0;

        for _ in 0..MAX_CASCADE_CYCLES {
            let snapshot = self.grid.clone();

            observer.on_step(CycleStep::Board, &self.grid)?;
            observer.pause(delay);

            let cells = clear_matches(&mut self.grid);
            cleared_total += cells;
            observer.on_step(CycleStep::Cleared { cells }, &self.grid)?;
            observer.pause(delay);

            collapse(&mut self.grid);
            observer.on_step(CycleStep::Collapsed, &self.grid)?;
            observer.pause(delay);

            refill(&mut self.grid, &mut self.source);
            observer.on_step(CycleStep::Refilled, &self.grid)?;
            observer.pause(delay);

            if self.grid == snapshot {
                self.phase = Phase::Stable;
                self.cells_cleared += cleared_total;
                return Ok(cleared_total);
            }
        }

        Err(GameError::CascadeLimit {
            cycles: MAX_CASCADE_CYCLES,
        })
    }

    /// Best adjacent swap on the current grid, `None` if nothing scores
    ///
    /// # Errors
    ///
    /// Returns an error if a simulated cascade does not settle
    pub fn suggest(&self) -> Result<Option<ScoredMove>> {
        search(&self.grid, &self.source)
    }

    /// Swap two cells of the authoritative grid and mark it unstable
    ///
    /// # Errors
    ///
    /// Returns an error if the move is not adjacent or leaves the grid
    pub fn apply_move(&mut self, swap: Move) -> Result<()> {
        if !swap.is_adjacent() {
            return Err(GameError::NotAdjacent { swap });
        }
        self.grid.swap(swap)?;
        self.phase = Phase::Unstable;
        self.turns += 1;
        Ok(())
    }

    /// Play turns until the actor stops or the turn limit is reached
    ///
    /// # Errors
    ///
    /// Returns an error if stabilization, the search, an observer or the
    /// actor fails, or the actor returns an invalid move
    pub fn play(
        &mut self,
        actor: &mut dyn Actor,
        observer: &mut dyn Observer,
    ) -> Result<SessionSummary> {
        loop {
            self.stabilize(observer)?;

            if self.config.max_turns.is_some_and(|limit| self.turns >= limit) {
                return Ok(self.summary(EndReason::TurnLimit));
            }

            let suggestion = self.suggest()?;
            observer.on_suggestion(suggestion.as_ref())?;

            let Some(swap) = actor.next_move(&self.grid, suggestion)? else {
                let end = if suggestion.is_none() {
                    EndReason::NoImprovingMove
                } else {
                    EndReason::ActorStopped
                };
                return Ok(self.summary(end));
            };

            self.apply_move(swap)?;
            observer.on_move(swap, &self.grid)?;
        }
    }

    const fn summary(&self, end: EndReason) -> SessionSummary {
        SessionSummary {
            turns: self.turns,
            cells_cleared: self.cells_cleared,
            end,
        }
    }
}
