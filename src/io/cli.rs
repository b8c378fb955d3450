//! Command-line interface for playing, watching the autopilot and timing the search

use crate::algorithm::executor::{
    Autopilot, EndReason, Game, GameConfig, Observer, ObserverChain, SessionSummary,
};
use crate::analysis::complexity::analyze_search_complexity;
use crate::io::configuration::{
    CELL_PIXELS, DEFAULT_ANALYSIS_SIZES, DEFAULT_ANALYSIS_TRIALS, DEFAULT_DIMENSION, DEFAULT_SEED,
    DEFAULT_STEP_DELAY_MS, GIF_FRAME_DELAY_MS,
};
use crate::io::console::ConsoleActor;
use crate::io::error::Result;
use crate::io::image::export_grid_as_png;
use crate::io::progress::ProgressReporter;
use crate::io::render::TextRenderer;
use crate::io::visualization::CascadeRecorder;
use crate::math::random::SeededSource;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "candy-cascade")]
#[command(
    author,
    version,
    about = "Match-3 grid engine with cascade simulation and best-move search"
)]
/// Command-line arguments for the game
pub struct Cli {
    /// What to run
    #[command(subcommand)]
    pub command: Command,

    /// Random seed for reproducible grids and refills
    #[arg(short, long, global = true, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Grid dimension (n for an n x n grid)
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_DIMENSION)]
    pub size: usize,

    /// Pause between displayed cycle steps, in milliseconds
    #[arg(short, long, global = true, default_value_t = DEFAULT_STEP_DELAY_MS)]
    pub delay_ms: u64,

    /// Suppress board output and progress bars
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available modes
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively, entering moves on the console
    Play,

    /// Let the autopilot play the best move until none is left
    Auto {
        /// Stop after this many moves
        #[arg(short = 't', long)]
        max_turns: Option<usize>,

        /// Record every cycle step as an animated GIF
        #[arg(short, long, value_name = "PATH")]
        gif: Option<PathBuf>,

        /// Save the final grid as a PNG image
        #[arg(short = 'p', long, value_name = "PATH")]
        snapshot: Option<PathBuf>,
    },

    /// Time the best-move search over a range of grid sizes
    Analyze {
        /// Grid sizes to time, comma separated
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_ANALYSIS_SIZES)]
        sizes: Vec<usize>,

        /// Random grids searched per size
        #[arg(short = 'r', long, default_value_t = DEFAULT_ANALYSIS_TRIALS)]
        trials: usize,
    },
}

impl Cli {
    /// Check if boards and progress should be displayed
    pub const fn should_show_output(&self) -> bool {
        !self.quiet
    }

    /// Session parameters derived from the arguments
    pub fn game_config(&self) -> GameConfig {
        let max_turns = match &self.command {
            Command::Auto { max_turns, .. } => *max_turns,
            Command::Play | Command::Analyze { .. } => None,
        };
        let step_delay = if self.quiet {
            Duration::ZERO
        } else {
            Duration::from_millis(self.delay_ms)
        };

        GameConfig {
            dimension: self.size,
            max_turns,
            step_delay,
        }
    }
}

/// Human-readable closing line for a session
pub fn describe_summary(summary: &SessionSummary) -> String {
    let reason = match summary.end {
        EndReason::NoImprovingMove => "no move clears anything any more",
        EndReason::ActorStopped => "the player stopped",
        EndReason::TurnLimit => "the turn limit was reached",
    };
    format!(
        "Game over after {} moves, {} cells cleared: {reason}.",
        summary.turns, summary.cells_cleared
    )
}

/// Runs the mode selected on the command line
pub struct GameRunner {
    cli: Cli,
}

impl GameRunner {
    /// Create a runner for the parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected mode to completion
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the console fails,
    /// a cascade does not settle or an export fails
    pub fn run(&self) -> Result<()> {
        match self.cli.command.clone() {
            Command::Play => self.run_interactive(),
            Command::Auto { gif, snapshot, .. } => self.run_autopilot(gif, snapshot),
            Command::Analyze { sizes, trials } => self.run_analysis(&sizes, trials),
        }
    }

    fn new_game(&self) -> Result<Game<SeededSource>> {
        Game::new(self.cli.game_config(), SeededSource::new(self.cli.seed))
    }

    // Board output is part of the interactive protocol, so it ignores --quiet
    #[allow(clippy::print_stdout)]
    fn run_interactive(&self) -> Result<()> {
        let mut game = self.new_game()?;
        let mut renderer = TextRenderer::new(std::io::stdout());
        let mut actor = ConsoleActor::new(std::io::stdin().lock(), std::io::stdout());

        let summary = game.play(&mut actor, &mut renderer)?;
        println!("{}", describe_summary(&summary));
        Ok(())
    }

    #[allow(clippy::print_stdout, clippy::print_stderr)]
    fn run_autopilot(&self, gif: Option<PathBuf>, snapshot: Option<PathBuf>) -> Result<()> {
        let mut game = self.new_game()?;
        let mut renderer = TextRenderer::new(std::io::stdout());
        let mut recorder = CascadeRecorder::new(CELL_PIXELS);

        let summary = {
            let mut observers = ObserverChain::new();
            if self.cli.should_show_output() {
                observers.push(&mut renderer as &mut dyn Observer);
            }
            if gif.is_some() {
                observers.push(&mut recorder as &mut dyn Observer);
            }
            game.play(&mut Autopilot, &mut observers)?
        };

        if let Some(path) = gif {
            recorder.export_gif(&path, GIF_FRAME_DELAY_MS)?;
            if self.cli.should_show_output() {
                eprintln!("Saved {} frames to {}", recorder.frame_count(), path.display());
            }
        }

        if let Some(path) = snapshot {
            export_grid_as_png(game.grid(), CELL_PIXELS, &path)?;
        }

        println!("{}", describe_summary(&summary));
        Ok(())
    }

    #[allow(clippy::print_stdout)]
    fn run_analysis(&self, sizes: &[usize], trials: usize) -> Result<()> {
        let mut progress = self
            .cli
            .should_show_output()
            .then(ProgressReporter::new);

        let report = analyze_search_complexity(sizes, trials, self.cli.seed, progress.as_mut())?;
        print!("{}", report.to_table());
        Ok(())
    }
}
