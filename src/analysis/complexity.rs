//! Empirical timing of the best-move search
//!
//! Times the searcher on random (unstabilized) grids of increasing size and
//! fits a power law to the means. The search is expected to grow close to
//! the fifth power of the dimension.

use std::time::{Duration, Instant};

use crate::algorithm::generation::generate_grid;
use crate::algorithm::search::search;
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressReporter;
use crate::math::random::SeededSource;
use crate::math::regression::log_log_slope;

/// Mean search time for one grid size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSample {
    /// Grid dimension
    pub dimension: usize,
    /// Number of grids searched
    pub trials: usize,
    /// Mean wall-clock time of one search
    pub mean: Duration,
}

/// Timings for every requested size plus the fitted growth exponent
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexityReport {
    /// One sample per size, in the order requested
    pub samples: Vec<TimingSample>,
    /// Slope of log(mean) against log(dimension), when it can be fitted
    pub exponent: Option<f64>,
}

impl ComplexityReport {
    /// Fit the growth exponent over a set of samples
    pub fn from_samples(samples: Vec<TimingSample>) -> Self {
        let points: Vec<(f64, f64)> = samples
            .iter()
            .map(|sample| (sample.dimension as f64, sample.mean.as_secs_f64()))
            .collect();
        let exponent = log_log_slope(&points);
        Self { samples, exponent }
    }

    /// Render the samples as a two-column table
    pub fn to_table(&self) -> String {
        let mut out = String::from("Size (n)   Mean search time (ns)\n");
        for sample in &self.samples {
            out.push_str(&format!(
                "{:>3} x {:<3}  {:>12}\n",
                sample.dimension,
                sample.dimension,
                sample.mean.as_nanos()
            ));
        }
        match self.exponent {
            Some(exponent) => {
                out.push_str(&format!("Fitted growth: n^{exponent:.2} (expected about n^5)\n"));
            }
            None => out.push_str("Not enough sizes to fit a growth exponent\n"),
        }
        out
    }
}

/// Average search time over `trials` random grids of one size
///
/// # Errors
///
/// Returns an error if `trials` is zero, the dimension is unsupported or a
/// search fails
pub fn measure_search_time(
    dimension: usize,
    trials: usize,
    source: &mut SeededSource,
    progress: Option<&ProgressReporter>,
) -> Result<TimingSample> {
    let trial_count = u32::try_from(trials)
        .ok()
        .filter(|&count| count > 0)
        .ok_or_else(|| invalid_parameter("trials", &trials, &"must be between 1 and u32::MAX"))?;

    let mut total = Duration::ZERO;
    for _ in 0..trials {
        let grid = generate_grid(dimension, source)?;

        let start = Instant::now();
        let best = search(&grid, &*source)?;
        total += start.elapsed();
        std::hint::black_box(best);

        if let Some(reporter) = progress {
            reporter.complete_trial();
        }
    }

    Ok(TimingSample {
        dimension,
        trials,
        mean: total / trial_count,
    })
}

/// Time the searcher for every size and fit the growth exponent
///
/// # Errors
///
/// Returns an error if no sizes are given, `trials` is zero, a size is
/// unsupported or a search fails
pub fn analyze_search_complexity(
    sizes: &[usize],
    trials: usize,
    seed: u64,
    mut progress: Option<&mut ProgressReporter>,
) -> Result<ComplexityReport> {
    if sizes.is_empty() {
        return Err(invalid_parameter("sizes", &"[]", &"at least one size is required"));
    }

    if let Some(ref mut reporter) = progress {
        reporter.initialize(sizes.len());
    }

    let mut source = SeededSource::new(seed);
    let mut samples = Vec::with_capacity(sizes.len());

    for &dimension in sizes {
        let reporter = progress.as_deref();
        if let Some(reporter) = reporter {
            reporter.start_size(dimension, trials);
        }

        let sample = measure_search_time(dimension, trials, &mut source, reporter)?;

        if let Some(reporter) = reporter {
            reporter.complete_size(sample.mean);
        }
        samples.push(sample);
    }

    if let Some(reporter) = progress {
        reporter.finish();
    }

    Ok(ComplexityReport::from_samples(samples))
}
