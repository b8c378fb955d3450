//! Injectable candy sources for grid generation and refill
//!
//! Every random draw in the engine goes through [`SymbolSource`] so tests can
//! replace the seeded generator with a scripted sequence and assert exact grids.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::CANDY_COUNT;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::Candy;

/// Producer of candy symbols
pub trait SymbolSource {
    /// Draw the next candy
    fn next_candy(&mut self) -> Candy;
}

impl<S: SymbolSource + ?Sized> SymbolSource for &mut S {
    fn next_candy(&mut self) -> Candy {
        (**self).next_candy()
    }
}

/// Uniform candy draws from a seeded generator
///
/// Cloning snapshots the generator state, so a clone replays exactly the
/// draws its parent would make next.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Create a deterministic source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl SymbolSource for SeededSource {
    fn next_candy(&mut self) -> Candy {
        Candy::from_index(self.rng.random_range(0..CANDY_COUNT))
    }
}

/// Replays a fixed sequence of candies, wrapping around at the end
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    sequence: Vec<Candy>,
    cursor: usize,
    drawn: usize,
}

impl ScriptedSource {
    /// Create a source cycling through `sequence`
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence is empty
    pub fn new(sequence: Vec<Candy>) -> Result<Self> {
        if sequence.is_empty() {
            return Err(invalid_parameter(
                "sequence",
                &"[]",
                &"a scripted source needs at least one candy",
            ));
        }
        Ok(Self {
            sequence,
            cursor: 0,
            drawn: 0,
        })
    }

    /// Create a source from glyphs such as `"ABCDE"`, ignoring whitespace
    ///
    /// # Errors
    ///
    /// Returns an error if a glyph is not a candy or no glyph is given
    pub fn from_glyphs(glyphs: &str) -> Result<Self> {
        let sequence = glyphs
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|glyph| {
                Candy::from_glyph(glyph)
                    .ok_or_else(|| invalid_parameter("glyphs", &glyph, &"not a candy glyph"))
            })
            .collect::<Result<Vec<Candy>>>()?;
        Self::new(sequence)
    }

    /// Total number of candies handed out so far
    pub const fn drawn(&self) -> usize {
        self.drawn
    }
}

impl SymbolSource for ScriptedSource {
    fn next_candy(&mut self) -> Candy {
        let candy = self
            .sequence
            .get(self.cursor)
            .copied()
            .unwrap_or(Candy::A);
        self.cursor = (self.cursor + 1) % self.sequence.len();
        self.drawn += 1;
        candy
    }
}
