//! Public parameter model describing one reproducible cave.

use serde::{Deserialize, Serialize};

use crate::error::CaveError;
use crate::grid::Grid;

use super::entropy::{EntropySource, seeded_rng};
use super::generate_cave;

pub const DEFAULT_WIDTH: usize = 32;
pub const DEFAULT_HEIGHT: usize = 32;
pub const DEFAULT_DENSITY: f64 = 50.0;
pub const DEFAULT_ITERATIONS: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub width: usize,
    pub height: usize,
    /// Bias toward walls, conceptually in `[0, 100]`.
    pub density: f64,
    pub iterations: u32,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            density: DEFAULT_DENSITY,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl GenerationParameters {
    pub fn generate_with(&self, rng: &mut impl EntropySource) -> Result<Grid, CaveError> {
        generate_cave(self, rng)
    }

    /// `(self, seed)` fully determines the resulting grid.
    pub fn generate_seeded(&self, seed: u64) -> Result<Grid, CaveError> {
        generate_cave(self, &mut seeded_rng(seed))
    }
}
