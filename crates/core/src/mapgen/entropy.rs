//! Uniform roll sources for noise seeding, plus deterministic seed mixing.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

use crate::error::CaveError;

pub const ROLL_MIN: f64 = 1.0;
pub const ROLL_MAX: f64 = 100.0;

/// Supplies independent uniform rolls in `[ROLL_MIN, ROLL_MAX)`.
pub trait EntropySource {
    fn next_roll(&mut self) -> Result<f64, CaveError>;
}

impl EntropySource for ChaCha8Rng {
    fn next_roll(&mut self) -> Result<f64, CaveError> {
        Ok(roll_from_bits(self.next_u64()))
    }
}

/// Replays a fixed roll sequence, then reports exhaustion. Stands in for any
/// bounded external generator.
#[derive(Clone, Debug)]
pub struct ScriptedRolls {
    rolls: Vec<f64>,
    cursor: usize,
}

impl ScriptedRolls {
    pub fn new(rolls: Vec<f64>) -> Self {
        Self { rolls, cursor: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len() - self.cursor
    }
}

impl EntropySource for ScriptedRolls {
    fn next_roll(&mut self) -> Result<f64, CaveError> {
        let Some(&roll) = self.rolls.get(self.cursor) else {
            return Err(CaveError::ExhaustedEntropySource { drawn: self.cursor });
        };
        self.cursor += 1;
        Ok(roll)
    }
}

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Maps 64 random bits onto `[ROLL_MIN, ROLL_MAX)` using the top 53 bits.
pub fn roll_from_bits(bits: u64) -> f64 {
    let unit = (bits >> 11) as f64 / (1_u64 << 53) as f64;
    ROLL_MIN + (ROLL_MAX - ROLL_MIN) * unit
}

pub fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
