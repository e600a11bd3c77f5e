//! Cave generation: noise seeding followed by cellular-automaton smoothing.

pub mod entropy;
pub mod model;

mod seeder;
mod smoother;

pub use entropy::{EntropySource, ScriptedRolls, mix_seed, seeded_rng};
pub use model::GenerationParameters;
pub use seeder::NoiseSeeder;
pub use smoother::{
    AutomatonSmoother, MAX_ITERATIONS, WALL_NEIGHBOR_THRESHOLD, iterations_from_signed,
    smooth_pass, wall_neighbor_count,
};

use crate::error::CaveError;
use crate::grid::Grid;

pub fn generate_cave(
    params: &GenerationParameters,
    rng: &mut impl EntropySource,
) -> Result<Grid, CaveError> {
    let noise = NoiseSeeder::generate(params.width, params.height, params.density, rng)?;
    Ok(AutomatonSmoother::smooth(noise, params.iterations))
}
