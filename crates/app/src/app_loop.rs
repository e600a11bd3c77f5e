use cavegen::{CaveError, Cell, GenerationParameters, Grid, Pos, format_snapshot_hash};

use crate::navigation::{Direction, spawn_point, step};
use crate::params::{
    ParamAction, decrease_density, decrease_iterations, increase_density, increase_iterations,
    reset_density, reset_iterations,
};

/// Inputs gathered for a single rendered frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewerInput {
    pub actions: Vec<ParamAction>,
    pub moves: Vec<Direction>,
}

/// What changed during one `tick`, so the caller knows whether to persist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub regenerated: bool,
    pub parameters_changed: bool,
}

/// Session state: the run seed, the parameters, and the grid they produced.
/// The grid is only ever replaced by a fully generated one.
pub struct ViewerState {
    seed: u64,
    params: GenerationParameters,
    grid: Grid,
    player: Option<Pos>,
    last_error: Option<CaveError>,
}

impl ViewerState {
    pub fn new(seed: u64, params: GenerationParameters) -> Result<Self, CaveError> {
        let grid = params.generate_seeded(seed)?;
        let player = spawn_point(&grid);
        tracing::info!(
            seed,
            width = params.width,
            height = params.height,
            density = params.density,
            iterations = params.iterations,
            "generated initial cave"
        );
        Ok(Self { seed, params, grid, player, last_error: None })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn params(&self) -> &GenerationParameters {
        &self.params
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> Option<Pos> {
        self.player
    }

    pub fn last_error(&self) -> Option<&CaveError> {
        self.last_error.as_ref()
    }

    /// Applies this frame's input. Parameter actions regenerate from noise with
    /// the current seed; `Reseed` asks `fresh_seed` for a new one.
    pub fn tick(&mut self, input: &ViewerInput, mut fresh_seed: impl FnMut() -> u64) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        let mut next_params = self.params;
        let mut next_seed = self.seed;

        for action in &input.actions {
            match action {
                ParamAction::MoreIterations => {
                    next_params.iterations = increase_iterations(next_params.iterations);
                }
                ParamAction::FewerIterations => {
                    next_params.iterations = decrease_iterations(next_params.iterations);
                }
                ParamAction::MoreDensity => next_params.density = increase_density(next_params.density),
                ParamAction::LessDensity => next_params.density = decrease_density(next_params.density),
                ParamAction::Reseed => next_seed = fresh_seed(),
                ParamAction::Reset => {
                    next_params.density = reset_density();
                    next_params.iterations = reset_iterations();
                }
            }
        }

        if next_params != self.params || next_seed != self.seed {
            outcome.parameters_changed = next_params != self.params;
            outcome.regenerated = self.regenerate(next_seed, next_params);
        }

        for &direction in &input.moves {
            if let Some(player) = self.player {
                self.player = Some(step(&self.grid, player, direction));
            }
        }

        outcome
    }

    fn regenerate(&mut self, seed: u64, params: GenerationParameters) -> bool {
        match params.generate_seeded(seed) {
            Ok(grid) => {
                tracing::debug!(
                    seed,
                    density = params.density,
                    iterations = params.iterations,
                    walls = grid.count(Cell::Wall),
                    "regenerated cave"
                );
                self.player = spawn_point(&grid);
                self.grid = grid;
                self.seed = seed;
                self.params = params;
                self.last_error = None;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "regeneration failed; keeping previous cave");
                self.last_error = Some(err);
                false
            }
        }
    }
}

pub fn status_line(state: &ViewerState) -> String {
    let params = state.params();
    let grid = state.grid();
    let mut line = format!(
        "seed={} density={:.0} iterations={} walls={:.1}% hash={}",
        crate::format_seed(state.seed()),
        params.density,
        params.iterations,
        grid.wall_ratio() * 100.0,
        format_snapshot_hash(grid.snapshot_hash()),
    );
    if let Some(err) = state.last_error() {
        line.push_str(&format!("  error: {err}"));
    }
    line
}
