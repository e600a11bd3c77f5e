//! Generation parameter adjustment: unit steps, clamped before they reach the core.

use cavegen::MAX_ITERATIONS;
use cavegen::model::{DEFAULT_DENSITY, DEFAULT_ITERATIONS};

pub const MIN_DENSITY: f64 = 0.0;
pub const MAX_DENSITY: f64 = 100.0;
pub const DENSITY_STEP: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamAction {
    MoreIterations,
    FewerIterations,
    MoreDensity,
    LessDensity,
    Reseed,
    Reset,
}

pub fn clamp_density(value: f64) -> f64 {
    if !value.is_finite() {
        return DEFAULT_DENSITY;
    }
    value.clamp(MIN_DENSITY, MAX_DENSITY)
}

pub fn clamp_iterations(value: i64) -> u32 {
    value.clamp(0, i64::from(MAX_ITERATIONS)) as u32
}

pub fn increase_density(current: f64) -> f64 {
    clamp_density(current + DENSITY_STEP)
}

pub fn decrease_density(current: f64) -> f64 {
    clamp_density(current - DENSITY_STEP)
}

pub fn increase_iterations(current: u32) -> u32 {
    clamp_iterations(i64::from(current) + 1)
}

pub fn decrease_iterations(current: u32) -> u32 {
    clamp_iterations(i64::from(current) - 1)
}

pub fn reset_density() -> f64 {
    DEFAULT_DENSITY
}

pub fn reset_iterations() -> u32 {
    DEFAULT_ITERATIONS
}
