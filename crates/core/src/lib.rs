pub mod error;
pub mod grid;
pub mod mapgen;
pub mod types;

pub use error::CaveError;
pub use grid::{Grid, MAX_SIDE, format_snapshot_hash};
pub use mapgen::*;
pub use types::*;
