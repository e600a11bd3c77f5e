//! Noise seeding: one independent Wall/Floor roll per cell.

use crate::error::CaveError;
use crate::grid::{Grid, checked_area};
use crate::types::Cell;

use super::entropy::EntropySource;

pub struct NoiseSeeder;

impl NoiseSeeder {
    /// Fills a `width x height` grid row by row. A cell is `Wall` when its roll
    /// is at or below `density`.
    pub fn generate(
        width: usize,
        height: usize,
        density: f64,
        rng: &mut impl EntropySource,
    ) -> Result<Grid, CaveError> {
        let area = checked_area(width, height)?;
        if !density.is_finite() {
            return Err(CaveError::InvalidDensity(density));
        }

        let mut cells = Vec::with_capacity(area);
        for _ in 0..area {
            let roll = rng.next_roll()?;
            cells.push(if roll > density { Cell::Floor } else { Cell::Wall });
        }
        let grid = Grid::from_cells(width, height, cells)?;

        tracing::debug!(
            width,
            height,
            density,
            walls = grid.count(Cell::Wall),
            "seeded noise grid"
        );
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::MAX_SIDE;
    use crate::mapgen::entropy::{ScriptedRolls, seeded_rng};
    use crate::types::Pos;

    #[test]
    fn full_density_seeds_only_walls() {
        let mut rng = seeded_rng(1);
        let grid = NoiseSeeder::generate(100, 100, 100.0, &mut rng).expect("seed");
        assert_eq!(grid.count(Cell::Wall), 100 * 100);
    }

    #[test]
    fn zero_density_seeds_only_floor() {
        let mut rng = seeded_rng(2);
        let grid = NoiseSeeder::generate(100, 100, 0.0, &mut rng).expect("seed");
        assert_eq!(grid.count(Cell::Floor), 100 * 100);
    }

    #[test]
    fn roll_equal_to_density_is_wall() {
        let mut rolls = ScriptedRolls::new(vec![50.0, 50.000_001, 1.0, 99.9]);
        let grid = NoiseSeeder::generate(2, 2, 50.0, &mut rolls).expect("seed");
        assert_eq!(grid.get(Pos::new(0, 0)), Some(Cell::Wall));
        assert_eq!(grid.get(Pos::new(0, 1)), Some(Cell::Floor));
        assert_eq!(grid.get(Pos::new(1, 0)), Some(Cell::Wall));
        assert_eq!(grid.get(Pos::new(1, 1)), Some(Cell::Floor));
    }

    #[test]
    fn rolls_fill_row_major() {
        let mut rolls = ScriptedRolls::new(vec![1.0, 90.0, 90.0, 90.0, 90.0, 1.0]);
        let grid = NoiseSeeder::generate(3, 2, 10.0, &mut rolls).expect("seed");
        assert_eq!(grid.row_strings(), vec!["#..", "..#"]);
    }

    #[test]
    fn half_density_lands_near_half_walls() {
        let mut rng = seeded_rng(42);
        let grid = NoiseSeeder::generate(100, 100, 50.0, &mut rng).expect("seed");
        let ratio = grid.wall_ratio();
        // Rolls span [1, 100), so the expected wall share is 49/99.
        assert!((0.45..0.54).contains(&ratio), "wall ratio {ratio}");
    }

    #[test]
    fn zero_dimensions_fail_before_drawing() {
        let mut rolls = ScriptedRolls::new(vec![1.0; 4]);
        let err = NoiseSeeder::generate(0, 2, 50.0, &mut rolls).expect_err("zero width");
        assert_eq!(err, CaveError::InvalidDimension { width: 0, height: 2 });
        assert_eq!(rolls.remaining(), 4);
    }

    #[test]
    fn non_finite_density_is_rejected() {
        let mut rng = seeded_rng(3);
        let err = NoiseSeeder::generate(4, 4, f64::NAN, &mut rng).expect_err("nan density");
        assert!(matches!(err, CaveError::InvalidDensity(d) if d.is_nan()));

        for density in [f64::INFINITY, f64::NEG_INFINITY] {
            let err = NoiseSeeder::generate(4, 4, density, &mut rng).expect_err("infinite density");
            assert_eq!(err, CaveError::InvalidDensity(density));
        }
    }

    #[test]
    fn overflowing_dimensions_fail_before_drawing() {
        let mut rolls = ScriptedRolls::new(vec![1.0; 4]);
        let width = 1_usize << 63;
        let err = NoiseSeeder::generate(width, 2, 50.0, &mut rolls).expect_err("overflowing area");
        assert_eq!(err, CaveError::InvalidDimension { width, height: 2 });

        let err = NoiseSeeder::generate(MAX_SIDE + 1, 1, 50.0, &mut rolls).expect_err("side too wide");
        assert_eq!(err, CaveError::InvalidDimension { width: MAX_SIDE + 1, height: 1 });
        assert_eq!(rolls.remaining(), 4);
    }

    #[test]
    fn exhausted_source_yields_no_partial_grid() {
        let mut rolls = ScriptedRolls::new(vec![1.0; 5]);
        let err = NoiseSeeder::generate(3, 2, 50.0, &mut rolls).expect_err("too few rolls");
        assert_eq!(err, CaveError::ExhaustedEntropySource { drawn: 5 });
    }
}
