//! Cellular-automaton smoothing over a double-buffered grid.
//!
//! Every pass reads neighbor counts from the snapshot left by the previous pass
//! and writes into a separate back buffer; the buffers swap between passes, so
//! no cell ever sees a value rewritten during its own pass. Positions outside
//! the grid count as walls, which seals the map edges over repeated passes.

use std::mem;

use crate::error::CaveError;
use crate::grid::Grid;
use crate::types::{Cell, Pos};

/// A cell becomes a wall only when strictly more than this many of its eight
/// neighbors are walls.
pub const WALL_NEIGHBOR_THRESHOLD: u8 = 4;

/// Ceiling used by input layers when clamping a requested pass count.
pub const MAX_ITERATIONS: u32 = 100;

const MOORE_OFFSETS: [(i32, i32); 8] =
    [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

pub struct AutomatonSmoother;

impl AutomatonSmoother {
    pub fn smooth(grid: Grid, iterations: u32) -> Grid {
        if iterations == 0 {
            return grid;
        }

        let mut front = grid;
        let mut back = front.clone();
        for pass in 0..iterations {
            smooth_pass(&front, &mut back);
            mem::swap(&mut front, &mut back);
            tracing::trace!(pass, walls = front.count(Cell::Wall), "smoothing pass committed");
        }

        tracing::debug!(
            width = front.width(),
            height = front.height(),
            iterations,
            walls = front.count(Cell::Wall),
            "smoothed grid"
        );
        front
    }
}

/// Validates a pass count coming from a signed surface such as a CLI flag.
pub fn iterations_from_signed(iterations: i64) -> Result<u32, CaveError> {
    u32::try_from(iterations).map_err(|_| CaveError::InvalidIterationCount(iterations))
}

/// Runs one pass: every cell of `next` is recomputed from `snapshot` alone.
pub fn smooth_pass(snapshot: &Grid, next: &mut Grid) {
    debug_assert_eq!(
        (snapshot.width(), snapshot.height()),
        (next.width(), next.height()),
        "smoothing buffers must share dimensions"
    );
    let width = snapshot.width();
    let cells = next.cells_mut();
    for row in 0..snapshot.height() {
        for col in 0..width {
            let pos = Pos::new(row as i32, col as i32);
            cells[row * width + col] = next_cell(wall_neighbor_count(snapshot, pos));
        }
    }
}

/// Counts walls in the Moore neighborhood of `pos`, excluding `pos` itself.
pub fn wall_neighbor_count(grid: &Grid, pos: Pos) -> u8 {
    MOORE_OFFSETS
        .iter()
        .filter(|&&(d_row, d_col)| grid.cell_or_wall(pos.offset(d_row, d_col)).is_wall())
        .count() as u8
}

fn next_cell(wall_neighbors: u8) -> Cell {
    if wall_neighbors > WALL_NEIGHBOR_THRESHOLD { Cell::Wall } else { Cell::Floor }
}
