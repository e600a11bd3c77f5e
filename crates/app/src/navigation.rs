//! Player placement and movement over a generated cave.

use cavegen::{Cell, Grid, Pos};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (-1, 0),
            Self::South => (1, 0),
            Self::West => (0, -1),
            Self::East => (0, 1),
        }
    }
}

/// Nearest floor cell to the grid center, ties broken by lowest row then column.
/// `None` when the cave is solid rock.
pub fn spawn_point(grid: &Grid) -> Option<Pos> {
    let desired = Pos::new((grid.height() / 2) as i32, (grid.width() / 2) as i32);
    let mut best = None;
    let mut best_distance = u32::MAX;
    for row in 0..grid.height() as i32 {
        for col in 0..grid.width() as i32 {
            let pos = Pos::new(row, col);
            if grid.get(pos) != Some(Cell::Floor) {
                continue;
            }
            let distance = pos.row.abs_diff(desired.row) + pos.col.abs_diff(desired.col);
            if distance < best_distance {
                best = Some(pos);
                best_distance = distance;
            }
        }
    }
    best
}

/// Moves one cell unless the target is a wall or outside the grid.
pub fn step(grid: &Grid, from: Pos, direction: Direction) -> Pos {
    let (d_row, d_col) = direction.delta();
    let target = from.offset(d_row, d_col);
    if grid.get(target) == Some(Cell::Floor) { target } else { from }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(rows).expect("valid test grid")
    }

    #[test]
    fn spawn_prefers_center_floor() {
        let cave = grid(&["#####", "#...#", "#...#", "#####"]);
        assert_eq!(spawn_point(&cave), Some(Pos::new(2, 2)));
    }

    #[test]
    fn spawn_prefers_lowest_row_then_col_for_ties() {
        let cave = grid(&["#####", "##.##", "#.#.#", "#####", "#####"]);
        assert_eq!(spawn_point(&cave), Some(Pos::new(1, 2)));
    }

    #[test]
    fn solid_rock_has_no_spawn() {
        let cave = Grid::filled(4, 4, Cell::Wall).expect("grid");
        assert_eq!(spawn_point(&cave), None);
    }

    #[test]
    fn walls_and_edges_block_movement() {
        let cave = grid(&["..#", "..."]);
        let origin = Pos::new(0, 1);
        assert_eq!(step(&cave, origin, Direction::East), origin);
        assert_eq!(step(&cave, origin, Direction::North), origin);
        assert_eq!(step(&cave, origin, Direction::West), Pos::new(0, 0));
        assert_eq!(step(&cave, origin, Direction::South), Pos::new(1, 1));
    }
}
