//! Fixed-size row-major cell grid plus its canonical byte and text encodings.

use xxhash_rust::xxh3::xxh3_64;

use crate::error::CaveError;
use crate::types::{Cell, Pos};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn filled(width: usize, height: usize, cell: Cell) -> Result<Self, CaveError> {
        let area = checked_area(width, height)?;
        Ok(Self { width, height, cells: vec![cell; area] })
    }

    /// Builds a grid from a row-major cell vector. Fails when the vector does not
    /// cover `width * height` cells exactly.
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, CaveError> {
        if cells.len() != checked_area(width, height)? {
            return Err(CaveError::InvalidDimension { width, height });
        }
        Ok(Self { width, height, cells })
    }

    /// Parses `#`/`.` glyph rows, one string per row.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, CaveError> {
        let Some(first) = rows.first() else {
            return Err(CaveError::InvalidGridText { line: 0, message: "no rows".to_string() });
        };
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(CaveError::InvalidGridText { line: 0, message: "empty row".to_string() });
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (line, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let before = cells.len();
            for glyph in row.chars() {
                let cell = Cell::from_glyph(glyph).ok_or_else(|| CaveError::InvalidGridText {
                    line,
                    message: format!("unknown glyph '{glyph}'"),
                })?;
                cells.push(cell);
            }
            let row_width = cells.len() - before;
            if row_width != width {
                return Err(CaveError::InvalidGridText {
                    line,
                    message: format!("row has {row_width} cells, expected {width}"),
                });
            }
        }

        let height = rows.len();
        checked_area(width, height)?;
        Ok(Self { width, height, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.height
            && (pos.col as usize) < self.width
    }

    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.in_bounds(pos).then(|| self.cells[self.index(pos)])
    }

    /// Reads a cell, treating everything outside the grid as solid rock.
    pub fn cell_or_wall(&self, pos: Pos) -> Cell {
        self.get(pos).unwrap_or(Cell::Wall)
    }

    /// Writes a cell. Returns `false`, leaving the grid untouched, when `pos`
    /// lies outside it.
    pub fn set(&mut self, pos: Pos, cell: Cell) -> bool {
        if !self.in_bounds(pos) {
            return false;
        }
        let idx = self.index(pos);
        self.cells[idx] = cell;
        true
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn wall_ratio(&self) -> f64 {
        self.count(Cell::Wall) as f64 / self.cells.len() as f64
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    pub fn row_strings(&self) -> Vec<String> {
        self.rows().map(|row| row.iter().map(|cell| cell.glyph()).collect()).collect()
    }

    pub fn to_text(&self) -> String {
        self.row_strings().join("\n")
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.cells.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        bytes.extend(self.cells.iter().map(|cell| cell.canonical_byte()));
        bytes
    }

    pub fn snapshot_hash(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.row as usize) * self.width + (pos.col as usize)
    }
}

/// Largest side a grid may have; positions are addressed with `i32` offsets.
pub const MAX_SIDE: usize = i32::MAX as usize;

/// Validates a `width x height` request and returns its cell count. Zero sides,
/// sides beyond `MAX_SIDE` and areas that overflow `usize` are all rejected.
pub(crate) fn checked_area(width: usize, height: usize) -> Result<usize, CaveError> {
    let invalid = || CaveError::InvalidDimension { width, height };
    if width == 0 || height == 0 || width > MAX_SIDE || height > MAX_SIDE {
        return Err(invalid());
    }
    width.checked_mul(height).ok_or_else(invalid)
}

/// Formats a snapshot hash as `0x` plus exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_area_grids_are_rejected() {
        assert_eq!(
            Grid::filled(0, 4, Cell::Floor),
            Err(CaveError::InvalidDimension { width: 0, height: 4 })
        );
        assert_eq!(
            Grid::filled(4, 0, Cell::Floor),
            Err(CaveError::InvalidDimension { width: 4, height: 0 })
        );
    }

    #[test]
    fn out_of_bounds_reads_as_wall() {
        let grid = Grid::filled(3, 2, Cell::Floor).expect("grid");
        assert_eq!(grid.cell_or_wall(Pos::new(-1, 0)), Cell::Wall);
        assert_eq!(grid.cell_or_wall(Pos::new(0, -1)), Cell::Wall);
        assert_eq!(grid.cell_or_wall(Pos::new(2, 0)), Cell::Wall);
        assert_eq!(grid.cell_or_wall(Pos::new(0, 3)), Cell::Wall);
        assert_eq!(grid.cell_or_wall(Pos::new(1, 2)), Cell::Floor);
    }

    #[test]
    fn text_rows_parse_and_render_identically() {
        let rows = ["#..#", "....", "##.#"];
        let grid = Grid::from_rows(&rows).expect("valid rows");
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.get(Pos::new(2, 1)), Some(Cell::Wall));
        assert_eq!(grid.to_text(), "#..#\n....\n##.#");
    }

    #[test]
    fn ragged_rows_report_offending_line() {
        let err = Grid::from_rows(&["###", "##"]).expect_err("ragged rows");
        assert!(matches!(err, CaveError::InvalidGridText { line: 1, .. }), "got {err:?}");
    }

    #[test]
    fn unknown_glyph_is_rejected() {
        let err = Grid::from_rows(&["#x#"]).expect_err("bad glyph");
        assert!(err.to_string().contains("unknown glyph"), "got {err}");
    }

    #[test]
    fn canonical_bytes_prefix_dimensions() {
        let grid = Grid::from_rows(&["#.", ".#"]).expect("grid");
        assert_eq!(grid.canonical_bytes(), vec![2, 0, 0, 0, 2, 0, 0, 0, 0, 1, 1, 0]);
    }

    #[test]
    fn snapshot_hash_tracks_cell_changes() {
        let mut grid = Grid::filled(5, 5, Cell::Floor).expect("grid");
        let baseline = grid.snapshot_hash();
        assert_eq!(baseline, grid.clone().snapshot_hash());
        assert!(grid.set(Pos::new(2, 2), Cell::Wall));
        assert_ne!(baseline, grid.snapshot_hash());
    }

    #[test]
    fn out_of_bounds_set_reports_failure_and_changes_nothing() {
        let mut grid = Grid::filled(3, 3, Cell::Floor).expect("grid");
        let before = grid.clone();
        assert!(!grid.set(Pos::new(3, 0), Cell::Wall));
        assert!(!grid.set(Pos::new(0, -1), Cell::Wall));
        assert_eq!(grid, before);
    }

    #[test]
    fn overflowing_area_is_rejected() {
        let width = 1_usize << 63;
        assert_eq!(
            Grid::from_cells(width, 2, Vec::new()),
            Err(CaveError::InvalidDimension { width, height: 2 })
        );
        assert_eq!(
            Grid::filled(usize::MAX, usize::MAX, Cell::Wall),
            Err(CaveError::InvalidDimension { width: usize::MAX, height: usize::MAX })
        );
    }

    #[test]
    fn sides_beyond_i32_range_are_rejected() {
        let width = MAX_SIDE + 1;
        assert_eq!(
            Grid::from_cells(width, 1, Vec::new()),
            Err(CaveError::InvalidDimension { width, height: 1 })
        );
        assert_eq!(checked_area(MAX_SIDE, 1), Ok(MAX_SIDE));
    }

    #[test]
    fn snapshot_hash_formats_as_sixteen_hex_digits() {
        assert_eq!(format_snapshot_hash(0), "0x0000000000000000");
        assert_eq!(format_snapshot_hash(255), "0x00000000000000ff");
        assert_eq!(format_snapshot_hash(u64::MAX), "0xffffffffffffffff");
    }

    #[test]
    fn from_cells_rejects_length_mismatch() {
        let err = Grid::from_cells(3, 3, vec![Cell::Wall; 8]).expect_err("short buffer");
        assert_eq!(err, CaveError::InvalidDimension { width: 3, height: 3 });
    }
}
