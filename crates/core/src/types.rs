use serde::{Deserialize, Serialize};

/// Signed grid coordinate. Neighborhood arithmetic happens here so that stepping
/// off row or column 0 yields `-1` instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self { row: self.row + d_row, col: self.col + d_col }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Floor,
}

impl Cell {
    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Floor => '.',
        }
    }

    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '#' => Some(Self::Wall),
            '.' => Some(Self::Floor),
            _ => None,
        }
    }

    pub const fn canonical_byte(self) -> u8 {
        match self {
            Self::Wall => 0,
            Self::Floor => 1,
        }
    }

    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }
}
