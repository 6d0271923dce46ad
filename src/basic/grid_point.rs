use super::dir::Dir;
use crate::basic::{CellDim, Point};
use std::{
    cmp::Ordering,
    fmt::{Debug, Error, Formatter},
};

// INVARIANT: row 0 is the top of the board
#[derive(Eq, PartialEq, Copy, Clone, Add, Sub, Hash)]
pub struct GridPoint {
    pub col: isize,
    pub row: isize,
}

/// Size of the board in cells, stored as a point one past the bottom-right cell
pub type GridDim = GridPoint;

impl GridPoint {
    pub fn to_point(self, cell_dim: CellDim) -> Point {
        Point {
            x: self.col as f32 * cell_dim.side,
            y: self.row as f32 * cell_dim.side,
        }
    }

    #[must_use]
    pub fn translate(self, dir: Dir, dist: usize) -> Self {
        let (dc, dr) = dir.delta();
        let dist = dist as isize;
        Self {
            col: self.col + dc * dist,
            row: self.row + dr * dist,
        }
    }
}

impl GridDim {
    pub fn contains(self, point: GridPoint) -> bool {
        (0..self.col).contains(&point.col) && (0..self.row).contains(&point.row)
    }

    pub fn area(self) -> usize {
        (self.col * self.row) as usize
    }

    pub fn center(self) -> GridPoint {
        GridPoint {
            col: self.col / 2,
            row: self.row / 2,
        }
    }

    /// Position of a cell in row-major order
    pub fn linear_index(self, point: GridPoint) -> usize {
        (point.row * self.col + point.col) as usize
    }

    pub fn from_linear_index(self, idx: usize) -> GridPoint {
        GridPoint {
            col: idx as isize % self.col,
            row: idx as isize / self.col,
        }
    }
}

impl Debug for GridPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.col, self.row)
    }
}

impl PartialOrd for GridPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// row-major, matches linear_index
impl Ord for GridPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.row.cmp(&other.row) {
            Ordering::Equal => self.col.cmp(&other.col),
            ord => ord,
        }
    }
}

#[test]
fn test_translate() {
    use Dir::*;
    let p = GridPoint { col: 5, row: 5 };
    [
        (U, 1, (5, 4)),
        (D, 1, (5, 6)),
        (L, 1, (4, 5)),
        (R, 1, (6, 5)),
        (R, 3, (8, 5)),
        (U, 0, (5, 5)),
    ]
    .iter()
    .for_each(|&(dir, dist, (col, row))| {
        assert_eq!(p.translate(dir, dist), GridPoint { col, row }, "{dir:?} x{dist}");
    });
}

#[test]
fn test_contains() {
    let dim = GridDim { col: 25, row: 18 };
    assert!(dim.contains(GridPoint { col: 0, row: 0 }));
    assert!(dim.contains(GridPoint { col: 24, row: 17 }));
    assert!(!dim.contains(GridPoint { col: 25, row: 0 }));
    assert!(!dim.contains(GridPoint { col: 0, row: 18 }));
    assert!(!dim.contains(GridPoint { col: -1, row: 3 }));
    assert!(!dim.contains(GridPoint { col: 3, row: -1 }));
}

#[test]
fn test_linear_index_matches_ordering() {
    let dim = GridDim { col: 7, row: 4 };
    let mut last = None;
    for idx in 0..dim.area() {
        let point = dim.from_linear_index(idx);
        assert!(dim.contains(point));
        assert_eq!(dim.linear_index(point), idx);
        if let Some(prev) = last {
            assert!(prev < point);
        }
        last = Some(point);
    }
}
