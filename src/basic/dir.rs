use std::ops::Neg;
use Dir::*;

// defined in clockwise order starting at U
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Display)]
pub enum Dir {
    #[display(fmt = "up")]
    U,
    #[display(fmt = "right")]
    R,
    #[display(fmt = "down")]
    D,
    #[display(fmt = "left")]
    L,
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            U => D,
            R => L,
            D => U,
            L => R,
        }
    }
}

impl Dir {
    // clockwise order starting from U
    #[cfg(test)]
    pub fn iter() -> impl Iterator<Item = Self> {
        [U, R, D, L].iter().copied()
    }

    /// Unit step in grid coordinates, rows grow downwards
    pub fn delta(self) -> (isize, isize) {
        match self {
            U => (0, -1),
            R => (1, 0),
            D => (0, 1),
            L => (-1, 0),
        }
    }

    pub fn is_opposite(self, other: Self) -> bool {
        other == -self
    }
}

#[test]
fn test_dir_neg() {
    for (dir, expect) in [(U, D), (R, L), (D, U), (L, R)] {
        assert_eq!(-dir, expect);
        assert_eq!(-(-dir), dir);
    }
}

#[test]
fn test_opposite() {
    assert!(R.is_opposite(L));
    assert!(U.is_opposite(D));
    assert!(!U.is_opposite(L));
    assert!(!R.is_opposite(R));
}

#[test]
fn test_deltas_cancel() {
    for dir in Dir::iter() {
        let (dx, dy) = dir.delta();
        let (ndx, ndy) = (-dir).delta();
        assert_eq!((dx + ndx, dy + ndy), (0, 0));
        assert_eq!(dx.abs() + dy.abs(), 1);
    }
}
