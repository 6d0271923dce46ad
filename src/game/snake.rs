use crate::basic::{Dir, GridPoint};
use std::collections::VecDeque;

/// Body of the snake, head first
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    pub cells: VecDeque<GridPoint>,
    pub dir: Dir,
}

impl Snake {
    /// A straight snake of `len` cells with the rest of the body trailing
    /// behind the head, opposite to `dir`
    pub fn new(head: GridPoint, dir: Dir, len: usize) -> Self {
        assert!(len >= 1, "snake must have at least a head");
        let cells = (0..len).map(|i| head.translate(-dir, i)).collect();
        Self { cells, dir }
    }

    pub fn head(&self) -> GridPoint {
        self.cells[0]
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, point: GridPoint) -> bool {
        self.cells.contains(&point)
    }

    /// Where the head will be after the next step in the current direction
    pub fn next_head(&self) -> GridPoint {
        self.head().translate(self.dir, 1)
    }

    /// Prepend a new head, drop the tail unless growing
    pub fn advance(&mut self, grow: bool) {
        let new_head = self.next_head();
        self.cells.push_front(new_head);
        if !grow {
            self.cells.pop_back();
        }
    }

    /// Head first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = GridPoint> + ExactSizeIterator + '_ {
        self.cells.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(col: isize, row: isize) -> GridPoint {
        GridPoint { col, row }
    }

    #[test]
    fn test_new_trails_behind_head() {
        let snake = Snake::new(p(12, 9), Dir::R, 3);
        assert_eq!(snake.iter().collect::<Vec<_>>(), [p(12, 9), p(11, 9), p(10, 9)]);

        let snake = Snake::new(p(4, 4), Dir::U, 2);
        assert_eq!(snake.iter().collect::<Vec<_>>(), [p(4, 4), p(4, 5)]);
    }

    #[test]
    fn test_advance() {
        let mut snake = Snake::new(p(5, 5), Dir::R, 3);

        snake.advance(false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), p(6, 5));
        assert!(!snake.contains(p(3, 5)));

        snake.dir = Dir::D;
        snake.advance(true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.iter().collect::<Vec<_>>(), [p(6, 6), p(6, 5), p(5, 5), p(4, 5)]);
    }
}
