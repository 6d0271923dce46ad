use crate::basic::GridDim;
use static_assertions::const_assert;
use std::time::Duration;

pub type Score = u32;

pub const BOARD_COLS: isize = 25;
pub const BOARD_ROWS: isize = 18;
pub const INITIAL_LEN: usize = 3;
pub const FOOD_SCORE: Score = 10;

pub const INITIAL_INTERVAL_MILLIS: u64 = 200;
pub const INTERVAL_STEP_MILLIS: u64 = 6;
pub const MIN_INTERVAL_MILLIS: u64 = 40;

// the starting snake trails left from the center and must stay on the board
const_assert!(INITIAL_LEN >= 1);
const_assert!(INITIAL_LEN as isize <= BOARD_COLS / 2 + 1);
const_assert!(MIN_INTERVAL_MILLIS > 0);
const_assert!(MIN_INTERVAL_MILLIS <= INITIAL_INTERVAL_MILLIS);

/// Fixed rules of a game, the defaults are the only values the game ships with
#[derive(Clone, Debug)]
pub struct Prefs {
    pub board_dim: GridDim,
    pub initial_len: usize,
    pub food_score: Score,

    pub initial_interval: Duration,
    pub interval_step: Duration,
    pub min_interval: Duration,

    /// Rejection samples tried before enumerating free cells
    pub food_spawn_attempts: usize,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            board_dim: GridDim { col: BOARD_COLS, row: BOARD_ROWS },
            initial_len: INITIAL_LEN,
            food_score: FOOD_SCORE,

            initial_interval: Duration::from_millis(INITIAL_INTERVAL_MILLIS),
            interval_step: Duration::from_millis(INTERVAL_STEP_MILLIS),
            min_interval: Duration::from_millis(MIN_INTERVAL_MILLIS),

            food_spawn_attempts: 64,
        }
    }
}

impl Prefs {
    #[cfg(test)]
    #[must_use]
    pub fn board_dim(mut self, board_dim: GridDim) -> Self {
        assert!(
            self.initial_len as isize <= board_dim.col / 2 + 1 && board_dim.row > 0,
            "board {board_dim:?} too small for the starting snake"
        );
        self.board_dim = board_dim;
        self
    }

    /// Interval after eating, never below `min_interval`
    pub fn next_interval(&self, interval: Duration) -> Duration {
        interval
            .saturating_sub(self.interval_step)
            .max(self.min_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = Prefs::default();
        assert_eq!(prefs.board_dim, GridDim { col: 25, row: 18 });
        assert_eq!(prefs.initial_len, 3);
        assert_eq!(prefs.food_score, 10);
        assert_eq!(prefs.initial_interval, Duration::from_millis(200));
    }

    #[test]
    fn test_interval_ramp_is_floored() {
        let prefs = Prefs::default();
        let ms = Duration::from_millis;

        assert_eq!(prefs.next_interval(ms(200)), ms(194));
        assert_eq!(prefs.next_interval(ms(46)), ms(40));
        assert_eq!(prefs.next_interval(ms(44)), ms(40));
        assert_eq!(prefs.next_interval(ms(40)), ms(40));
        assert_eq!(prefs.next_interval(ms(3)), ms(40));
    }

    #[test]
    fn test_ramp_reaches_floor_after_27_apples() {
        let prefs = Prefs::default();
        let mut interval = prefs.initial_interval;
        let mut apples = 0;
        while interval > prefs.min_interval {
            interval = prefs.next_interval(interval);
            apples += 1;
        }
        // 200 - 26 * 6 = 44, one more apple clamps to 40
        assert_eq!(apples, 27);
    }

    #[test]
    #[should_panic]
    fn test_tiny_board_is_rejected() {
        let _ = Prefs::default().board_dim(GridDim { col: 2, row: 2 });
    }
}
