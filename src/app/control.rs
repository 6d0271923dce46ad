use std::time::Duration;
use tracing::warn;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    Playing,
    GameOver,
}

/// Decides when the game advances, independently of the graphics framerate.
///
/// Frame time reported by the window is accumulated and converted into game
/// ticks of whatever length the game currently asks for. The tick length is
/// passed in on every check so a change only affects ticks that haven't
/// happened yet.
pub struct Control {
    /// Time not yet accounted for by a game tick
    accumulated: Duration,

    /// Game ticks still allowed during the current graphics frame
    budget: usize,

    game_state: State,

    ticks: u64,
}

impl Control {
    /// After a long stall (window dragged, debugger) don't try to
    /// replay every missed tick at once
    pub const MAX_TICKS_PER_FRAME: usize = 5;

    pub fn new() -> Self {
        Self {
            accumulated: Duration::ZERO,
            budget: 0,
            game_state: State::Playing,
            ticks: 0,
        }
    }

    // call once per update() with the time since the last frame
    pub fn graphics_frame(&mut self, delta: Duration) {
        if self.game_state == State::Playing {
            self.accumulated += delta;
        }
        self.budget = Self::MAX_TICKS_PER_FRAME;
    }

    // repeatedly called in update() as while loop condition
    pub fn can_update(&mut self, tick_interval: Duration) -> bool {
        if self.game_state != State::Playing || self.accumulated < tick_interval {
            return false;
        }

        if self.budget == 0 {
            warn!(
                dropped_ms = self.accumulated.as_millis() as u64,
                "game is lagging behind, dropping missed ticks"
            );
            self.accumulated = Duration::ZERO;
            return false;
        }

        self.accumulated -= tick_interval;
        self.budget -= 1;
        self.ticks += 1;
        true
    }

    pub fn state(&self) -> State {
        self.game_state
    }

    /// Start counting from zero, the first tick comes one full interval later
    pub fn play(&mut self) {
        self.game_state = State::Playing;
        self.accumulated = Duration::ZERO;
    }

    pub fn game_over(&mut self) {
        self.game_state = State::GameOver;
        self.accumulated = Duration::ZERO;
    }

    /// Total number of ticks handed out since creation
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn run_frame(control: &mut Control, delta: Duration, interval: Duration) -> usize {
        control.graphics_frame(delta);
        let mut n = 0;
        while control.can_update(interval) {
            n += 1;
        }
        n
    }

    #[test]
    fn test_ticks_follow_interval() {
        let mut control = Control::new();
        let interval = ms(200);

        // 60 fps for one second
        let ticks: usize = (0..60).map(|_| run_frame(&mut control, ms(16), interval)).sum();
        // 960ms of frames
        assert_eq!(ticks, 4);
        assert_eq!(control.ticks(), 4);

        assert_eq!(run_frame(&mut control, ms(40), interval), 1);
    }

    #[test]
    fn test_interval_change_applies_to_next_tick() {
        let mut control = Control::new();

        assert_eq!(run_frame(&mut control, ms(200), ms(200)), 1);
        // 150ms into the next period the game speeds up to 100ms,
        // the pending time is measured against the new length
        assert_eq!(run_frame(&mut control, ms(150), ms(100)), 1);
        assert_eq!(run_frame(&mut control, ms(40), ms(100)), 0);
        assert_eq!(run_frame(&mut control, ms(10), ms(100)), 1);
    }

    #[test]
    fn test_catch_up_is_capped() {
        let mut control = Control::new();

        assert_eq!(run_frame(&mut control, ms(5_000), ms(100)), Control::MAX_TICKS_PER_FRAME);
        // the rest of the stall was dropped
        assert_eq!(run_frame(&mut control, ms(50), ms(100)), 0);
        assert_eq!(run_frame(&mut control, ms(50), ms(100)), 1);
    }

    #[test]
    fn test_no_ticks_after_game_over() {
        let mut control = Control::new();
        control.game_over();
        assert_eq!(control.state(), State::GameOver);

        assert_eq!(run_frame(&mut control, ms(1_000), ms(100)), 0);

        // time spent on the game over screen doesn't carry over
        control.play();
        assert_eq!(control.state(), State::Playing);
        assert_eq!(run_frame(&mut control, ms(99), ms(100)), 0);
        assert_eq!(run_frame(&mut control, ms(1), ms(100)), 1);
    }
}
