//! Game clock: whole-game and per-question timers
//!
//! Both timers read a monotonic [`TimeSource`]. Timeouts are strict:
//! a timer fires only once elapsed time exceeds its limit.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::config::GameSettings;

/// Monotonic time, measured from an arbitrary origin
pub trait TimeSource {
    fn now(&self) -> Duration;
}

/// Wall-clock monotonic time
#[derive(Debug, Clone, Copy)]
pub struct MonotonicTime {
    origin: Instant,
}

impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicTime {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl TimeSource for MonotonicTime {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-advanced time for simulations and tests. Clones share one clock.
#[derive(Debug, Clone, Default)]
pub struct ManualTime {
    now: Rc<Cell<Duration>>,
}

impl ManualTime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_secs(&self, secs: f64) {
        self.advance(Duration::from_secs_f64(secs));
    }
}

impl TimeSource for ManualTime {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Game and question timers
#[derive(Debug)]
pub struct GameClock<T: TimeSource> {
    time: T,
    game_start: Duration,
    question_start: Duration,
    settings: GameSettings,
}

impl<T: TimeSource> GameClock<T> {
    /// Start both timers now
    pub fn start(time: T, settings: GameSettings) -> Self {
        let now = time.now();
        Self {
            time,
            game_start: now,
            question_start: now,
            settings,
        }
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Seconds since game start
    pub fn elapsed_game(&self) -> f64 {
        self.time.now().saturating_sub(self.game_start).as_secs_f64()
    }

    /// Seconds since the current question started
    pub fn elapsed_question(&self) -> f64 {
        self.time.now().saturating_sub(self.question_start).as_secs_f64()
    }

    pub fn game_timed_out(&self) -> bool {
        self.elapsed_game() > self.settings.game_timeout_secs
    }

    pub fn question_timed_out(&self) -> bool {
        self.elapsed_question() > self.settings.question_timeout_secs
    }

    /// Whole seconds left on the game clock, truncated toward zero
    pub fn remaining_game_secs(&self) -> i64 {
        (self.settings.game_timeout_secs - self.elapsed_game()) as i64
    }

    /// Whole seconds left on the question clock, truncated toward zero
    pub fn remaining_question_secs(&self) -> i64 {
        (self.settings.question_timeout_secs - self.elapsed_question()) as i64
    }

    /// Restart the question timer (once per question advance)
    pub fn reset_question_timer(&mut self) {
        self.question_start = self.time.now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(game: f64, question: f64) -> GameSettings {
        GameSettings {
            game_timeout_secs: game,
            question_timeout_secs: question,
        }
    }

    #[test]
    fn test_timers_start_at_zero() {
        let time = ManualTime::new();
        time.advance_secs(100.0);
        let clock = GameClock::start(time, settings(60.0, 10.0));
        assert_eq!(clock.elapsed_game(), 0.0);
        assert_eq!(clock.elapsed_question(), 0.0);
    }

    #[test]
    fn test_question_timeout_is_strict() {
        let time = ManualTime::new();
        let clock = GameClock::start(time.clone(), settings(60.0, 10.0));

        time.advance_secs(10.0);
        assert!(!clock.question_timed_out());

        time.advance_secs(0.01);
        assert!(clock.question_timed_out());
        assert!(!clock.game_timed_out());
    }

    #[test]
    fn test_reset_question_timer_keeps_game_timer() {
        let time = ManualTime::new();
        let mut clock = GameClock::start(time.clone(), settings(60.0, 10.0));

        time.advance_secs(7.5);
        clock.reset_question_timer();

        assert_eq!(clock.elapsed_question(), 0.0);
        assert_eq!(clock.elapsed_game(), 7.5);
    }

    #[test]
    fn test_remaining_seconds_truncate() {
        let time = ManualTime::new();
        let clock = GameClock::start(time.clone(), settings(60.0, 10.0));

        time.advance_secs(2.4);
        assert_eq!(clock.remaining_question_secs(), 7);
        assert_eq!(clock.remaining_game_secs(), 57);

        time.advance_secs(8.0);
        assert_eq!(clock.remaining_question_secs(), 0);
    }

    #[test]
    fn test_monotonic_time_advances() {
        let time = MonotonicTime::new();
        let first = time.now();
        std::thread::sleep(Duration::from_millis(5));
        assert!(time.now() > first);
    }
}
