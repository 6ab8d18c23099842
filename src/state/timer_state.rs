//! Countdown state for the game clock

/// Length of one game, in seconds
pub const GAME_DURATION_SECS: u64 = 10 * 60;

/// The low-time marker is shown at or below this many remaining seconds
pub const LOW_TIME_THRESHOLD_SECS: u64 = 60;

/// What a single tick did to the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The clock was not running, nothing changed
    Idle,
    /// The clock moved down and still has time left
    Running { remaining: u64 },
    /// The clock just reached zero
    Expired,
}

/// Timer state for tracking the game countdown
///
/// `remaining` never exceeds `total`, and the clock is never running at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    total: u64,
    remaining: u64,
    running: bool,
}

impl TimerState {
    /// Create a stopped timer holding the full game duration
    pub fn new() -> Self {
        Self {
            total: GAME_DURATION_SECS,
            remaining: GAME_DURATION_SECS,
            running: false,
        }
    }

    /// Rewind to the full duration and run
    pub fn start(&mut self) {
        self.remaining = self.total;
        self.running = true;
    }

    /// Take one second off the clock
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            TickOutcome::Expired
        } else {
            TickOutcome::Running {
                remaining: self.remaining,
            }
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stop and rewind to the full duration without running
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining = self.total;
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the low-time marker should be shown (never at zero)
    pub fn is_low_time(&self) -> bool {
        self.remaining > 0 && self.remaining <= LOW_TIME_THRESHOLD_SECS
    }

    /// Remaining time as `MM:SS`
    pub fn display(&self) -> String {
        format_clock(self.remaining)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Format whole seconds as a zero-padded `MM:SS` clock
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_at(remaining: u64) -> TimerState {
        TimerState {
            total: GAME_DURATION_SECS,
            remaining,
            running: true,
        }
    }

    #[test]
    fn new_timer_is_full_and_stopped() {
        let timer = TimerState::new();
        assert_eq!(timer.remaining(), GAME_DURATION_SECS);
        assert!(!timer.is_running());
        assert_eq!(timer.display(), "10:00");
    }

    #[test]
    fn tick_decrements_by_one_across_the_whole_range() {
        for remaining in 2..=GAME_DURATION_SECS {
            let mut timer = running_at(remaining);
            assert_eq!(
                timer.tick(),
                TickOutcome::Running {
                    remaining: remaining - 1
                }
            );
            assert_eq!(timer.remaining(), remaining - 1);
            assert!(timer.is_running());
        }
    }

    #[test]
    fn tick_from_one_expires() {
        let mut timer = running_at(1);
        assert_eq!(timer.tick(), TickOutcome::Expired);
        assert_eq!(timer.remaining(), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn tick_while_stopped_changes_nothing() {
        let mut timer = TimerState::new();
        let before = timer.clone();
        assert_eq!(timer.tick(), TickOutcome::Idle);
        assert_eq!(timer, before);

        let mut expired = running_at(1);
        expired.tick();
        let before = expired.clone();
        assert_eq!(expired.tick(), TickOutcome::Idle);
        assert_eq!(expired, before);
    }

    #[test]
    fn start_always_rewinds() {
        let mut timer = running_at(17);
        timer.start();
        assert_eq!(timer.remaining(), GAME_DURATION_SECS);
        assert!(timer.is_running());

        let mut stopped = running_at(3);
        stopped.stop();
        stopped.start();
        assert_eq!(stopped.remaining(), GAME_DURATION_SECS);
        assert!(stopped.is_running());
    }

    #[test]
    fn low_time_marker_boundaries() {
        assert!(!running_at(61).is_low_time());
        assert!(running_at(60).is_low_time());
        assert!(running_at(1).is_low_time());
        assert!(!running_at(0).is_low_time());
    }

    #[test]
    fn reset_stops_and_rewinds() {
        let mut timer = running_at(42);
        timer.reset();
        assert!(!timer.is_running());
        assert_eq!(timer.remaining(), GAME_DURATION_SECS);
    }

    #[test]
    fn clock_formatting() {
        assert_eq!(format_clock(600), "10:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(0), "00:00");
    }
}
