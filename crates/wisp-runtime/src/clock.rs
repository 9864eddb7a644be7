//! Frame clock with per-frame timing

use std::time::Instant;

/// Tracks elapsed time across ticks and exposes the nominal frame budget
/// the driver paces against.
pub struct FrameClock {
    /// Total elapsed time in seconds
    pub total_time: f64,
    /// Time since last frame in seconds
    pub delta_time: f64,
    /// Nominal frame interval (default: 1/60 second)
    pub frame_interval: f64,
    /// Number of completed ticks
    pub frame: u64,
    /// Last tick instant
    last_instant: Instant,
    /// Whether this is the first tick
    first_tick: bool,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            frame_interval: 1.0 / 60.0,
            frame: 0,
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl FrameClock {
    /// Create a new clock with the default 60Hz frame budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock with a custom frame rate
    pub fn with_frame_rate(hz: f64) -> Self {
        Self {
            frame_interval: 1.0 / hz,
            ..Self::default()
        }
    }

    /// Advance the clock. Call once per frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.frame += 1;

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            self.delta_time = 0.0;
            return;
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;

        // Clamp to avoid spiral of death (max 250ms frame time)
        self.delta_time = elapsed.min(0.25);
        self.total_time += self.delta_time;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_defaults() {
        let clock = FrameClock::new();
        assert!((clock.frame_interval - 1.0 / 60.0).abs() < 1e-10);
        assert_eq!(clock.total_time, 0.0);
        assert_eq!(clock.delta_time, 0.0);
        assert_eq!(clock.frame, 0);
    }

    #[test]
    fn test_custom_frame_rate() {
        let clock = FrameClock::with_frame_rate(30.0);
        assert!((clock.frame_interval - 1.0 / 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_first_tick_zero_delta() {
        let mut clock = FrameClock::new();
        clock.tick();
        assert_eq!(clock.delta_time, 0.0);
        assert_eq!(clock.frame, 1);
    }

    #[test]
    fn test_frame_counter_advances() {
        let mut clock = FrameClock::new();
        clock.tick();
        clock.tick();
        clock.tick();
        assert_eq!(clock.frame, 3);
    }
}
