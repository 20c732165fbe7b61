use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Time elapsed since the clock was created.
    pub since_start: Duration,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

impl FrameTime {
    /// Whole milliseconds since the clock was created.
    #[inline]
    pub fn ticks_ms(&self) -> u64 {
        self.since_start.as_millis() as u64
    }
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time can be clamped to avoid pathological values when the application
/// is paused by the debugger, minimized, or stalls.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frame_index: u64,
    clamp: Option<(Duration, Duration)>,
}

impl FrameClock {
    /// Creates a new clock with default clamps.
    ///
    /// - minimum prevents zero-dt behavior from tight loops on some platforms
    /// - maximum prevents simulation explosions after long stalls
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self::starting_at(Instant::now(), Some((dt_min, dt_max)))
    }

    /// Creates a clock that reports raw wall-clock deltas.
    pub fn unclamped() -> Self {
        Self::starting_at(Instant::now(), None)
    }

    fn starting_at(start: Instant, clamp: Option<(Duration, Duration)>) -> Self {
        Self {
            start,
            last: start,
            frame_index: 0,
            clamp,
        }
    }

    /// Resets the delta baseline without touching `since_start`.
    ///
    /// Useful after surface reconfigure events or when resuming from suspension.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let mut dt = now.saturating_duration_since(self.last);

        if let Some((dt_min, dt_max)) = self.clamp {
            dt = dt.clamp(dt_min, dt_max);
        }

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            since_start: now.saturating_duration_since(self.start),
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unclamped_reports_raw_delta() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start, None);
        let ft = clock.tick_at(start + Duration::from_millis(1500));
        assert!((ft.dt - 1.5).abs() < 1e-6);
        assert_eq!(ft.ticks_ms(), 1500);
    }

    #[test]
    fn clamps_long_stalls() {
        let start = Instant::now();
        let mut clock =
            FrameClock::starting_at(start, Some((Duration::ZERO, Duration::from_millis(250))));
        let ft = clock.tick_at(start + Duration::from_secs(3));
        assert!((ft.dt - 0.25).abs() < 1e-6);
        // Elapsed-since-start is never clamped.
        assert_eq!(ft.ticks_ms(), 3000);
    }

    #[test]
    fn clamps_zero_delta_up_to_minimum() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(
            start,
            Some((Duration::from_millis(1), Duration::from_millis(250))),
        );
        let ft = clock.tick_at(start);
        assert!((ft.dt - 0.001).abs() < 1e-6);
    }

    #[test]
    fn frame_index_increments_and_delta_is_per_frame() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start, None);
        let a = clock.tick_at(start + Duration::from_millis(16));
        let b = clock.tick_at(start + Duration::from_millis(48));
        assert_eq!((a.frame_index, b.frame_index), (0, 1));
        assert!((b.dt - 0.032).abs() < 1e-6);
        assert_eq!(b.ticks_ms(), 48);
    }

    #[test]
    fn backwards_time_saturates_to_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut clock = FrameClock::starting_at(start, None);
        let ft = clock.tick_at(start - Duration::from_millis(5));
        assert_eq!(ft.dt, 0.0);
        assert_eq!(ft.ticks_ms(), 0);
    }
}
