use std::time::Duration;

/// SimulationClock paces generations independently of the render frame
/// rate. One generation interval = speed x 10 milliseconds; the host calls
/// `tick` every frame with a monotonic timestamp and steps only when the
/// clock says so.
pub struct SimulationClock {
    interval: Duration,
    last_step: Option<Duration>,
}

impl SimulationClock {
    pub fn new(speed: u32) -> Self {
        Self {
            interval: Self::interval_for(speed),
            last_step: None,
        }
    }

    const fn interval_for(speed: u32) -> Duration {
        Duration::from_millis(speed as u64 * 10)
    }

    /// Change the pacing. Takes effect on the very next `tick` comparison;
    /// the last-step mark is left alone.
    pub fn set_speed(&mut self, speed: u32) {
        self.interval = Self::interval_for(speed);
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true when a generation is due. The first tick always fires;
    /// afterwards a generation is due once `interval` has elapsed since the
    /// last firing, and the mark is moved to `now`. At most one generation
    /// per call.
    pub fn tick(&mut self, now: Duration) -> bool {
        let due = match self.last_step {
            None => true,
            Some(last) => now.saturating_sub(last) >= self.interval,
        };
        if due {
            self.last_step = Some(now);
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_first_tick_fires() {
        let mut clock = SimulationClock::new(10);
        assert!(clock.tick(ms(0)));
    }

    #[test]
    fn test_sub_interval_ticks_are_noops() {
        let mut clock = SimulationClock::new(10); // 100 ms interval
        assert!(clock.tick(ms(0)));
        assert!(!clock.tick(ms(30)));
        assert!(!clock.tick(ms(99)));
        assert!(clock.tick(ms(100)));
    }

    #[test]
    fn test_mark_moves_to_fire_time() {
        let mut clock = SimulationClock::new(10);
        assert!(clock.tick(ms(0)));
        // Fires late at 250 ms; the next generation is measured from there
        assert!(clock.tick(ms(250)));
        assert!(!clock.tick(ms(300)));
        assert!(clock.tick(ms(350)));
    }

    #[test]
    fn test_speed_change_applies_immediately() {
        let mut clock = SimulationClock::new(100); // 1000 ms interval
        assert!(clock.tick(ms(0)));
        assert!(!clock.tick(ms(200)));

        clock.set_speed(10); // now 100 ms, no reset needed
        assert!(clock.tick(ms(200)));
    }

    #[test]
    fn test_interval_is_speed_times_ten_ms() {
        assert_eq!(SimulationClock::new(1).interval(), ms(10));
        assert_eq!(SimulationClock::new(50).interval(), ms(500));
    }
}
