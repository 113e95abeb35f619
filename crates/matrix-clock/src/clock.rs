use chrono::{NaiveTime, TimeDelta, Timelike};
use embassy_time::Instant;

/// Wall clock kept by the MCU timer, starting from a time set by hand.
pub struct SoftClock {
    base: NaiveTime,
    since: Instant,
}

impl SoftClock {
    pub fn new(base: NaiveTime) -> Self {
        Self {
            base,
            since: Instant::now(),
        }
    }

    pub fn now(&self) -> NaiveTime {
        self.base + TimeDelta::seconds(self.since.elapsed().as_secs() as i64)
    }

    pub fn set(&mut self, time: NaiveTime) {
        self.base = time;
        self.since = Instant::now();
    }

    /// Moves the clock by `delta`, wrapping around midnight. Seconds restart
    /// from zero so that the display changes right away.
    pub fn adjust(&mut self, delta: TimeDelta) {
        let t = self.now() + delta;
        self.set(t.with_second(0).unwrap_or(t));
    }
}
