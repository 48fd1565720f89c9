use crate::config::{INITIAL_SPEED, SPEED_BOOST_FACTOR};

/// Ticks per second, kept as an exact base plus a count of active speed boosts
/// so that ending a boost restores the previous rate bit for bit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickSpeed {
    half_steps: u32, // base rate in units of 0.5 ticks/s
    boosts: u32,
}

impl Default for TickSpeed {
    fn default() -> Self {
        Self { half_steps: INITIAL_SPEED * 2, boosts: 0 }
    }
}

impl TickSpeed {
    pub fn base(&self) -> f32 {
        self.half_steps as f32 / 2.0
    }

    pub fn boosts(&self) -> u32 {
        self.boosts
    }

    pub fn ticks_per_second(&self) -> f32 {
        self.base() * SPEED_BOOST_FACTOR.powi(self.boosts as i32)
    }

    pub fn add_half(&mut self) {
        self.half_steps += 1;
    }

    pub fn add_whole(&mut self) {
        self.half_steps += 2;
    }

    pub fn boost(&mut self) {
        self.boosts += 1;
    }

    pub fn unboost(&mut self) {
        self.boosts = self.boosts.saturating_sub(1);
    }
}

/// Accumulates frame time and releases simulation ticks at a given rate.
/// Leftover time carries into the next interval, capped at one interval so
/// a long stall does not replay as a burst of ticks.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TickClock {
    pending: f32,
}

impl TickClock {
    pub fn reset(&mut self) {
        self.pending = 0.0;
    }

    /// Adds `dt` seconds; returns whether a tick at `rate` per second is due.
    pub fn tick_due(&mut self, dt: f32, rate: f32) -> bool {
        let interval = 1.0 / rate;
        self.pending += dt;
        if self.pending < interval {
            return false;
        }
        self.pending = (self.pending - interval).min(interval);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks_over(frames: usize, rate: f32) -> usize {
        let mut clock = TickClock::default();
        (0..frames).filter(|_| clock.tick_due(1.0 / 60.0, rate)).count()
    }

    #[test]
    fn starts_at_initial_rate() {
        assert_eq!(TickSpeed::default().ticks_per_second(), 8.0);
    }

    #[test]
    fn boost_round_trip_is_exact() {
        let mut speed = TickSpeed::default();
        speed.add_half();
        speed.add_whole();
        let before = speed.ticks_per_second();

        speed.boost();
        assert_eq!(speed.ticks_per_second(), before * 1.5);
        speed.add_half();
        speed.unboost();
        assert_eq!(speed.ticks_per_second(), 10.0);
        assert_eq!(speed.base(), 10.0);
    }

    #[test]
    fn boosts_stack() {
        let mut speed = TickSpeed::default();
        speed.boost();
        speed.boost();
        assert_eq!(speed.ticks_per_second(), 18.0);
        speed.unboost();
        assert_eq!(speed.ticks_per_second(), 12.0);
        speed.unboost();
        speed.unboost();
        assert_eq!(speed.boosts(), 0);
    }

    #[test]
    fn clock_keeps_leftover_time() {
        let base = ticks_over(180, 8.0);
        let golden = ticks_over(180, 8.5);
        assert!((23..=24).contains(&base), "{base}");
        assert!(golden >= 25, "{golden}");
        assert!((119..=120).contains(&ticks_over(600, 12.0)));
    }

    #[test]
    fn clock_releases_one_tick_per_call() {
        let mut clock = TickClock::default();
        assert!(clock.tick_due(5.0, 8.0));
        assert!(clock.tick_due(0.0, 8.0));
        assert!(!clock.tick_due(0.0, 8.0));

        clock.reset();
        assert!(!clock.tick_due(0.1, 8.0));
        assert!(clock.tick_due(0.05, 8.0));
        assert!(!clock.tick_due(0.05, 8.0));
    }
}
