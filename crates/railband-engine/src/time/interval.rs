/// Fixed-period tick source over abstract time units.
///
/// The single-threaded stand-in for the host's interval callbacks: the
/// driver asks `due(now)` between draws and fires the corresponding scene
/// tick when it answers true. A long stall yields one tick, not a burst
/// of catch-up ticks.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: u64,
    next_due: u64,
}

impl IntervalTimer {
    /// # Panics
    /// Panics if `period` is zero.
    pub fn new(period: u64) -> Self {
        assert!(period > 0, "IntervalTimer: zero period");
        Self {
            period,
            next_due: period,
        }
    }

    #[inline]
    pub fn period(&self) -> u64 {
        self.period
    }

    /// True when `now` has reached the next deadline; the deadline then
    /// advances past `now`.
    pub fn due(&mut self, now: u64) -> bool {
        if now < self.next_due {
            return false;
        }
        // Skip missed deadlines instead of replaying them.
        self.next_due = (now / self.period + 1) * self.period;
        true
    }

    /// Restarts the cadence from `now`.
    pub fn reset(&mut self, now: u64) {
        self.next_due = now + self.period;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_every_period() {
        let mut timer = IntervalTimer::new(50);
        assert!(!timer.due(0));
        assert!(!timer.due(49));
        assert!(timer.due(50));
        assert!(!timer.due(51));
        assert!(timer.due(100));
    }

    #[test]
    fn a_stall_yields_a_single_tick() {
        let mut timer = IntervalTimer::new(50);
        assert!(timer.due(5000));
        assert!(!timer.due(5001));
        assert!(timer.due(5050));
    }

    #[test]
    fn reset_restarts_the_cadence() {
        let mut timer = IntervalTimer::new(50);
        assert!(timer.due(50));
        timer.reset(60);
        assert!(!timer.due(100));
        assert!(timer.due(110));
    }

    #[test]
    #[should_panic]
    fn zero_period_is_a_programming_error() {
        let _ = IntervalTimer::new(0);
    }
}
