use std::time::Duration;

use crate::utils::app_time::AppInstant;

/// A one-shot deadline that is polled rather than awaited.
///
/// Nothing sleeps: the owner asks [`DeployTimer::is_due`] from its frame
/// loop and uses [`DeployTimer::remaining`] to decide when to look again.
#[derive(Debug, Clone, Copy)]
pub struct DeployTimer {
    started_at: AppInstant,
    duration: Duration,
    cancelled: bool,
}

impl DeployTimer {
    pub fn start(now: AppInstant, duration: Duration) -> Self {
        Self {
            started_at: now,
            duration,
            cancelled: false,
        }
    }

    pub fn elapsed(&self, now: AppInstant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    pub fn remaining(&self, now: AppInstant) -> Duration {
        self.duration.saturating_sub(self.elapsed(now))
    }

    /// A cancelled timer never becomes due.
    pub fn is_due(&self, now: AppInstant) -> bool {
        !self.cancelled && self.elapsed(now) >= self.duration
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::app_time::now;

    #[test]
    fn becomes_due_exactly_at_deadline() {
        let t0 = now();
        let timer = DeployTimer::start(t0, Duration::from_millis(3_000));

        assert!(!timer.is_due(t0));
        assert!(!timer.is_due(t0 + Duration::from_millis(2_999)));
        assert!(timer.is_due(t0 + Duration::from_millis(3_000)));
        assert!(timer.is_due(t0 + Duration::from_secs(60)));
    }

    #[test]
    fn remaining_counts_down_and_saturates() {
        let t0 = now();
        let timer = DeployTimer::start(t0, Duration::from_millis(3_000));

        assert_eq!(timer.remaining(t0), Duration::from_millis(3_000));
        assert_eq!(
            timer.remaining(t0 + Duration::from_millis(1_200)),
            Duration::from_millis(1_800)
        );
        assert_eq!(timer.remaining(t0 + Duration::from_secs(10)), Duration::ZERO);
    }

    #[test]
    fn clock_going_backwards_counts_as_no_progress() {
        let t0 = now();
        let timer = DeployTimer::start(t0 + Duration::from_secs(1), Duration::from_millis(500));
        assert_eq!(timer.elapsed(t0), Duration::ZERO);
        assert!(!timer.is_due(t0));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let t0 = now();
        let mut timer = DeployTimer::start(t0, Duration::from_millis(10));
        timer.cancel();

        assert!(timer.is_cancelled());
        assert!(!timer.is_due(t0 + Duration::from_secs(5)));
    }
}
