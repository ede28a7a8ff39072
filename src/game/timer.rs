use std::time::Duration;
use tokio::time::Instant;

/// A cancellable one-shot timer owned by its scheduler.
///
/// Holds at most one pending payload; scheduling again replaces it. The
/// owner polls `deadline()` and calls `take_due()` when it passes, so a
/// cancelled timer can never fire into a reset session.
#[derive(Debug)]
pub struct OneShotTimer<T> {
    pending: Option<(Instant, T)>,
}

impl<T> OneShotTimer<T> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn schedule(&mut self, delay: Duration, payload: T) {
        self.pending = Some((Instant::now() + delay, payload));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(at, _)| *at)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn payload(&self) -> Option<&T> {
        self.pending.as_ref().map(|(_, payload)| payload)
    }

    /// Take the payload if its deadline is at or before `now`
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((at, _)) if *at <= now => self.pending.take().map(|(_, payload)| payload),
            _ => None,
        }
    }

    /// Take the payload regardless of its deadline
    pub fn take(&mut self) -> Option<T> {
        self.pending.take().map(|(_, payload)| payload)
    }
}

impl<T> Default for OneShotTimer<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_after_deadline() {
        let mut timer = OneShotTimer::new();
        timer.schedule(Duration::from_secs(2), "intro");

        let deadline = timer.deadline().unwrap();
        assert_eq!(timer.take_due(deadline - Duration::from_millis(1)), None);
        assert_eq!(timer.take_due(deadline), Some("intro"));
        assert!(!timer.is_pending());
    }

    #[test]
    fn cancel_and_replace() {
        let mut timer = OneShotTimer::new();
        timer.schedule(Duration::from_secs(4), 1);
        timer.schedule(Duration::from_secs(1), 2);
        assert_eq!(timer.payload(), Some(&2));

        timer.cancel();
        assert_eq!(timer.take(), None);
        assert_eq!(timer.deadline(), None);
    }
}
