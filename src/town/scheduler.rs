//! Virtual-clock timer queue for scheduled transitions.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::battle::Transition;

/// Pending transitions keyed by due time.
///
/// Time only moves through `advance`. Transitions due at the same instant
/// come out in the order they were scheduled.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_seq: u64,
    pending: BTreeMap<(Duration, u64), Transition>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Run `transition` after `delay`.
    pub fn schedule(&mut self, delay: Duration, transition: Transition) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.insert((self.now + delay, seq), transition);
    }

    /// Move the clock forward and take every transition now due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Transition> {
        self.now += elapsed;
        let later = self.pending.split_off(&(self.now, u64::MAX));
        let due = std::mem::replace(&mut self.pending, later);
        due.into_values().collect()
    }

    /// Time until the next transition is due.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.pending
            .keys()
            .next()
            .map(|(due, _)| due.saturating_sub(self.now))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop every pending transition.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_nothing_due_early() {
        let mut timers = TimerQueue::new();
        timers.schedule(ms(1000), Transition::NextTurn);

        assert!(timers.advance(ms(999)).is_empty());
        assert_eq!(timers.next_due(), Some(ms(1)));
        assert_eq!(timers.advance(ms(1)), vec![Transition::NextTurn]);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_due_order() {
        let mut timers = TimerQueue::new();
        timers.schedule(ms(1500), Transition::NextMinion);
        timers.schedule(ms(1000), Transition::NextTurn);
        timers.schedule(ms(1000), Transition::ForceEnd);

        assert_eq!(
            timers.advance(ms(2000)),
            vec![Transition::NextTurn, Transition::ForceEnd, Transition::NextMinion]
        );
        assert_eq!(timers.now(), ms(2000));
    }

    #[test]
    fn test_schedule_relative_to_now() {
        let mut timers = TimerQueue::new();
        timers.advance(ms(500));
        timers.schedule(ms(1000), Transition::ReturnToTown);

        assert!(timers.advance(ms(900)).is_empty());
        assert_eq!(timers.advance(ms(100)), vec![Transition::ReturnToTown]);
    }
}
