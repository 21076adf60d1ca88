//! Action scheduler with deterministic ordering.
//!
//! Implements a priority queue that ensures:
//! - Actions are fired in time order
//! - Ties are broken by insertion order (sequence number)
//! - Reproducible across runs

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::engine::SceneTime;

/// An action scheduled at a scene time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledAction<A> {
    /// Scheduled time.
    pub time: SceneTime,
    /// Sequence number for deterministic tie-breaking.
    pub sequence: u64,
    /// The action to fire.
    pub action: A,
}

impl<A> ScheduledAction<A> {
    /// Create a new scheduled action.
    #[must_use]
    pub const fn new(time: SceneTime, sequence: u64, action: A) -> Self {
        Self {
            time,
            sequence,
            action,
        }
    }
}

// Ordering ignores the payload: (time, sequence) only.
impl<A> PartialEq for ScheduledAction<A> {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time && self.sequence == other.sequence
    }
}

impl<A> Eq for ScheduledAction<A> {}

impl<A> PartialOrd for ScheduledAction<A> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<A> Ord for ScheduledAction<A> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.time
            .cmp(&other.time)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Priority-ordered action queue.
///
/// # Example
///
/// ```rust
/// use tinsel::engine::scheduler::EventScheduler;
/// use tinsel::engine::SceneTime;
///
/// let mut scheduler = EventScheduler::new();
/// scheduler.schedule(SceneTime::from_millis(2_000), "second");
/// scheduler.schedule(SceneTime::from_millis(1_000), "first");
///
/// let due = scheduler.next_before(SceneTime::from_millis(1_500));
/// assert_eq!(due.map(|s| s.action), Some("first"));
/// assert_eq!(scheduler.next_action_time(), Some(SceneTime::from_millis(2_000)));
/// ```
#[derive(Debug)]
pub struct EventScheduler<A> {
    /// Min-heap ordered by (time, sequence).
    queue: BinaryHeap<Reverse<ScheduledAction<A>>>,
    /// Monotonic sequence counter for tie-breaking.
    sequence: u64,
}

impl<A> Default for EventScheduler<A> {
    fn default() -> Self {
        Self {
            queue: BinaryHeap::new(),
            sequence: 0,
        }
    }
}

impl<A> EventScheduler<A> {
    /// Create a new scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an action at the given time.
    pub fn schedule(&mut self, time: SceneTime, action: A) {
        let seq = self.sequence;
        self.sequence += 1;

        self.queue
            .push(Reverse(ScheduledAction::new(time, seq, action)));
    }

    fn peek(&self) -> Option<&ScheduledAction<A>> {
        self.queue.peek().map(|Reverse(a)| a)
    }

    /// Remove and return the next action if its time is at or before `time`.
    #[must_use]
    pub fn next_before(&mut self, time: SceneTime) -> Option<ScheduledAction<A>> {
        match self.peek() {
            Some(a) if a.time <= time => self.queue.pop().map(|Reverse(a)| a),
            _ => None,
        }
    }

    /// Check if the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Get the number of pending actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Get the time of the next action, if any.
    #[must_use]
    pub fn next_action_time(&self) -> Option<SceneTime> {
        self.peek().map(|a| a.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> SceneTime {
        SceneTime::from_millis(millis)
    }

    fn drain<A>(scheduler: &mut EventScheduler<A>) -> Vec<A> {
        std::iter::from_fn(|| scheduler.next_before(ms(u64::MAX)))
            .map(|a| a.action)
            .collect()
    }

    #[test]
    fn test_scheduler_time_ordering() {
        let mut scheduler = EventScheduler::new();

        scheduler.schedule(ms(3_000), "c");
        scheduler.schedule(ms(1_000), "a");
        scheduler.schedule(ms(2_000), "b");

        assert_eq!(drain(&mut scheduler), vec!["a", "b", "c"]);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_scheduler_sequence_ordering() {
        let mut scheduler = EventScheduler::new();

        let time = ms(1_000);
        scheduler.schedule(time, 1);
        scheduler.schedule(time, 2);
        scheduler.schedule(time, 3);

        assert_eq!(drain(&mut scheduler), vec![1, 2, 3]);
    }

    #[test]
    fn test_scheduler_next_before() {
        let mut scheduler = EventScheduler::new();

        scheduler.schedule(ms(1_000), "a");
        scheduler.schedule(ms(2_000), "b");

        assert_eq!(scheduler.next_before(ms(1_500)).map(|a| a.action), Some("a"));
        assert!(scheduler.next_before(ms(1_500)).is_none());
        // Boundary is inclusive
        assert_eq!(scheduler.next_before(ms(2_000)).map(|a| a.action), Some("b"));
    }

    #[test]
    fn test_scheduler_len_tracks_due_actions() {
        let mut scheduler = EventScheduler::new();

        for i in 1..=5u64 {
            scheduler.schedule(ms(i * 1_000), i);
        }

        while scheduler.next_before(ms(3_000)).is_some() {}
        assert_eq!(scheduler.len(), 2);
        assert_eq!(scheduler.next_action_time(), Some(ms(4_000)));
    }

    #[test]
    fn test_scheduled_action_eq_ignores_payload() {
        let a1 = ScheduledAction::new(ms(1_000), 1, "x");
        let a2 = ScheduledAction::new(ms(1_000), 1, "y");
        let a3 = ScheduledAction::new(ms(1_000), 2, "x");

        assert_eq!(a1, a2);
        assert_ne!(a1, a3);
        assert!(a1 < a3);
    }

    #[test]
    fn test_scheduler_empty_queries() {
        let mut scheduler: EventScheduler<()> = EventScheduler::default();
        assert!(scheduler.next_before(ms(1_000)).is_none());
        assert!(scheduler.is_empty());
        assert!(scheduler.next_action_time().is_none());
    }
}
