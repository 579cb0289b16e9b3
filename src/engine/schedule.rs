//! Delayed-action queue with cancellation slots.
//!
//! Every timed mutation the engine schedules goes through [`TimerQueue`].
//! An entry may carry a *slot*: a cancellation key under which at most one
//! entry is pending. Scheduling on an occupied slot replaces the pending
//! entry, which turns the page's original pile-of-timers races into a
//! defined last-writer-wins policy.

use web_time::{Duration, Instant};

/// One pending entry.
#[derive(Debug)]
struct TimerEntry<A, S> {
    due: Instant,
    seq: u64,
    action: A,
    slot: Option<S>,
}

/// Ordered queue of delayed actions.
///
/// Not a timer wheel: the page schedules tens of entries at most, so a
/// flat vector drained once per frame is plenty.
#[derive(Debug)]
pub struct TimerQueue<A, S: PartialEq> {
    entries: Vec<TimerEntry<A, S>>,
    next_seq: u64,
}

impl<A, S: PartialEq> Default for TimerQueue<A, S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<A, S: PartialEq> TimerQueue<A, S> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to fire `delay` after `now`, with no slot.
    pub fn schedule(&mut self, now: Instant, delay: Duration, action: A) {
        self.push(now + delay, action, None);
    }

    /// Schedule `action` on `slot`, replacing any pending entry there.
    pub fn schedule_slotted(
        &mut self,
        slot: S,
        now: Instant,
        delay: Duration,
        action: A,
    ) {
        self.cancel_slot(&slot);
        self.push(now + delay, action, Some(slot));
    }

    /// Drop the pending entry on `slot`, if any.
    pub fn cancel_slot(&mut self, slot: &S) {
        self.entries
            .retain(|e| e.slot.as_ref() != Some(slot));
    }

    /// Remove and return every entry due at or before `now`, ordered by
    /// due time (insertion order breaks ties).
    pub fn drain_due(&mut self, now: Instant) -> Vec<A> {
        let mut due: Vec<TimerEntry<A, S>> = Vec::new();
        let mut rest: Vec<TimerEntry<A, S>> = Vec::new();
        for entry in self.entries.drain(..) {
            if entry.due <= now {
                due.push(entry);
            } else {
                rest.push(entry);
            }
        }
        self.entries = rest;
        due.sort_by_key(|e| (e.due, e.seq));
        due.into_iter().map(|e| e.action).collect()
    }

    /// Earliest pending due time.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.entries.iter().map(|e| e.due).min()
    }

    /// Number of pending entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, due: Instant, action: A, slot: Option<S>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(TimerEntry {
            due,
            seq,
            action,
            slot,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn drains_in_due_order() {
        let now = Instant::now();
        let mut queue: TimerQueue<&str, u32> = TimerQueue::new();
        queue.schedule(now, 200 * MS, "late");
        queue.schedule(now, Duration::ZERO, "first");
        queue.schedule(now, 100 * MS, "middle");

        assert_eq!(queue.drain_due(now + 250 * MS), vec![
            "first", "middle", "late"
        ]);
        assert!(queue.is_empty());
    }

    #[test]
    fn not_yet_due_entries_stay_queued() {
        let now = Instant::now();
        let mut queue: TimerQueue<&str, u32> = TimerQueue::new();
        queue.schedule(now, 100 * MS, "soon");
        queue.schedule(now, 2000 * MS, "later");

        assert_eq!(queue.drain_due(now + 150 * MS), vec!["soon"]);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.next_due(), Some(now + 2000 * MS));
        assert_eq!(queue.drain_due(now + 2000 * MS), vec!["later"]);
    }

    #[test]
    fn slot_reschedule_replaces_pending() {
        let now = Instant::now();
        let mut queue: TimerQueue<&str, u32> = TimerQueue::new();
        queue.schedule_slotted(7, now, 100 * MS, "first");
        queue.schedule_slotted(7, now + 50 * MS, 100 * MS, "second");

        // The first entry was cancelled: nothing fires at its due time
        assert!(queue.drain_due(now + 100 * MS).is_empty());
        assert_eq!(queue.drain_due(now + 150 * MS), vec!["second"]);
    }

    #[test]
    fn distinct_slots_do_not_interfere() {
        let now = Instant::now();
        let mut queue: TimerQueue<&str, u32> = TimerQueue::new();
        queue.schedule_slotted(1, now, 100 * MS, "one");
        queue.schedule_slotted(2, now, 100 * MS, "two");
        assert_eq!(queue.drain_due(now + 100 * MS), vec!["one", "two"]);
    }

    #[test]
    fn cancel_slot_leaves_unslotted_entries() {
        let now = Instant::now();
        let mut queue: TimerQueue<&str, u32> = TimerQueue::new();
        queue.schedule(now, 100 * MS, "free");
        queue.schedule_slotted(3, now, 100 * MS, "keyed");
        queue.cancel_slot(&3);
        assert_eq!(queue.drain_due(now + 100 * MS), vec!["free"]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let now = Instant::now();
        let mut queue: TimerQueue<u32, u32> = TimerQueue::new();
        for i in 0..5 {
            queue.schedule(now, 100 * MS, i);
        }
        assert_eq!(queue.drain_due(now + 100 * MS), vec![0, 1, 2, 3, 4]);
    }
}
