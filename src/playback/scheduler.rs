use std::collections::BTreeMap;

pub type TimerId = u64;

/// What a pending timer does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Move to the next line
    Advance,
    /// Make the pending sentiment current
    AdoptSentiment,
    /// Clear the transitioning flag
    SettleTransition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTimer {
    pub id: TimerId,
    pub due_ms: u64,
    pub kind: TimerKind,
}

/// Single-threaded timer source driving the sequencer.
///
/// Time is a monotonically increasing millisecond counter owned by the
/// scheduler; the caller moves it forward with [`Scheduler::set_now_ms`].
pub trait Scheduler {
    fn now_ms(&self) -> u64;

    /// Move the clock forward. Never moves backwards.
    fn set_now_ms(&mut self, now_ms: u64);

    fn schedule(&mut self, delay_ms: u64, kind: TimerKind) -> TimerId;

    /// Cancel a pending timer, returning whether it was still pending
    fn cancel(&mut self, id: TimerId) -> bool;

    /// Earliest due time among pending timers
    fn next_due_ms(&self) -> Option<u64>;

    /// Remove and return the earliest timer already due at the current time
    fn pop_due(&mut self) -> Option<ScheduledTimer>;

    fn pending_count(&self) -> usize;
}

/// Virtual-clock scheduler. Timers due at the same instant fire in the
/// order they were scheduled.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now_ms: u64,
    next_id: TimerId,
    pending: BTreeMap<(u64, TimerId), TimerKind>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> impl Iterator<Item = ScheduledTimer> + '_ {
        self.pending
            .iter()
            .map(|(&(due_ms, id), &kind)| ScheduledTimer { id, due_ms, kind })
    }
}

impl Scheduler for TimerQueue {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn set_now_ms(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    fn schedule(&mut self, delay_ms: u64, kind: TimerKind) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        self.pending
            .insert((self.now_ms.saturating_add(delay_ms), id), kind);
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        let key = self.pending.keys().find(|(_, pending_id)| *pending_id == id).copied();
        match key {
            Some(key) => self.pending.remove(&key).is_some(),
            None => false,
        }
    }

    fn next_due_ms(&self) -> Option<u64> {
        self.pending.keys().next().map(|(due_ms, _)| *due_ms)
    }

    fn pop_due(&mut self) -> Option<ScheduledTimer> {
        let (&(due_ms, id), _) = self.pending.iter().next()?;
        if due_ms > self.now_ms {
            return None;
        }
        let kind = self.pending.remove(&(due_ms, id))?;
        Some(ScheduledTimer { id, due_ms, kind })
    }

    fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
