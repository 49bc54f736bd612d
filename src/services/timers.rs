use std::collections::BTreeMap;

use crate::models::Timer;

/// Virtual-time timer queue. Timers due at the same instant fire in scheduling order.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now_ms: u64,
    seq: u64,
    pending: BTreeMap<(u64, u64), Timer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn schedule(&mut self, delay_ms: u64, timer: Timer) {
        let due = self.now_ms.saturating_add(delay_ms);
        self.seq += 1;
        self.pending.insert((due, self.seq), timer);
    }

    /// Removes the earliest timer due at or before `until` and moves the clock to it.
    pub fn pop_due(&mut self, until: u64) -> Option<Timer> {
        let (&(due, seq), _) = self.pending.iter().next()?;
        if due > until {
            return None;
        }
        let timer = self.pending.remove(&(due, seq))?;
        self.now_ms = self.now_ms.max(due);
        Some(timer)
    }

    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    pub fn pending(&self) -> impl Iterator<Item = &Timer> {
        self.pending.values()
    }
}
