use std::time::{Duration, Instant};

/// What the caller should do after polling a [`Debouncer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    /// Nothing scheduled
    Idle,
    /// A run is scheduled; poll again after this long
    Waiting(Duration),
    /// Quiet period elapsed; run now
    Fire,
}

/// Trailing-edge debounce: every trigger restarts the quiet period
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    last_trigger: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_trigger: None,
        }
    }

    /// Schedule a run, replacing any pending one
    pub fn trigger(&mut self, now: Instant) {
        self.last_trigger = Some(now);
    }

    /// Drop any pending run
    pub fn cancel(&mut self) {
        self.last_trigger = None;
    }

    pub fn is_pending(&self) -> bool {
        self.last_trigger.is_some()
    }

    /// Check the schedule; returns `Fire` at most once per trigger burst
    pub fn poll(&mut self, now: Instant) -> DebounceState {
        let Some(last) = self.last_trigger else {
            return DebounceState::Idle;
        };

        let elapsed = now.saturating_duration_since(last);
        if elapsed >= self.delay {
            self.last_trigger = None;
            DebounceState::Fire
        } else {
            DebounceState::Waiting(self.delay - elapsed)
        }
    }
}
