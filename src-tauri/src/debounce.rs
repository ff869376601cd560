// src-tauri/src/debounce.rs
use std::time::{Duration, Instant};

pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Coalesces bursts of search input so the query runs once per pause.
///
/// Callers feed every keystroke through `input` and ask `poll` whether the
/// pause has elapsed. Time is passed in rather than read, so the caller owns
/// the clock.
#[derive(Debug)]
pub struct SearchDebouncer {
    wait: Duration,
    pending: Option<Pending>,
}

#[derive(Debug)]
struct Pending {
    term: String,
    deadline: Instant,
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEBOUNCE)
    }
}

impl SearchDebouncer {
    pub fn new(wait: Duration) -> Self {
        SearchDebouncer {
            wait,
            pending: None,
        }
    }

    /// Records the latest term and restarts the wait.
    pub fn input(&mut self, term: impl Into<String>, now: Instant) {
        self.pending = Some(Pending {
            term: term.into(),
            deadline: now + self.wait,
        });
    }

    /// Returns the settled term once the wait has passed since the last input.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let settled = self.pending.as_ref().is_some_and(|p| now >= p.deadline);
        if settled {
            self.pending.take().map(|p| p.term)
        } else {
            None
        }
    }

    /// Time until the pending term settles, if any.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.deadline.saturating_duration_since(now))
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_input_settles_once_on_the_last_term() {
        let start = Instant::now();
        let mut debouncer = SearchDebouncer::default();

        debouncer.input("b", start);
        debouncer.input("ba", start + Duration::from_millis(100));
        debouncer.input("bas", start + Duration::from_millis(200));

        // 300ms after the first keystroke but only 100ms after the last
        assert_eq!(debouncer.poll(start + Duration::from_millis(300)), None);
        assert_eq!(
            debouncer.remaining(start + Duration::from_millis(300)),
            Some(Duration::from_millis(200))
        );

        assert_eq!(
            debouncer.poll(start + Duration::from_millis(500)).as_deref(),
            Some("bas")
        );
        assert_eq!(debouncer.poll(start + Duration::from_millis(900)), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn cancel_drops_the_pending_term() {
        let start = Instant::now();
        let mut debouncer = SearchDebouncer::new(Duration::from_millis(50));
        debouncer.input("soup", start);
        assert!(debouncer.is_pending());
        debouncer.cancel();
        assert_eq!(debouncer.poll(start + Duration::from_secs(1)), None);
        assert_eq!(debouncer.remaining(start), None);
    }
}
