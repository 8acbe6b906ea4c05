//! Wall-clock gates that run independently of the tick cadence.

use instant::Instant;
use std::time::Duration;

/// Rejects requests that arrive within `window` of the last accepted one.
#[derive(Clone, Debug)]
pub struct Cooldown {
    window: Duration,
    last: Option<Instant>,
}

impl Cooldown {
    pub fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    /// Accept and restart the window, or reject without touching state.
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        if self.is_cooling(now) {
            return false;
        }
        self.last = Some(now);
        true
    }

    pub fn is_cooling(&self, now: Instant) -> bool {
        self.last.is_some_and(|last| now < last + self.window)
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Identifies one scheduled deadline. A token only fires while it is current.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// A single cancellable pending deadline.
///
/// Scheduling replaces whatever was pending, so at most one deadline exists
/// and stale tokens become inert.
#[derive(Clone, Debug)]
pub struct Debounce {
    delay: Duration,
    pending: Option<(TimerToken, Instant)>,
    next_id: u64,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            next_id: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule(&mut self, now: Instant) -> TimerToken {
        self.next_id = self.next_id.wrapping_add(1);
        let token = TimerToken(self.next_id);
        self.pending = Some((token, now + self.delay));
        token
    }

    /// Drop the pending deadline, if any. Safe to call repeatedly.
    pub fn cancel(&mut self) -> Option<TimerToken> {
        self.pending.take().map(|(token, _)| token)
    }

    /// Fire `token` if it is still the pending one.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        match self.pending {
            Some((current, _)) if current == token => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Fire the pending deadline if it has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some((_, due)) if now >= due => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub fn pending(&self) -> Option<TimerToken> {
        self.pending.map(|(token, _)| token)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
