use crate::constants::HOVER_HIDE_DELAY_MS;
use crate::error::AmbientError;
use crate::timer::{Debounce, TimerToken};
use instant::Instant;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Which background effect the render loop drives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Fireworks; bursts may be triggered.
    #[default]
    Abstract,
    /// Star field; bursts are refused.
    Scene,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ViewMode::Abstract => "abstract",
            ViewMode::Scene => "scene",
        })
    }
}

impl FromStr for ViewMode {
    type Err = AmbientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abstract" => Ok(ViewMode::Abstract),
            "scene" => Ok(ViewMode::Scene),
            other => Err(AmbientError::UnknownMode(other.to_string())),
        }
    }
}

/// A deactivation the host should schedule on its wall-clock timer and
/// report back through `expire`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingHide {
    pub token: TimerToken,
    pub delay: Duration,
}

/// Sticky "still paying attention" flag.
///
/// Entering turns it on at once and cancels any pending release. Leaving
/// only arms a release after [`HOVER_HIDE_DELAY_MS`].
#[derive(Clone, Debug)]
pub struct HoverIntent {
    active: bool,
    hide: Debounce,
}

impl Default for HoverIntent {
    fn default() -> Self {
        Self::new(Duration::from_millis(HOVER_HIDE_DELAY_MS))
    }
}

impl HoverIntent {
    pub fn new(hide_delay: Duration) -> Self {
        Self {
            active: false,
            hide: Debounce::new(hide_delay),
        }
    }

    /// Returns the release the host must schedule when leaving.
    pub fn set(&mut self, hovering: bool, now: Instant) -> Option<PendingHide> {
        if hovering {
            if let Some(stale) = self.hide.cancel() {
                log::debug!("[hover] re-entry cancelled release #{}", stale.id());
            }
            self.active = true;
            None
        } else {
            let token = self.hide.schedule(now);
            Some(PendingHide {
                token,
                delay: self.hide.delay(),
            })
        }
    }

    /// Apply a scheduled release. Stale tokens are ignored.
    pub fn expire(&mut self, token: TimerToken) -> bool {
        let fired = self.hide.fire(token);
        if fired {
            self.active = false;
            log::debug!("[hover] released #{}", token.id());
        }
        fired
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        let fired = self.hide.poll(now);
        if fired {
            self.active = false;
        }
        fired
    }

    /// Drop any pending release without changing the flag.
    pub fn cancel(&mut self) -> Option<TimerToken> {
        self.hide.cancel()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pending(&self) -> Option<TimerToken> {
        self.hide.pending()
    }
}

/// View mode plus hover intent.
#[derive(Clone, Debug, Default)]
pub struct ModeController {
    mode: ViewMode,
    pub hover: HoverIntent,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the mode actually changed.
    pub fn set_mode(&mut self, mode: ViewMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        true
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Bursts are only allowed outside scene mode.
    #[inline]
    pub fn can_trigger(&self) -> bool {
        self.mode == ViewMode::Abstract
    }
}
