//! One-shot entry-animation flag for list pages.
//!
//! Each time a view renders a new page slice it schedules a flag flip after a
//! short delay; the flip moves cards from their off-screen starting transform
//! to the settled position. If the slice changes again before the delay
//! elapses, the earlier flip must not fire; only the latest scheduled flip
//! may run. Timers are identified by an epoch token so a superseded or
//! orphaned timer becomes a no-op instead of flipping state it no longer
//! owns.

#[cfg(test)]
#[path = "entry_animation_test.rs"]
mod entry_animation_test;

/// Delay between rendering a new slice and flipping to the settled state.
pub const ENTRY_DELAY_MS: u64 = 50;

/// Lifecycle of the entry animation for the currently rendered slice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntryPhase {
    /// Nothing rendered yet.
    #[default]
    Pending,
    /// A slice is rendered and its flip timer is running.
    Scheduled,
    /// The flip fired; cards are in their settled position.
    Animated,
}

/// Entry-animation state machine with timer supersession.
///
/// `schedule` hands out an epoch token; `fire` only honors the token from the
/// most recent `schedule`. Terminal state per slice is `Animated`; a new
/// slice always re-enters `Scheduled`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EntryAnimation {
    phase: EntryPhase,
    epoch: u64,
}

impl EntryAnimation {
    /// Note a new slice: restart the animation and invalidate pending timers.
    ///
    /// Returns the token the accompanying timer must present to `fire`.
    pub fn schedule(&mut self) -> u64 {
        self.phase = EntryPhase::Scheduled;
        self.epoch += 1;
        self.epoch
    }

    /// Attempt the flip for the timer holding `token`.
    ///
    /// Returns whether the flip fired. A stale token (superseded by a newer
    /// `schedule`) or an unscheduled state leaves the machine untouched.
    pub fn fire(&mut self, token: u64) -> bool {
        if self.phase == EntryPhase::Scheduled && token == self.epoch {
            self.phase = EntryPhase::Animated;
            true
        } else {
            false
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(self) -> EntryPhase {
        self.phase
    }

    /// Whether the rendered slice has settled.
    #[must_use]
    pub fn is_animated(self) -> bool {
        self.phase == EntryPhase::Animated
    }
}
