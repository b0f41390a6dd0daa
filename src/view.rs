//! View state machine for the watch face.
//!
//! Decides which of the three views is visible and manages the single
//! pending auto-revert timer. All events are delivered serially from the
//! main loop; there is no concurrency here, only interleaved calls.
//!
//! # Transition Table
//!
//! | Current | Event              | Next  | Side effect                     |
//! |---------|--------------------|-------|---------------------------------|
//! | any     | `PeerConnected`    | Clock | cancel pending revert           |
//! | any     | `PeerDisconnected` | Alert | cancel pending revert; haptic   |
//! | Clock   | `Tap`              | Date  | schedule revert (3 s)           |
//! | Date    | `Tap`              | Clock | cancel pending revert           |
//! | Alert   | `Tap`              | Clock | —                               |
//! | Date    | revert elapses     | Clock | —                               |
//! | any     | `RenderTick`       | same  | —                               |
//!
//! The table is total: every (state, event) pair is defined, unmatched pairs
//! are no-ops, and no event is ever rejected.
//!
//! # Pending Revert
//!
//! At most one revert deadline exists at a time, held as an `Option<Instant>`
//! and polled by the main loop each frame (the same expiry pattern the
//! display uses for frame pacing). Scheduling a new deadline supersedes the
//! old one; cancelling an absent or already-elapsed deadline is a no-op.
//!
//! # Side Effects
//!
//! The machine never touches hardware. Transitions that require one return
//! an [`Effect`] value and the caller drives the collaborator (see
//! [`crate::haptics`]). This keeps every transition unit-testable.

use std::time::Instant;

use crate::config::REVERT_DELAY;

// =============================================================================
// Events and Effects
// =============================================================================

/// The three views of the watch face.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum View {
    /// Fuzzy-time phrase. The default and the target of every revert.
    #[default]
    Clock,

    /// Date phrase, shown after a tap on the clock.
    Date,

    /// Connection-lost alert, shown while the peer is gone.
    Alert,
}

/// Events delivered to the state machine by the main loop.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WatchEvent {
    /// User tapped the face.
    Tap,
    /// The paired device reconnected.
    PeerConnected,
    /// The paired device dropped off.
    PeerDisconnected,
    /// Periodic minute tick; the view is unchanged, the face just redraws.
    RenderTick,
}

/// Side effect requested by a transition, executed by the caller.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Effect {
    /// Fire the haptic alert pattern (entering the Alert view).
    HapticAlert,
}

// =============================================================================
// State Machine
// =============================================================================

/// Current view plus the at-most-one pending revert deadline.
pub struct WatchView {
    view: View,
    revert_at: Option<Instant>,
}

impl WatchView {
    /// Start on the clock with no revert pending.
    pub const fn new() -> Self {
        Self {
            view: View::Clock,
            revert_at: None,
        }
    }

    /// The currently visible view.
    pub const fn current(&self) -> View { self.view }

    /// Whether a revert deadline is outstanding.
    pub const fn revert_pending(&self) -> bool { self.revert_at.is_some() }

    /// Apply one event and return the side effect it requests, if any.
    ///
    /// `now` is passed in rather than sampled here so transitions are
    /// deterministic under test.
    pub fn handle_event(&mut self, event: WatchEvent, now: Instant) -> Option<Effect> {
        match event {
            WatchEvent::PeerConnected => {
                self.cancel_revert();
                self.view = View::Clock;
                None
            }
            WatchEvent::PeerDisconnected => {
                self.cancel_revert();
                self.view = View::Alert;
                Some(Effect::HapticAlert)
            }
            WatchEvent::Tap => {
                match self.view {
                    View::Clock => {
                        self.view = View::Date;
                        // Supersedes any previous deadline (there is none on
                        // this path, but the invariant holds regardless).
                        self.revert_at = Some(now + REVERT_DELAY);
                    }
                    View::Date => {
                        self.cancel_revert();
                        self.view = View::Clock;
                    }
                    View::Alert => {
                        self.view = View::Clock;
                    }
                }
                None
            }
            WatchEvent::RenderTick => None,
        }
    }

    /// Fire the pending revert if its deadline has passed.
    ///
    /// Called once per frame by the main loop. Reverting only applies while
    /// the date view is up; a stale deadline in any other view is discarded.
    pub fn poll_revert(&mut self, now: Instant) {
        if let Some(deadline) = self.revert_at
            && now >= deadline
        {
            self.revert_at = None;
            if self.view == View::Date {
                self.view = View::Clock;
            }
        }
    }

    /// Drop the pending revert deadline. Idempotent: cancelling an absent or
    /// already-fired deadline does nothing.
    pub fn cancel_revert(&mut self) { self.revert_at = None; }
}

impl Default for WatchView {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
