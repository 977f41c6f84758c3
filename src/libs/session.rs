//! Session model with an explicit open/closed state machine.
//!
//! A session is created open as a side effect of a clock-in and transitions
//! to closed exactly once, either through an explicit clock-out or through
//! the midnight sweep. The close-related fields only exist on the `Closed`
//! variant, so a half-closed record cannot be represented.

use chrono::NaiveDateTime;

/// Close-state of a session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Still accruing time. No check-out, no frozen duration.
    Open,
    /// Closed exactly once, never reopened.
    Closed {
        /// When the session ended. Midnight of the close day for swept sessions.
        check_out: NaiveDateTime,
        /// Minutes between check-in and check-out, rounded, frozen at close.
        duration_minutes: i64,
        /// True only when the midnight sweep closed the session.
        auto_closed: bool,
        /// True for swept sessions so their truncated duration stays out of totals.
        exclude_from_totals: bool,
    },
}

/// One clock-in/clock-out interval for a leader.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Unique id assigned by the store at creation.
    pub id: i64,
    /// Owning leader id, immutable.
    pub leader_id: String,
    /// Store-assigned timestamp set at creation, immutable.
    pub check_in: NaiveDateTime,
    pub state: SessionState,
}

impl Session {
    pub fn is_open(&self) -> bool {
        matches!(self.state, SessionState::Open)
    }

    /// The instant this session stops accruing time: the recorded check-out
    /// for closed sessions, the current instant for open ones.
    pub fn effective_end(&self, now: NaiveDateTime) -> NaiveDateTime {
        match self.state {
            SessionState::Open => now,
            SessionState::Closed { check_out, .. } => check_out,
        }
    }

    /// Whether this session may contribute to today/week totals.
    ///
    /// Open sessions always accrue live. Closed sessions contribute unless
    /// they were flagged at close time.
    pub fn counts_toward_totals(&self) -> bool {
        match self.state {
            SessionState::Open => true,
            SessionState::Closed { exclude_from_totals, .. } => !exclude_from_totals,
        }
    }
}
