//! Error taxonomy for attendance state machine operations.
//!
//! Every precondition violation maps to its own variant so that the command
//! layer can surface a short message and keep running. Only `Storage` wraps
//! an underlying database failure worth propagating.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AttendanceError {
    /// The leader id does not resolve to a roster entry.
    #[error("{0} not found")]
    LeaderNotFound(String),

    /// The leader's current session reference does not resolve.
    #[error("session {0} not found")]
    SessionNotFound(i64),

    /// Clock-in was attempted while the leader is already in office.
    #[error("{0} is already clocked in")]
    AlreadyActive(String),

    /// Clock-out was attempted while the leader is not in office.
    #[error("{0} is not currently clocked in")]
    NotActive(String),

    /// The referenced open session has an unreadable check-in time.
    #[error("session {0} has a corrupt check-in time")]
    CorruptSession(i64),

    /// Underlying database error.
    #[error(transparent)]
    Storage(#[from] rusqlite::Error),
}

impl AttendanceError {
    /// True for state machine rejections that leave the system usable.
    ///
    /// These are reported to the user as a message rather than propagated
    /// as a failure of the whole command.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, AttendanceError::Storage(_))
    }
}
