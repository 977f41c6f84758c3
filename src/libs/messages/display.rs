//! Display implementation for all user-facing message text.
//!
//! Keeping every string behind the `Message` enum gives a single place to
//! adjust wording and keeps the command modules free of string literals.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Clock
            Message::ClockedIn(id) => write!(f, "{} clocked in", id),
            Message::ClockedOut(id, duration) => write!(f, "{} clocked out after {}", id, duration),
            Message::ClockRejected(reason) => write!(f, "{}.", reason),

            // Dashboard
            Message::InOfficeNow => write!(f, "In Office Right Now"),
            Message::NoOneInOffice => write!(f, "No one is currently in the office."),
            Message::TotalsTitle => write!(f, "Total time for today and this week"),
            Message::WatchStarted(secs) => {
                write!(f, "Live dashboard started (refreshing every {}s, Ctrl-C to exit)", secs)
            }
            Message::WatchStopped => write!(f, "Live dashboard stopped"),

            // Sweep
            Message::SweepClosed(count) => write!(f, "Auto-closed {} stale session(s) at midnight", count),
            Message::SweepNothingStale => write!(f, "No stale sessions to close"),
            Message::InconsistentLeaderSession(leader, session) => {
                write!(f, "{} is marked active but session {} is already closed", leader, session)
            }
            Message::OrphanedLeaderReleased(leader) => {
                write!(f, "{} referenced a missing session and was marked as out", leader)
            }

            // Admin
            Message::RosterSeeded(count) => write!(f, "Seeded {} leaders", count),
            Message::ConfirmReset => write!(f, "Delete ALL leaders and sessions?"),
            Message::ResetCancelled => write!(f, "Reset cancelled"),
            Message::ResetCompleted(leaders, sessions) => {
                write!(f, "Deleted {} leaders and {} sessions", leaders, sessions)
            }

            // Configuration
            Message::ConfigSaved => write!(f, "Configuration saved successfully"),
            Message::ConfigDeleted => write!(f, "Configuration removed"),
            Message::PromptRefreshInterval => write!(f, "Dashboard refresh interval in seconds"),
            Message::PromptSweepOnStart => write!(f, "Run the midnight sweep when the dashboard starts?"),

            // Export
            Message::DataExported(path) => write!(f, "Data exported to {}", path),
            Message::NoSessionsThisWeek => write!(f, "No sessions recorded this week"),
        }
    }
}
