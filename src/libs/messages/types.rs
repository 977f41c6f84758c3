#[derive(Debug, Clone)]
pub enum Message {
    // === CLOCK MESSAGES ===
    ClockedIn(String),          // leader id
    ClockedOut(String, String), // leader id, formatted duration
    ClockRejected(String),      // human readable rejection reason

    // === DASHBOARD MESSAGES ===
    InOfficeNow,
    NoOneInOffice,
    TotalsTitle,
    WatchStarted(u64), // refresh interval in seconds
    WatchStopped,

    // === SWEEP MESSAGES ===
    SweepClosed(usize), // closed session count
    SweepNothingStale,
    InconsistentLeaderSession(String, i64), // leader id, session id
    OrphanedLeaderReleased(String),         // leader id

    // === ADMIN MESSAGES ===
    RosterSeeded(usize), // leader count
    ConfirmReset,
    ResetCancelled,
    ResetCompleted(usize, usize), // leaders deleted, sessions deleted

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    PromptRefreshInterval,
    PromptSweepOnStart,

    // === EXPORT MESSAGES ===
    DataExported(String), // output path
    NoSessionsThisWeek,
}
