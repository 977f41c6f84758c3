//! Per-leader aggregation of session minutes into today and week totals.
//!
//! The engine folds a snapshot of the current week's sessions together with
//! the current instant. Open sessions accrue live, so the caller is expected
//! to recompute on every render tick while anyone is in office.
//!
//! Auto-closed sessions carry `exclude_from_totals` and are skipped outright.
//! Their truncated overnight duration would otherwise distort the weekly
//! report. An open session can never be excluded, which keeps the live
//! counters moving for everyone who is actually clocked in.

use crate::libs::session::Session;
use crate::libs::time::{minutes_between, start_of_day};
use chrono::NaiveDateTime;
use std::collections::HashMap;

/// Aggregated minutes for one leader.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LeaderTotals {
    /// Minutes from sessions that started on or after today's midnight.
    pub today_minutes: f64,
    /// Minutes from sessions that started on or after Monday midnight.
    pub week_minutes: f64,
}

pub trait TotalsCalculator {
    /// Folds sessions into a map from leader id to today/week totals.
    ///
    /// Leaders without any counted session are simply absent; callers treat
    /// absence as zero.
    fn totals_by_leader(&self, now: NaiveDateTime) -> HashMap<String, LeaderTotals>;
}

impl TotalsCalculator for [Session] {
    fn totals_by_leader(&self, now: NaiveDateTime) -> HashMap<String, LeaderTotals> {
        let today_start = start_of_day(now);
        let mut totals: HashMap<String, LeaderTotals> = HashMap::new();

        for session in self {
            if !session.counts_toward_totals() {
                continue;
            }

            let end = session.effective_end(now);
            let minutes = minutes_between(session.check_in, end);

            let entry = totals.entry(session.leader_id.clone()).or_default();
            entry.week_minutes += minutes;

            // Counts toward "today" only if the session started today.
            if session.check_in >= today_start {
                entry.today_minutes += minutes;
            }
        }

        totals
    }
}
