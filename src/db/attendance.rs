//! The attendance state machine: clock-in, clock-out, and the midnight sweep.
//!
//! Every operation that touches both a session row and its leader row runs
//! inside a single transaction, so a crash can never leave an orphaned open
//! session behind a leader that claims to be out (or the reverse).
//!
//! ## Transitions
//!
//! - **Clock-in**: leader must exist and be out. Creates an open session and
//!   activates the leader in one commit.
//! - **Clock-out**: leader must exist, be active, and reference an open
//!   session with a readable check-in. Freezes the duration, closes the
//!   session, and releases the leader in one commit.
//! - **Sweep**: closes every session that crossed a day boundary without an
//!   explicit clock-out, truncating it at local midnight and flagging it so
//!   it stays out of totals. Safe to re-run any number of times.
//!
//! The current time is read once per operation and used for both the
//! duration computation and the stored timestamp, so the two can never skew.
//!
//! State machine rejections (`AlreadyActive`, `NotActive`, ...) are plain
//! results for the command layer to surface; only storage failures
//! propagate as hard errors.

use crate::db::db::Db;
use crate::db::sessions::map_session_row;
use crate::libs::error::AttendanceError;
use crate::libs::messages::Message;
use crate::libs::session::{Session, SessionState};
use crate::libs::time::{duration_minutes, start_of_day};
use crate::{msg_debug, msg_warning};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension, Transaction};

const SELECT_LEADER_STATE: &str = "SELECT is_active, current_session_id FROM leaders WHERE id = ?1";
const SELECT_ACTIVE_LEADERS: &str = "SELECT id, current_session_id FROM leaders WHERE is_active = 1";
const INSERT_OPEN_SESSION: &str = "INSERT INTO sessions (leader_id, check_in) VALUES (?1, ?2)";
const SELECT_SESSION: &str = "SELECT id, leader_id, check_in, check_out, duration_minutes, auto_closed, exclude_from_totals
    FROM sessions WHERE id = ?1";
// The check_out IS NULL guard makes closing a second time a no-op at the
// SQL level as well.
const CLOSE_SESSION: &str = "UPDATE sessions SET check_out = ?2, duration_minutes = ?3, auto_closed = ?4,
    exclude_from_totals = ?5 WHERE id = ?1 AND check_out IS NULL";
const ACTIVATE_LEADER: &str = "UPDATE leaders SET is_active = 1, current_session_id = ?2 WHERE id = ?1";
const RELEASE_LEADER: &str = "UPDATE leaders SET is_active = 0, current_session_id = NULL WHERE id = ?1";

fn fetch_leader_state(tx: &Transaction, leader_id: &str) -> Result<Option<(bool, Option<i64>)>, AttendanceError> {
    let state = tx
        .query_row(SELECT_LEADER_STATE, params![leader_id], |row| Ok((row.get(0)?, row.get(1)?)))
        .optional()?;
    Ok(state)
}

fn fetch_session(tx: &Transaction, session_id: i64) -> Result<Option<Session>, AttendanceError> {
    match tx.query_row(SELECT_SESSION, params![session_id], map_session_row).optional() {
        Ok(session) => Ok(session),
        // An unreadable check-in means the record exists but cannot drive
        // the state machine.
        Err(rusqlite::Error::FromSqlConversionFailure(..)) | Err(rusqlite::Error::InvalidColumnType(..)) => {
            Err(AttendanceError::CorruptSession(session_id))
        }
        Err(e) => Err(e.into()),
    }
}

pub struct Attendance {
    conn: Connection,
}

impl Attendance {
    pub fn new() -> Result<Self> {
        Ok(Attendance { conn: Db::new()?.conn })
    }

    /// Clocks a leader in at the current local time.
    pub fn clock_in(&mut self, leader_id: &str) -> Result<Session, AttendanceError> {
        self.clock_in_at(leader_id, Local::now().naive_local())
    }

    /// Clocks a leader in at an explicit instant.
    ///
    /// `now` is the single time reading for the whole operation.
    pub fn clock_in_at(&mut self, leader_id: &str, now: NaiveDateTime) -> Result<Session, AttendanceError> {
        let tx = self.conn.transaction()?;

        let Some((is_active, _)) = fetch_leader_state(&tx, leader_id)? else {
            return Err(AttendanceError::LeaderNotFound(leader_id.to_string()));
        };
        if is_active {
            return Err(AttendanceError::AlreadyActive(leader_id.to_string()));
        }

        tx.execute(INSERT_OPEN_SESSION, params![leader_id, now])?;
        let session_id = tx.last_insert_rowid();
        tx.execute(ACTIVATE_LEADER, params![leader_id, session_id])?;
        tx.commit()?;

        msg_debug!("{} clocked in, session {}", leader_id, session_id);
        Ok(Session {
            id: session_id,
            leader_id: leader_id.to_string(),
            check_in: now,
            state: SessionState::Open,
        })
    }

    /// Clocks a leader out at the current local time.
    pub fn clock_out(&mut self, leader_id: &str) -> Result<Session, AttendanceError> {
        self.clock_out_at(leader_id, Local::now().naive_local())
    }

    /// Clocks a leader out at an explicit instant, freezing the duration.
    pub fn clock_out_at(&mut self, leader_id: &str, now: NaiveDateTime) -> Result<Session, AttendanceError> {
        let tx = self.conn.transaction()?;

        let Some((is_active, current_session_id)) = fetch_leader_state(&tx, leader_id)? else {
            return Err(AttendanceError::LeaderNotFound(leader_id.to_string()));
        };
        let (true, Some(session_id)) = (is_active, current_session_id) else {
            return Err(AttendanceError::NotActive(leader_id.to_string()));
        };

        let Some(session) = fetch_session(&tx, session_id)? else {
            return Err(AttendanceError::SessionNotFound(session_id));
        };
        if !session.is_open() {
            // The leader points at a session that was already closed. The
            // invariant is broken; release the leader so the kiosk recovers
            // and report the clock-out as a rejection.
            msg_warning!(Message::InconsistentLeaderSession(leader_id.to_string(), session_id));
            tx.execute(RELEASE_LEADER, params![leader_id])?;
            tx.commit()?;
            return Err(AttendanceError::NotActive(leader_id.to_string()));
        }

        let minutes = duration_minutes(session.check_in, now);
        tx.execute(CLOSE_SESSION, params![session_id, now, minutes, false, false])?;
        tx.execute(RELEASE_LEADER, params![leader_id])?;
        tx.commit()?;

        msg_debug!("{} clocked out after {} minute(s)", leader_id, minutes);
        Ok(Session {
            id: session_id,
            leader_id: leader_id.to_string(),
            check_in: session.check_in,
            state: SessionState::Closed {
                check_out: now,
                duration_minutes: minutes,
                auto_closed: false,
                exclude_from_totals: false,
            },
        })
    }

    /// Runs the midnight sweep against the current local time.
    pub fn sweep(&mut self) -> Result<usize, AttendanceError> {
        self.sweep_at(Local::now().naive_local())
    }

    /// Closes every active session that started before today's midnight.
    ///
    /// Swept sessions are truncated at midnight and flagged with
    /// `auto_closed` and `exclude_from_totals`, leaving an auditable record
    /// that cannot distort the weekly report. Sessions that started today
    /// and sessions already closed are left alone, which makes re-running
    /// the sweep a no-op. Returns the number of sessions closed.
    pub fn sweep_at(&mut self, now: NaiveDateTime) -> Result<usize, AttendanceError> {
        let midnight = start_of_day(now);

        let active: Vec<(String, Option<i64>)> = {
            let mut stmt = self.conn.prepare(SELECT_ACTIVE_LEADERS)?;
            let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
            rows.collect::<rusqlite::Result<Vec<_>>>()?
        };

        let mut closed = 0;
        for (leader_id, session_id) in active {
            let tx = self.conn.transaction()?;

            let Some(session_id) = session_id else {
                // Active leader without a session reference. Release it so
                // the board recovers.
                msg_warning!(Message::OrphanedLeaderReleased(leader_id.clone()));
                tx.execute(RELEASE_LEADER, params![leader_id])?;
                tx.commit()?;
                continue;
            };

            match fetch_session(&tx, session_id) {
                Ok(Some(session)) if session.is_open() => {
                    if session.check_in >= midnight {
                        // Started today, not stale.
                        continue;
                    }
                    let minutes = duration_minutes(session.check_in, midnight);
                    tx.execute(CLOSE_SESSION, params![session_id, midnight, minutes, true, true])?;
                    tx.execute(RELEASE_LEADER, params![leader_id])?;
                    tx.commit()?;
                    msg_debug!("swept session {} for {} ({} minute(s))", session_id, leader_id, minutes);
                    closed += 1;
                }
                Ok(Some(_)) => {
                    msg_warning!(Message::InconsistentLeaderSession(leader_id.clone(), session_id));
                }
                Ok(None) => {
                    msg_warning!(Message::OrphanedLeaderReleased(leader_id.clone()));
                    tx.execute(RELEASE_LEADER, params![leader_id])?;
                    tx.commit()?;
                }
                Err(AttendanceError::CorruptSession(id)) => {
                    msg_debug!("skipping session {} with unreadable check-in", id);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(closed)
    }
}
