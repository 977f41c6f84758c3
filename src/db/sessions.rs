//! Database operations for session records.
//!
//! A session row with a NULL `check_out` is open; everything else is closed.
//! Rows are mapped into the [`Session`] state machine type so the rest of
//! the application never sees a half-closed record. Creation and closing of
//! sessions happen in [`crate::db::attendance`] together with the leader
//! update; this module covers reads and the administrative reset.

use crate::db::db::Db;
use crate::db::RESET_BATCH_SIZE;
use crate::libs::session::{Session, SessionState};
use crate::libs::time;
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_BY_ID: &str = "SELECT id, leader_id, check_in, check_out, duration_minutes, auto_closed, exclude_from_totals
    FROM sessions WHERE id = ?1";
const SELECT_SINCE: &str = "SELECT id, leader_id, check_in, check_out, duration_minutes, auto_closed, exclude_from_totals
    FROM sessions WHERE check_in >= ?1 ORDER BY check_in";
const SELECT_OPEN_FOR_LEADER: &str = "SELECT id, leader_id, check_in, check_out, duration_minutes, auto_closed, exclude_from_totals
    FROM sessions WHERE leader_id = ?1 AND check_out IS NULL ORDER BY id DESC LIMIT 1";
const COUNT_OPEN_FOR_LEADER: &str = "SELECT COUNT(*) FROM sessions WHERE leader_id = ?1 AND check_out IS NULL";
const SELECT_IDS: &str = "SELECT id FROM sessions";
const DELETE_BY_ID: &str = "DELETE FROM sessions WHERE id = ?1";

/// Maps a session row into the open/closed state machine type.
///
/// A closed row written by an older tool may lack a frozen duration; it is
/// recomputed from the stored interval in that case.
pub(crate) fn map_session_row(row: &Row) -> rusqlite::Result<Session> {
    let check_in: NaiveDateTime = row.get(2)?;
    let check_out: Option<NaiveDateTime> = row.get(3)?;

    let state = match check_out {
        None => SessionState::Open,
        Some(check_out) => SessionState::Closed {
            check_out,
            duration_minutes: row
                .get::<_, Option<i64>>(4)?
                .unwrap_or_else(|| time::duration_minutes(check_in, check_out)),
            auto_closed: row.get(5)?,
            exclude_from_totals: row.get(6)?,
        },
    };

    Ok(Session {
        id: row.get(0)?,
        leader_id: row.get(1)?,
        check_in,
        state,
    })
}

pub struct Sessions {
    conn: Connection,
}

impl Sessions {
    pub fn new() -> Result<Self> {
        Ok(Sessions { conn: Db::new()?.conn })
    }

    pub fn fetch(&mut self, id: i64) -> Result<Option<Session>> {
        let session = self.conn.query_row(SELECT_BY_ID, params![id], map_session_row).optional()?;
        Ok(session)
    }

    /// Fetches every session whose check-in falls on or after `since`,
    /// oldest first. The aggregation engine is fed with
    /// `since = start_of_week(now)`.
    pub fn fetch_since(&mut self, since: NaiveDateTime) -> Result<Vec<Session>> {
        let mut stmt = self.conn.prepare(SELECT_SINCE)?;
        let sessions = stmt.query_map(params![since], map_session_row)?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(sessions)
    }

    /// The leader's current open session, if one exists.
    pub fn fetch_open_for(&mut self, leader_id: &str) -> Result<Option<Session>> {
        let session = self
            .conn
            .query_row(SELECT_OPEN_FOR_LEADER, params![leader_id], map_session_row)
            .optional()?;
        Ok(session)
    }

    /// Number of open sessions referencing the leader. The state machine
    /// keeps this at one for active leaders and zero otherwise.
    pub fn count_open_for(&mut self, leader_id: &str) -> Result<i64> {
        let count = self.conn.query_row(COUNT_OPEN_FOR_LEADER, params![leader_id], |row| row.get(0))?;
        Ok(count)
    }

    /// Deletes every session in batches, returning the deleted count.
    ///
    /// Used only by the administrative reset. Each batch is one transaction
    /// capped at [`RESET_BATCH_SIZE`] deletions.
    pub fn delete_all(&mut self) -> Result<usize> {
        let ids: Vec<i64> = {
            let mut stmt = self.conn.prepare(SELECT_IDS)?;
            let ids = stmt.query_map([], |row| row.get(0))?.collect::<rusqlite::Result<Vec<_>>>()?;
            ids
        };

        let mut deleted = 0;
        for chunk in ids.chunks(RESET_BATCH_SIZE) {
            let tx = self.conn.transaction()?;
            for id in chunk {
                deleted += tx.execute(DELETE_BY_ID, params![id])?;
            }
            tx.commit()?;
        }
        Ok(deleted)
    }
}
