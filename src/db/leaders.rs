//! Database operations for the leader roster.
//!
//! Leaders are the board entries a kiosk can clock in and out. The roster is
//! seeded by the admin tool and ordered by the explicit sort key, with
//! unordered entries after every ordered one. Status transitions are not
//! performed here; they belong to [`crate::db::attendance`] so they stay in
//! the same transaction as the session write.

use crate::db::db::Db;
use crate::db::RESET_BATCH_SIZE;
use crate::libs::leader::Leader;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

const UPSERT_LEADER: &str = "INSERT INTO leaders (id, role, sort_order, is_active, current_session_id)
    VALUES (?1, ?2, ?3, 0, NULL)
    ON CONFLICT(id) DO UPDATE SET role = excluded.role, sort_order = excluded.sort_order,
        is_active = 0, current_session_id = NULL";
const SELECT_BY_ID: &str = "SELECT id, role, sort_order, is_active, current_session_id FROM leaders WHERE id = ?1";
const SELECT_ALL: &str = "SELECT id, role, sort_order, is_active, current_session_id FROM leaders
    ORDER BY sort_order IS NULL, sort_order, role";
const SELECT_IDS: &str = "SELECT id FROM leaders";
const DELETE_BY_ID: &str = "DELETE FROM leaders WHERE id = ?1";

fn map_leader_row(row: &Row) -> rusqlite::Result<Leader> {
    Ok(Leader {
        id: row.get(0)?,
        role: row.get(1)?,
        sort_order: row.get(2)?,
        is_active: row.get(3)?,
        current_session_id: row.get(4)?,
    })
}

pub struct Leaders {
    conn: Connection,
}

impl Leaders {
    pub fn new() -> Result<Self> {
        Ok(Leaders { conn: Db::new()?.conn })
    }

    /// Upserts the given roster, resetting every entry to clocked out.
    ///
    /// Returns the number of seeded leaders.
    pub fn seed(&mut self, roster: &[(&str, &str, i32)]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        for (id, role, sort_order) in roster {
            tx.execute(UPSERT_LEADER, params![id, role, sort_order])?;
        }
        tx.commit()?;
        Ok(roster.len())
    }

    pub fn fetch(&mut self, id: &str) -> Result<Option<Leader>> {
        let leader = self.conn.query_row(SELECT_BY_ID, params![id], map_leader_row).optional()?;
        Ok(leader)
    }

    /// Fetches the whole board in display order.
    pub fn fetch_all(&mut self) -> Result<Vec<Leader>> {
        let mut stmt = self.conn.prepare(SELECT_ALL)?;
        let leaders = stmt.query_map([], map_leader_row)?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(leaders)
    }

    /// Deletes the whole roster in batches, returning the deleted count.
    ///
    /// Used only by the administrative reset. Each batch is one transaction
    /// capped at [`RESET_BATCH_SIZE`] deletions.
    pub fn delete_all(&mut self) -> Result<usize> {
        let ids: Vec<String> = {
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
