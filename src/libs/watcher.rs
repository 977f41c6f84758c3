//! Per-leader live session subscriptions for the dashboard.
//!
//! The registry is keyed by leader id and owned by the view layer. An entry
//! is added when a leader activates, replaced when the leader starts a new
//! session, and released when the leader deactivates or the dashboard tears
//! down. Each entry is a point lookup of the watched open session, which is
//! how the live elapsed counters get their check-in times every tick.
//!
//! The connection is shared behind a mutex so a future background refresher
//! can reuse the same handle the render loop uses.

use crate::db::db::Db;
use crate::libs::leader::Leader;
use crate::msg_debug;
use anyhow::Result;
use chrono::NaiveDateTime;
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::sync::Arc;

const SELECT_OPEN_CHECK_IN: &str = "SELECT check_in FROM sessions WHERE id = ?1 AND check_out IS NULL";

/// A live view of one leader's current open session.
#[derive(Debug, Clone, Copy)]
struct SessionWatch {
    session_id: i64,
}

pub struct WatchRegistry {
    conn: Arc<Mutex<Connection>>,
    watches: HashMap<String, SessionWatch>,
}

impl WatchRegistry {
    pub fn new() -> Result<Self> {
        Ok(WatchRegistry {
            conn: Arc::new(Mutex::new(Db::new()?.conn)),
            watches: HashMap::new(),
        })
    }

    /// Reconciles the registry with the current leader snapshot.
    ///
    /// Watches for leaders that are no longer active (or that moved to a
    /// different session) are released; missing watches for active leaders
    /// are added.
    pub fn sync(&mut self, leaders: &[Leader]) {
        let mut keep: HashMap<&str, i64> = HashMap::new();
        for leader in leaders.iter().filter(|l| l.is_active) {
            if let Some(session_id) = leader.current_session_id {
                keep.insert(leader.id.as_str(), session_id);
            }
        }

        self.watches.retain(|leader_id, watch| {
            let still_current = keep.get(leader_id.as_str()) == Some(&watch.session_id);
            if !still_current {
                msg_debug!("released session watch for {}", leader_id);
            }
            still_current
        });

        for (leader_id, session_id) in keep {
            self.watches.entry(leader_id.to_string()).or_insert_with(|| {
                msg_debug!("watching session {} for {}", session_id, leader_id);
                SessionWatch { session_id }
            });
        }
    }

    /// Point lookup of the watched check-in time for a leader.
    ///
    /// Returns `None` when the leader is not watched or the session closed
    /// underneath the watch since the last sync.
    pub fn check_in_time(&self, leader_id: &str) -> Option<NaiveDateTime> {
        let watch = self.watches.get(leader_id)?;
        let conn = self.conn.lock();
        conn.query_row(SELECT_OPEN_CHECK_IN, params![watch.session_id], |row| row.get(0))
            .optional()
            .ok()
            .flatten()
    }

    pub fn len(&self) -> usize {
        self.watches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watches.is_empty()
    }

    /// Releases every watch. Called on dashboard teardown.
    pub fn close_all(&mut self) {
        for leader_id in self.watches.keys() {
            msg_debug!("released session watch for {}", leader_id);
        }
        self.watches.clear();
    }
}
