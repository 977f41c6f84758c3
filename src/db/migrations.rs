//! Database schema migration management and versioning.
//!
//! Maintains a precise record of applied migrations and runs any pending
//! ones during database initialization. Each migration executes inside its
//! own transaction, so a failed migration leaves the schema untouched.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use whosin::db::migrations::{init_with_migrations, get_db_version};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("whosin.db")?;
//! init_with_migrations(&mut conn)?;
//! let version = get_db_version(&conn)?;
//! # anyhow::Ok(())
//! ```

use crate::msg_debug;
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

/// SQL schema for the migrations tracking table.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single schema change with its version and transformation logic.
#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    /// Registers all database migrations in chronological order.
    fn register_migrations(&mut self) {
        self.migrations.push(Migration {
            version: 1,
            name: "create_attendance_tables",
            up: |tx| {
                tx.execute(
                    "CREATE TABLE IF NOT EXISTS leaders (
                        id TEXT PRIMARY KEY,
                        role TEXT NOT NULL,
                        sort_order INTEGER,
                        is_active INTEGER NOT NULL DEFAULT 0,
                        current_session_id INTEGER
                    )",
                    [],
                )?;
                tx.execute(
                    "CREATE TABLE IF NOT EXISTS sessions (
                        id INTEGER PRIMARY KEY,
                        leader_id TEXT NOT NULL,
                        check_in TIMESTAMP NOT NULL,
                        check_out TIMESTAMP,
                        duration_minutes INTEGER,
                        auto_closed INTEGER NOT NULL DEFAULT 0,
                        exclude_from_totals INTEGER NOT NULL DEFAULT 0
                    )",
                    [],
                )?;
                Ok(())
            },
        });

        self.migrations.push(Migration {
            version: 2,
            name: "add_session_indexes",
            up: |tx| {
                // The week query filters on check_in; the sweep and the
                // invariant checks look up open sessions per leader.
                tx.execute("CREATE INDEX IF NOT EXISTS idx_sessions_check_in ON sessions(check_in)", [])?;
                tx.execute(
                    "CREATE INDEX IF NOT EXISTS idx_sessions_leader_open ON sessions(leader_id) WHERE check_out IS NULL",
                    [],
                )?;
                Ok(())
            },
        });
    }

    /// Applies every pending migration, each in its own transaction.
    pub fn migrate(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;
        let current = get_db_version(conn)?;

        for migration in self.migrations.iter().filter(|m| m.version > current) {
            msg_debug!("running migration {} ({})", migration.version, migration.name);
            let tx = conn.transaction()?;
            (migration.up)(&tx)?;
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
            tx.commit()?;
        }
        Ok(())
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Ensures the schema is current. Called from `Db::new`, safe to re-run.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().migrate(conn)
}

/// Returns the highest applied migration version, zero for a fresh database.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    let version = conn.query_row("SELECT COALESCE(MAX(version), 0) FROM migrations", [], |row| row.get(0))?;
    Ok(version)
}
