//! Database layer for the whosin application.
//!
//! Provides the persistence layer built on SQLite: connection management,
//! a versioned migration system, and typed operations for leaders and
//! sessions. The cross-record state machine (clock-in, clock-out, midnight
//! sweep) lives in [`attendance`] so that the session write and the leader
//! write always share one transaction.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use whosin::db::{attendance::Attendance, leaders::Leaders};
//!
//! let mut attendance = Attendance::new()?;
//! attendance.clock_in("pres")?;
//! let board = Leaders::new()?.fetch_all()?;
//! # anyhow::Ok(())
//! ```

/// Core database connection and initialization module.
pub mod db;

/// Database schema migration system.
pub mod migrations;

/// Leader roster operations.
pub mod leaders;

/// Session record operations.
pub mod sessions;

/// Cross-record attendance operations: clock-in, clock-out, midnight sweep.
pub mod attendance;

/// Maximum row deletions per transaction during an administrative reset.
pub const RESET_BATCH_SIZE: usize = 450;
