//! # Whosin - Office Attendance Check-In
//!
//! A command-line tool for tracking who is in the office: kiosk-style
//! clock-in/out, a live dashboard, and daily/weekly hour totals.
//!
//! ## Features
//!
//! - **Kiosk**: clock leaders in and out with atomic session bookkeeping
//! - **Live Dashboard**: in-office timers and today/week totals on a tick
//! - **Midnight Sweep**: auto-closes sessions left open overnight and keeps
//!   them out of the totals
//! - **Data Export**: CSV and JSON export of sessions and totals
//! - **Admin Tools**: roster seeding and bulk reset
//!
//! ## Usage
//!
//! ```rust,no_run
//! use whosin::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
