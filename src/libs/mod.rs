//! Core library modules for the whosin application.
//!
//! ## Features
//!
//! - **Attendance Core**: session state machine types and aggregation
//! - **Time Utilities**: day/week boundaries and duration formatting
//! - **Live Dashboard**: per-leader session watch registry
//! - **Infrastructure**: configuration, data storage, messaging, export

pub mod aggregate;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod leader;
pub mod messages;
pub mod session;
pub mod time;
pub mod view;
pub mod watcher;
