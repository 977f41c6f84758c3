//! Data export functionality for external analysis and backup.
//!
//! Exports the current week's sessions or the aggregated totals to CSV or
//! JSON. Default file names carry the export date; an explicit output path
//! overrides them.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use whosin::libs::export::{ExportData, ExportFormat, Exporter};
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! let path = exporter.export(ExportData::Sessions)?;
//! # anyhow::Ok(())
//! ```

use crate::db::{leaders::Leaders, sessions::Sessions};
use crate::libs::aggregate::TotalsCalculator;
use crate::libs::messages::Message;
use crate::libs::session::{Session, SessionState};
use crate::libs::time::start_of_week;
use crate::msg_info;
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

const EXPORT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for spreadsheets and simple tooling.
    Csv,
    /// Pretty-printed JSON for programmatic processing.
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// What to export.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportData {
    /// Every session since Monday midnight, open ones included.
    Sessions,
    /// Aggregated today/week minutes per leader.
    Totals,
}

/// One session row, pre-formatted for export.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportSession {
    pub id: i64,
    pub leader_id: String,
    pub check_in: String,
    pub check_out: String,
    pub duration_minutes: String,
    pub auto_closed: bool,
    pub exclude_from_totals: bool,
}

impl From<&Session> for ExportSession {
    fn from(session: &Session) -> Self {
        let (check_out, duration_minutes, auto_closed, exclude_from_totals) = match session.state {
            SessionState::Open => ("-".to_string(), "-".to_string(), false, false),
            SessionState::Closed {
                check_out,
                duration_minutes,
                auto_closed,
                exclude_from_totals,
            } => (
                check_out.format(EXPORT_DATETIME_FORMAT).to_string(),
                duration_minutes.to_string(),
                auto_closed,
                exclude_from_totals,
            ),
        };

        ExportSession {
            id: session.id,
            leader_id: session.leader_id.clone(),
            check_in: session.check_in.format(EXPORT_DATETIME_FORMAT).to_string(),
            check_out,
            duration_minutes,
            auto_closed,
            exclude_from_totals,
        }
    }
}

/// One totals row per leader, minutes rounded for analysis.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportTotals {
    pub leader_id: String,
    pub role: String,
    pub today_minutes: i64,
    pub week_minutes: i64,
    pub status: String,
}

pub struct Exporter {
    format: ExportFormat,
    output: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        Exporter { format, output }
    }

    /// Runs the export and returns the written path.
    pub fn export(&self, data: ExportData) -> Result<PathBuf> {
        let now = Local::now().naive_local();
        match data {
            ExportData::Sessions => self.export_sessions(now),
            ExportData::Totals => self.export_totals(now),
        }
    }

    fn export_sessions(&self, now: NaiveDateTime) -> Result<PathBuf> {
        let sessions = Sessions::new()?.fetch_since(start_of_week(now))?;
        if sessions.is_empty() {
            msg_info!(Message::NoSessionsThisWeek);
        }
        let rows: Vec<ExportSession> = sessions.iter().map(ExportSession::from).collect();

        let path = self.output_path("sessions", now);
        self.write_rows(&path, &rows)?;
        Ok(path)
    }

    fn export_totals(&self, now: NaiveDateTime) -> Result<PathBuf> {
        let leaders = Leaders::new()?.fetch_all()?;
        let sessions = Sessions::new()?.fetch_since(start_of_week(now))?;
        let totals = sessions.totals_by_leader(now);

        let rows: Vec<ExportTotals> = leaders
            .iter()
            .map(|leader| {
                let t = totals.get(&leader.id).copied().unwrap_or_default();
                ExportTotals {
                    leader_id: leader.id.clone(),
                    role: leader.role.clone(),
                    today_minutes: t.today_minutes.round() as i64,
                    week_minutes: t.week_minutes.round() as i64,
                    status: leader.status_label().to_string(),
                }
            })
            .collect();

        let path = self.output_path("totals", now);
        self.write_rows(&path, &rows)?;
        Ok(path)
    }

    fn output_path(&self, data_name: &str, now: NaiveDateTime) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            PathBuf::from(format!(
                "whosin_{}_{}.{}",
                data_name,
                now.format("%Y-%m-%d"),
                self.format.extension()
            ))
        })
    }

    fn write_rows<T: Serialize>(&self, path: &PathBuf, rows: &[T]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => {
                let mut writer = csv::Writer::from_writer(File::create(path)?);
                for row in rows {
                    writer.serialize(row)?;
                }
                writer.flush()?;
            }
            ExportFormat::Json => {
                let mut file = File::create(path)?;
                file.write_all(serde_json::to_string_pretty(rows)?.as_bytes())?;
            }
        }
        Ok(())
    }
}
