use crate::libs::aggregate::LeaderTotals;
use crate::libs::leader::Leader;
use crate::libs::time::{format_duration, format_minutes};
use crate::libs::watcher::WatchRegistry;
use anyhow::Result;
use chrono::NaiveDateTime;
use prettytable::{row, Table};
use std::collections::HashMap;

pub struct View {}

impl View {
    /// Kiosk board: every leader with their current status.
    pub fn board(leaders: &[Leader]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "ROLE", "STATUS"]);
        for leader in leaders {
            table.add_row(row![leader.id, leader.role, leader.status_label()]);
        }
        table.printstd();

        Ok(())
    }

    /// Who is in office right now, with live elapsed time per leader.
    pub fn in_office(leaders: &[Leader], registry: &WatchRegistry, now: NaiveDateTime) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ROLE", "IN OFFICE FOR"]);
        for leader in leaders.iter().filter(|l| l.is_active) {
            let elapsed = registry
                .check_in_time(&leader.id)
                .map_or_else(|| "(loading check-in time)".to_string(), |check_in| format_duration(&(now - check_in)));
            table.add_row(row![leader.role, elapsed]);
        }
        table.printstd();

        Ok(())
    }

    /// Totals table: today and this week per leader.
    pub fn totals(leaders: &[Leader], totals: &HashMap<String, LeaderTotals>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["LEADER", "TODAY", "THIS WEEK", "STATUS"]);
        for leader in leaders {
            let t = totals.get(&leader.id).copied().unwrap_or_default();
            table.add_row(row![
                leader.role,
                format_minutes(t.today_minutes),
                format_minutes(t.week_minutes),
                leader.status_label()
            ]);
        }
        table.printstd();

        Ok(())
    }
}
