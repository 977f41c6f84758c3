use crate::db::{leaders::Leaders, sessions::Sessions};
use crate::libs::aggregate::TotalsCalculator;
use crate::libs::messages::Message;
use crate::libs::time::start_of_week;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use chrono::Local;

/// Prints today/week totals for every leader at the current instant.
///
/// Open sessions accrue up to "now", so re-running moves the counters.
pub fn cmd() -> Result<()> {
    let now = Local::now().naive_local();
    let leaders = Leaders::new()?.fetch_all()?;
    let sessions = Sessions::new()?.fetch_since(start_of_week(now))?;
    let totals = sessions.totals_by_leader(now);

    msg_print!(Message::TotalsTitle, true);
    View::totals(&leaders, &totals)?;
    Ok(())
}
