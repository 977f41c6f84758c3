//! Live dashboard command.
//!
//! Re-renders the in-office list and the totals table on a recurring tick
//! so elapsed durations keep moving while anyone is clocked in. The tick
//! only reads; all state mutation stays with the clock and sweep commands,
//! except for the optional sweep run at startup.
//!
//! Every render works from a fresh snapshot of leaders and the week's
//! sessions, replacing whatever was displayed before. Ctrl-C releases the
//! session watch registry before exiting.

use crate::db::attendance::Attendance;
use crate::db::{leaders::Leaders, sessions::Sessions};
use crate::libs::aggregate::TotalsCalculator;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::time::start_of_week;
use crate::libs::view::View;
use crate::libs::watcher::WatchRegistry;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::Local;
use tokio::time::{self, Duration};

pub async fn cmd() -> Result<()> {
    let config = Config::read().unwrap_or_default().watch.unwrap_or_default();
    let refresh_interval = config.refresh_interval.max(1);

    if config.sweep_on_start {
        let closed = Attendance::new()?.sweep()?;
        if closed > 0 {
            msg_info!(Message::SweepClosed(closed));
        }
    }

    let mut leaders_db = Leaders::new()?;
    let mut sessions_db = Sessions::new()?;
    let mut registry = WatchRegistry::new()?;

    msg_print!(Message::WatchStarted(refresh_interval));
    let mut ticker = time::interval(Duration::from_secs(refresh_interval));

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                render(&mut leaders_db, &mut sessions_db, &mut registry)?;
            }
            _ = tokio::signal::ctrl_c() => {
                registry.close_all();
                msg_print!(Message::WatchStopped, true);
                break;
            }
        }
    }
    Ok(())
}

fn render(leaders_db: &mut Leaders, sessions_db: &mut Sessions, registry: &mut WatchRegistry) -> Result<()> {
    let now = Local::now().naive_local();
    let leaders = leaders_db.fetch_all()?;
    registry.sync(&leaders);

    let sessions = sessions_db.fetch_since(start_of_week(now))?;
    let totals = sessions.totals_by_leader(now);

    // Repaint from the top left on every tick.
    print!("\x1B[2J\x1B[1;1H");

    msg_print!(Message::InOfficeNow);
    if registry.is_empty() {
        msg_print!(Message::NoOneInOffice);
    } else {
        View::in_office(&leaders, registry, now)?;
    }

    msg_print!(Message::TotalsTitle, true);
    View::totals(&leaders, &totals)?;
    Ok(())
}
