//! Kiosk clock-in and clock-out commands.
//!
//! State machine rejections (unknown leader, already in, not in) are
//! surfaced as short messages and the command still exits cleanly, so a
//! kiosk stays usable after a mistyped id or a double tap.

use crate::db::attendance::Attendance;
use crate::libs::error::AttendanceError;
use crate::libs::messages::Message;
use crate::libs::session::SessionState;
use crate::libs::time::format_minutes;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ClockArgs {
    #[arg(required = true, help = "Leader id, e.g. pres")]
    leader: String,
}

pub fn cmd_in(args: ClockArgs) -> Result<()> {
    match Attendance::new()?.clock_in(&args.leader) {
        Ok(_) => msg_success!(Message::ClockedIn(args.leader)),
        Err(AttendanceError::Storage(e)) => return Err(e.into()),
        Err(e) => msg_error!(Message::ClockRejected(e.to_string())),
    }
    Ok(())
}

pub fn cmd_out(args: ClockArgs) -> Result<()> {
    match Attendance::new()?.clock_out(&args.leader) {
        Ok(session) => {
            if let SessionState::Closed { duration_minutes, .. } = session.state {
                msg_success!(Message::ClockedOut(args.leader, format_minutes(duration_minutes as f64)));
            }
        }
        Err(AttendanceError::Storage(e)) => return Err(e.into()),
        Err(e) => msg_error!(Message::ClockRejected(e.to_string())),
    }
    Ok(())
}
