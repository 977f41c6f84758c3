use crate::db::attendance::Attendance;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;

/// Runs the midnight sweep once. Idempotent, safe to re-run.
pub fn cmd() -> Result<()> {
    let closed = Attendance::new()?.sweep()?;
    if closed > 0 {
        msg_success!(Message::SweepClosed(closed));
    } else {
        msg_info!(Message::SweepNothingStale);
    }
    Ok(())
}
