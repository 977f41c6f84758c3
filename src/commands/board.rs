use crate::db::leaders::Leaders;
use crate::libs::view::View;
use anyhow::Result;

/// Prints the kiosk board with every leader's current status.
pub fn cmd() -> Result<()> {
    let leaders = Leaders::new()?.fetch_all()?;
    View::board(&leaders)?;
    Ok(())
}
