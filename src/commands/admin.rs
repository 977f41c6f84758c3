//! Administrative seeding and reset tools.
//!
//! Dev tools only. Reset deletes ALL leaders and sessions; seeding upserts
//! the built-in roster with everyone clocked out.

use crate::db::{leaders::Leaders, sessions::Sessions};
use crate::libs::messages::Message;
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

/// The built-in roster of office positions, in display order.
pub const DEFAULT_ROSTER: &[(&str, &str, i32)] = &[
    ("pres", "President", 1),
    ("vp", "Vice President", 2),
    ("spt", "Senator Pro Tempore", 3),
    ("atg", "Attorney General", 4),
    ("treas", "Treasurer", 5),
    ("ag", "Agriculture Senator", 6),
    ("bus", "Business Senator", 7),
    ("ceis", "CEIS Senator", 8),
    ("class", "CLASS Senator", 9),
    ("cchm", "CCHM Senator", 10),
    ("eng", "Engineering Senator", 11),
    ("env", "Environmental Design Senator", 12),
    ("sci", "Science Senator", 13),
    ("rsa", "RSA Senator", 14),
    ("sic", "SIC Senator", 15),
    ("mcc", "MCC Senator", 16),
    ("greek", "Greek Senator", 17),
    ("bn", "Secretary of Basic Needs", 18),
    ("ext", "Secretary of External Affairs", 19),
    ("adv", "Officer of Advocacy", 20),
    ("ia", "Officer of Internal Affairs", 21),
    ("pr", "Officer of Public Relations", 22),
    ("sus", "Officer of Sustainability", 23),
];

#[derive(Debug, Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    command: AdminCommands,
}

#[derive(Debug, Subcommand)]
enum AdminCommands {
    #[command(about = "Seed the built-in leader roster")]
    Seed,
    #[command(about = "Delete ALL leaders and sessions")]
    Reset(ResetArgs),
}

#[derive(Debug, Args)]
pub struct ResetArgs {
    #[arg(short, long, help = "Skip the confirmation prompt")]
    yes: bool,
}

pub fn cmd(args: AdminArgs) -> Result<()> {
    match args.command {
        AdminCommands::Seed => seed(),
        AdminCommands::Reset(reset_args) => reset(reset_args),
    }
}

fn seed() -> Result<()> {
    let count = Leaders::new()?.seed(DEFAULT_ROSTER)?;
    msg_success!(Message::RosterSeeded(count));
    Ok(())
}

fn reset(args: ResetArgs) -> Result<()> {
    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmReset.to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_print!(Message::ResetCancelled);
            return Ok(());
        }
    }

    // Sessions go first so no session ever references a deleted leader.
    let sessions_deleted = Sessions::new()?.delete_all()?;
    let leaders_deleted = Leaders::new()?.delete_all()?;
    msg_success!(Message::ResetCompleted(leaders_deleted, sessions_deleted));
    Ok(())
}
