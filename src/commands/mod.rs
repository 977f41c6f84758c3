pub mod admin;
pub mod board;
pub mod clock;
pub mod export;
pub mod init;
pub mod sum;
pub mod sweep;
pub mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Clock a leader in")]
    In(clock::ClockArgs),
    #[command(about = "Clock a leader out")]
    Out(clock::ClockArgs),
    #[command(about = "Show the kiosk board with every leader's status")]
    Board,
    #[command(about = "Show today/week totals per leader")]
    Sum,
    #[command(about = "Live dashboard with in-office timers")]
    Watch,
    #[command(about = "Close sessions left open past midnight")]
    Sweep,
    #[command(about = "Export sessions or totals")]
    Export(export::ExportArgs),
    #[command(about = "Seed or reset attendance data")]
    Admin(admin::AdminArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::In(args) => clock::cmd_in(args),
            Commands::Out(args) => clock::cmd_out(args),
            Commands::Board => board::cmd(),
            Commands::Sum => sum::cmd(),
            Commands::Watch => watch::cmd().await,
            Commands::Sweep => sweep::cmd(),
            Commands::Export(args) => export::cmd(args),
            Commands::Admin(args) => admin::cmd(args),
        }
    }
}
