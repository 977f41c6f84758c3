use crate::libs::export::{ExportData, ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(long, value_enum, default_value = "csv", help = "Output format")]
    format: ExportFormat,

    #[arg(long, value_enum, default_value = "sessions", help = "What to export")]
    data: ExportData,

    #[arg(short, long, help = "Output file path")]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let path = Exporter::new(args.format, args.output).export(args.data)?;
    msg_success!(Message::DataExported(path.display().to_string()));
    Ok(())
}
