//! CLI argument parsing

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::export::ExportFormat;

/// Interactive donut chart of the research data life cycle
#[derive(Parser, Debug, Clone)]
#[command(name = "lifecycle-wheel", version, about)]
pub struct Args {
    /// Write logs here instead of the default data directory
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Open the interactive wheel (default)
    Run,

    /// Render the wheel without a terminal
    Export {
        #[arg(short, long, value_enum, default_value = "html")]
        format: ExportFormat,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Phase id to show as active
        #[arg(long)]
        select: Option<u32>,
    },
}
