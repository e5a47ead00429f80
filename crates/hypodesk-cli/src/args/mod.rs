// Commands are grouped by the screen they stand in for: `topics` and `feed`
// are the dashboard, `hypothesis` is the editing workspace, and `dashboard`
// opens the interactive view over both.

mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "hypodesk")]
#[command(about = "Track and review reimbursement policy hypotheses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $HYPODESK_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Send every request to this base URL instead of the configured services
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
