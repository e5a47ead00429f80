use super::enums::{CompetitorArg, RoleArg, SortArg, StatusArg, TabArg};
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Sign in with a user id, role and password")]
    Login {
        #[arg(long)]
        user_id: String,

        #[arg(long, default_value = "user")]
        role: RoleArg,

        #[arg(long, help = "Password (read from stdin when omitted)")]
        password: Option<String>,
    },

    #[command(about = "End the current session")]
    Logout,

    #[command(about = "Show the signed-in user")]
    Whoami,

    #[command(about = "Browse tracked topics")]
    Topics {
        #[command(subcommand)]
        command: TopicsCommand,
    },

    #[command(about = "Show the activity feed")]
    Feed {
        #[arg(long, default_value = "1", help = "Page number (1-based)")]
        page: usize,

        #[arg(long, help = "Expand a truncated item by its feed position (1-based)")]
        expand: Vec<usize>,
    },

    #[command(about = "Create, edit and remove hypotheses")]
    Hypothesis {
        #[command(subcommand)]
        command: HypothesisCommand,
    },

    #[command(about = "Open the interactive dashboard")]
    Dashboard,

    #[command(about = "Inspect or create the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum TopicsCommand {
    #[command(about = "List topics with sorting, filtering and paging")]
    List {
        #[arg(long, help = "Only show these statuses (repeatable)")]
        status: Vec<StatusArg>,

        #[arg(long, help = "Status tile filter; overrides --status")]
        tile: Option<StatusArg>,

        #[arg(long)]
        sort: Option<SortArg>,

        #[arg(long, requires = "sort", help = "Sort descending")]
        desc: bool,

        #[arg(long, default_value = "1", help = "Page number (1-based)")]
        page: usize,

        #[arg(long, help = "Rows per page (defaults to table.page_size)")]
        page_size: Option<usize>,
    },

    #[command(about = "Count topics per status")]
    Counts,
}

#[derive(Subcommand)]
pub enum HypothesisCommand {
    #[command(about = "List hypotheses")]
    List,

    #[command(about = "Show one hypothesis")]
    Show { id: String },

    #[command(about = "Create or update a hypothesis, optionally attaching a file")]
    Save {
        #[arg(long, help = "Existing hypothesis to update")]
        id: Option<String>,

        #[arg(long, required_unless_present = "id", conflicts_with = "id")]
        name: Option<String>,

        #[arg(long)]
        details: Option<String>,

        #[arg(long)]
        rationale: Option<String>,

        #[arg(long)]
        file: Option<PathBuf>,
    },

    #[command(about = "Delete a hypothesis")]
    Delete {
        id: String,

        #[arg(long, help = "Confirm the deletion")]
        yes: bool,
    },

    #[command(about = "Preview the competitive analysis")]
    Analysis {
        #[arg(long, default_value = "competitors")]
        tab: TabArg,

        #[arg(long, default_value = "all")]
        competitor: CompetitorArg,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write the default configuration file")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
