use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "aurora")]
#[command(about = "Manage a local directory of user profiles", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Data directory (defaults to $AURORA_PATH, then the XDG data dir)"
    )]
    pub data_dir: Option<String>,

    #[arg(long, global = true, help = "Overrides log_level from config.toml")]
    pub log_level: Option<LogLevel>,

    #[arg(long, help = "Location to open on startup, e.g. '#/users/u2'")]
    pub route: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive directory (default)
    Ui,

    /// Print the stored users, seeding demo data on first use
    List {
        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    /// Forget the stored users so demo data is seeded again
    Reset,
}
