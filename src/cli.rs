use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "drivegauge")]
#[command(about = "A terminal dashboard for scraped disk-drive prices")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Open the interactive dashboard
    #[cfg(feature = "tui")]
    Dash(DashArgs),

    /// Fetch the latest dataset and print it
    Fetch(FetchArgs),

    /// List available historical data files
    Files(FilesArgs),

    /// Fetch a specific data file and print it
    Show(ShowArgs),
}

#[cfg(feature = "tui")]
#[derive(Parser)]
pub struct DashArgs {
    /// Backend API base URL
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    pub api: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,
}

#[derive(Parser)]
pub struct FetchArgs {
    /// Backend API base URL
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    pub api: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Output as JSON instead of table
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Show detailed output including diagnostics
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

#[derive(Parser)]
pub struct FilesArgs {
    /// Backend API base URL
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    pub api: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Output as JSON instead of table
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Show detailed output including diagnostics
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Data file name as reported by 'files'
    pub name: String,

    /// Backend API base URL
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    pub api: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Output as JSON instead of table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
