use breachcheck_core::DEFAULT_CONFIG_PATH;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "breachcheck",
    version,
    about = "Check if an email address has been compromised in data breaches"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_CONFIG_PATH,
        help = "Path to the TOML config file"
    )]
    pub config: PathBuf,
    #[arg(short, long, global = true, help = "Log debug output to stderr")]
    pub verbose: bool,
    #[arg(long, global = true, hide = true)]
    pub api_url: Option<String>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check email for breaches
    Check {
        #[arg(long, help = "Email address to check")]
        email: String,
        #[arg(long, help = "Truncate response (faster, less detailed)")]
        truncate: bool,
        #[arg(long, help = "Show a summary instead of the full table")]
        summary: bool,
        #[arg(long, help = "Mask the email address in the report")]
        mask: bool,
    },
    /// Show details for a single breach
    Breach {
        #[arg(long, help = "Breach name, e.g. Adobe")]
        name: String,
    },
    /// List every breach known to the service
    Catalog {
        #[arg(long, help = "Only show the newest N breaches")]
        limit: Option<usize>,
    },
    /// Create a config template if none exists
    Init,
}
