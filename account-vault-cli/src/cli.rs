use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "account-vault")]
#[command(about = "Parse account imports, format change history and compute page windows", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Label language, e.g. zh-CN or en-US (overrides the config file)
    #[arg(long, global = true)]
    pub lang: Option<String>,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show how pasted import text would be parsed, without importing
    Preview {
        /// Input file, or `-` for stdin
        input: String,
    },

    /// Print the page-number markers for a navigation bar
    PageWindow {
        current: u32,

        total: u32,

        /// Page-button budget (defaults to the configured value)
        #[arg(long)]
        max_visible: Option<u32>,
    },

    /// Import into a scratch in-memory store and list the result
    Import {
        /// Input file, or `-` for stdin
        input: String,

        /// Account list page to show after importing
        #[arg(long, default_value = "1")]
        page: u32,

        /// Filter the account list by email or remark
        #[arg(long, default_value = "")]
        search: String,
    },

    /// Print the current 2FA code for a Base32 secret
    Totp {
        /// Secret as stored on the account (spaces and case are ignored)
        secret: String,
    },
}
