use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blogdash")]
#[command(about = "Article manager with TUI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Screen to open the TUI on: "/", "/register" or "/list" (overrides config)
    #[arg(long, value_name = "ROUTE")]
    pub route: Option<String>,

    /// API base URL, e.g. http://localhost:8080 (overrides config)
    #[arg(long, global = true, value_name = "URL")]
    pub server: Option<String>,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and remember the session token
    Login {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        password: String,
    },

    /// Create a new account
    Register {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        password: String,
    },

    /// Print all articles
    List,

    /// Create an article
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        #[arg(long)]
        content: String,
    },

    /// Replace the title and content of an article
    Edit {
        /// Article id
        id: String,

        #[arg(long)]
        title: String,

        #[arg(long)]
        content: String,
    },

    /// Delete an article
    Delete {
        /// Article id
        id: String,
    },

    /// Forget the stored session token
    Logout,

    /// Show config status and location, or create default config if missing
    InitConfig,
}

pub fn parse() -> Cli {
    Cli::parse()
}
