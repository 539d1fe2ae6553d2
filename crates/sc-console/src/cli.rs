use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "surplus-portal")]
#[command(about = "Surplus claims investment portal", long_about = None)]
pub struct Cli {
    /// Config file (default: <config_dir>/surplus-portal/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in as a local investor
    Signin {
        /// Email to sign in with
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Sign in with the demo account
    DemoLogin,
    /// Forget the current session
    Logout,
    /// Show the signed-in investor
    Whoami {
        /// Print the session as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create an investor account
    Onboard,
    /// Invest in a package
    Invest {
        /// Package id
        package_id: u64,
    },
    /// Investor dashboard
    Dashboard {
        /// Section id, e.g. `wallet`
        #[arg(short, long)]
        section: Option<String>,
    },
    /// Admin dashboard
    Admin {
        /// Section id, e.g. `transactions`
        #[arg(short, long)]
        section: Option<String>,
    },
    /// Open a portal link such as `/invest/7` or `/personal-info`
    Open {
        path: String,
    },
}
