//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod account;
pub mod args;
pub mod auth;
pub mod calc;
pub mod context;
pub mod dashboard;
pub mod status;
pub mod twofa;

pub use args::OutputFormat;
pub use context::CommandContext;

/// CryptoMine CLI - cloud mining accounts, earnings and profitability
#[derive(Parser, Debug)]
#[command(name = "cryptomine")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "CRYPTOMINE_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "CRYPTOMINE_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Auth service URL
    #[arg(long, global = true, env = "CRYPTOMINE_AUTH_URL", hide_env = true)]
    pub auth_url: Option<String>,

    /// Mining stats service URL
    #[arg(long, global = true, env = "CRYPTOMINE_MINING_URL", hide_env = true)]
    pub mining_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "CRYPTOMINE_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate daily, monthly and yearly mining profit (offline)
    Calc {
        /// Hashrate in TH/s
        #[arg(long, default_value = "100")]
        hashrate: String,

        /// Power draw in watts
        #[arg(long, default_value = "3000")]
        power: String,

        /// Electricity price in USD per kWh
        #[arg(long, default_value = "0.05")]
        electricity: String,
    },

    /// Create a CryptoMine account
    Register {
        #[arg(long)]
        email: Option<String>,

        /// Full name
        #[arg(long)]
        name: Option<String>,

        #[arg(long, env = "CRYPTOMINE_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Log in and store the session
    Login {
        #[arg(long)]
        email: Option<String>,

        #[arg(long, env = "CRYPTOMINE_PASSWORD", hide_env_values = true)]
        password: Option<String>,

        /// Two-factor code, if the account has 2FA enabled
        #[arg(long)]
        code: Option<String>,
    },

    /// Show profile, mining summary and the last 7 days of earnings
    #[command(visible_alias = "dash")]
    Dashboard,

    /// End the session
    Logout,

    /// Show configuration and session status
    Status,

    /// Manage two-factor authentication
    #[command(subcommand)]
    Twofa(TwofaCommands),

    /// Manage mining accounts
    #[command(subcommand)]
    Account(AccountCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   cryptomine completion bash > /etc/bash_completion.d/cryptomine
  zsh:    cryptomine completion zsh > \"${fpath[1]}/_cryptomine\"
  fish:   cryptomine completion fish > ~/.config/fish/completions/cryptomine.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Two-factor subcommands
#[derive(Subcommand, Debug)]
pub enum TwofaCommands {
    /// Start 2FA enrollment and show the authenticator QR code
    Enable,
}

/// Mining account subcommands
#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// List mining accounts
    #[command(visible_alias = "ls")]
    List,

    /// Add a mining account
    Create {
        /// Account name
        name: String,

        /// Hashrate in TH/s
        #[arg(long, default_value_t = 0.0)]
        hashrate: f64,

        /// Power consumption in watts
        #[arg(long, default_value_t = 0.0)]
        power: f64,
    },

    /// Daily stats for one account (last 30 days)
    Stats {
        /// Account ID
        id: String,
    },
}
