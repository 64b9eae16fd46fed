//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, endpoint resolution, and client initialization.

use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::CryptoMineClient;
use crate::config::Config;
use crate::error::Result;
use crate::flow::SessionOutcome;
use crate::output::json::format_json;
use crate::session::ConfigTokenStore;

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded configuration (empty when no file exists yet)
    pub config: Config,
    /// API client bound to the resolved endpoints
    pub client: CryptoMineClient,
    /// Session token storage in the same config file
    pub store: ConfigTokenStore,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// A missing config file is fine here: commands that need a session find
    /// out through the token store.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_or_default(opts.config_ref())?;

        let client = CryptoMineClient::new(
            config.resolve_auth_url(opts.auth_url_ref()),
            config.resolve_mining_url(opts.mining_url_ref()),
        )?;

        let format = resolve_format(opts.format, &config);
        log::debug!("Output format: {:?}", format);

        Ok(Self {
            store: ConfigTokenStore::new(opts.config_ref()),
            config,
            client,
            format,
        })
    }

    /// Unwrap a session outcome, printing the login hint when there is no
    /// usable session. Neither case is an error.
    pub fn ready<T>(&self, outcome: SessionOutcome<T>) -> Option<T> {
        match outcome {
            SessionOutcome::Ready(value) => Some(value),
            SessionOutcome::NotAuthenticated => {
                eprintln!("{} Not logged in", "→".yellow());
                eprintln!("  Run {} to sign in.", "cryptomine login".cyan());
                None
            }
            SessionOutcome::SessionExpired => {
                eprintln!("{} Session expired", "→".yellow());
                eprintln!("  Run {} to sign in again.", "cryptomine login".cyan());
                None
            }
        }
    }

    /// Print `data` as JSON with the metadata envelope
    pub fn print_json<T: Serialize + ?Sized>(&self, data: &T) -> Result<()> {
        println!("{}", format_json(data)?);
        Ok(())
    }
}

/// Flag/env wins, then `preferences.format`, then pretty
fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.or_else(|| {
        config
            .preferences
            .format
            .as_deref()
            .and_then(OutputFormat::from_name)
    })
    .unwrap_or_default()
}
