//! Global CLI options shared across all commands
//!
//! The precedence for every option is: CLI flag > environment variable >
//! config file > default. This struct captures the CLI/env layer; config
//! file values are folded in by `CommandContext`.

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format; `None` defers to the config file
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.cryptomine/config.yaml)
    pub config: Option<String>,

    /// Auth service URL override
    pub auth_url: Option<String>,

    /// Mining service URL override
    pub mining_url: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            auth_url: cli.auth_url.clone(),
            mining_url: cli.mining_url.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn auth_url_ref(&self) -> Option<&str> {
        self.auth_url.as_deref()
    }

    pub fn mining_url_ref(&self) -> Option<&str> {
        self.mining_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli_copies_globals() {
        let cli = Cli::parse_from([
            "cryptomine",
            "status",
            "--format",
            "json",
            "--config",
            "/tmp/cm.yaml",
            "--auth-url",
            "http://localhost:1/auth",
        ]);

        let opts = GlobalOptions::from_cli(&cli);

        assert_eq!(opts.format, Some(OutputFormat::Json));
        assert_eq!(opts.config_ref(), Some("/tmp/cm.yaml"));
        assert_eq!(opts.auth_url_ref(), Some("http://localhost:1/auth"));
    }

    #[test]
    fn test_none_accessors() {
        let opts = GlobalOptions::default();

        assert_eq!(opts.format, None);
        assert_eq!(opts.config_ref(), None);
        assert_eq!(opts.auth_url_ref(), None);
        assert_eq!(opts.mining_url_ref(), None);
    }
}
