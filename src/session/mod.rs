//! Session token persistence
//!
//! A single slot holds the session token. Login and two-factor verification
//! write it, logout and any rejected authenticated call clear it.

use log::{debug, warn};

use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Storage for the one session token the client knows about
pub trait TokenStore: Send + Sync {
    /// Read the stored token, if any
    fn load(&self) -> Result<Option<String>>;

    /// Replace the stored token
    fn save(&self, token: &str) -> Result<()>;

    /// Remove the stored token; clearing an empty slot is not an error
    fn clear(&self) -> Result<()>;
}

/// Token store backed by the `session_token` entry of the config file
#[derive(Debug, Clone)]
pub struct ConfigTokenStore {
    path: Option<String>,
}

impl ConfigTokenStore {
    /// Store bound to `path`, or the default config location when `None`
    pub fn new(path: Option<&str>) -> Self {
        Self {
            path: path.map(str::to_string),
        }
    }
}

impl TokenStore for ConfigTokenStore {
    fn load(&self) -> Result<Option<String>> {
        let config = Config::load_or_default(self.path.as_deref())?;
        Ok(config.session_token.filter(|t| !t.is_empty()))
    }

    fn save(&self, token: &str) -> Result<()> {
        let mut config = Config::load_or_default(self.path.as_deref())?;
        config.session_token = Some(token.to_string());
        config.save_at(self.path.as_deref())?;
        debug!("Session token stored");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut config = match Config::load_or_default(self.path.as_deref()) {
            Ok(config) => config,
            Err(Error::Config(ConfigError::ParseError(e))) => {
                warn!("Config file is not valid YAML ({}); removing the token line only", e);
                return self.strip_token_line();
            }
            Err(e) => return Err(e),
        };

        if config.session_token.take().is_some() {
            config.save_at(self.path.as_deref())?;
            debug!("Session token cleared");
        }
        Ok(())
    }
}

impl ConfigTokenStore {
    /// Drop the `session_token` line from a file that no longer parses,
    /// leaving every other line as it was
    fn strip_token_line(&self) -> Result<()> {
        let path = Config::resolve_path(self.path.as_deref())?;
        let contents = std::fs::read_to_string(&path)?;

        let kept: Vec<&str> = contents
            .lines()
            .filter(|line| !line.starts_with("session_token:"))
            .collect();

        if kept.len() != contents.lines().count() {
            let mut rewritten = kept.join("\n");
            rewritten.push('\n');
            std::fs::write(&path, rewritten)?;
            debug!("Session token line removed from {}", path.display());
        }
        Ok(())
    }
}

/// Mask a token for display, keeping only a short prefix
pub fn mask_token(token: &str) -> String {
    let prefix: String = token.chars().take(6).collect();
    if prefix.len() < token.len() {
        format!("{}…", prefix)
    } else {
        "…".to_string()
    }
}
