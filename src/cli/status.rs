//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::session::mask_token;

/// Run the status command. Reads local config only.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "CryptoMine Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let config = if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
        Config::load_from(config_path)?
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not created yet)".dimmed()
        );
        Config::default()
    };

    println!();

    match config.session_token.as_deref().filter(|t| !t.is_empty()) {
        Some(token) => println!("{} Logged in (session {})", "✓".green(), mask_token(token)),
        None => {
            println!("{} Not logged in", "✗".red());
            println!("  → Run 'cryptomine login' to sign in");
        }
    }

    println!(
        "{} Auth service: {}",
        "○".dimmed(),
        config.resolve_auth_url(opts.auth_url_ref()).cyan()
    );
    println!(
        "{} Mining service: {}",
        "○".dimmed(),
        config.resolve_mining_url(opts.mining_url_ref()).cyan()
    );

    if let Some(format) = &config.preferences.format {
        println!("{} Default format: {}", "○".dimmed(), format);
    }

    println!();
    Ok(())
}
