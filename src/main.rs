//! CryptoMine CLI - companion for the CryptoMine cloud mining service

use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

mod cli;
mod client;
mod config;
mod error;
mod flow;
mod models;
mod output;
mod session;

use cli::args::GlobalOptions;
use cli::{AccountCommands, Cli, CommandContext, Commands, TwofaCommands};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        log::debug!("{:?}", err);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `warn` by default, `debug` for this crate with `--debug`; `RUST_LOG` wins
fn init_logging(debug: bool) {
    let default_filter = if debug { "cryptomine=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Status => cli::status::run(&opts),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "cryptomine", &mut io::stdout());
            Ok(())
        }
        Commands::Calc {
            hashrate,
            power,
            electricity,
        } => {
            let ctx = CommandContext::new(&opts)?;
            cli::calc::run(ctx.format, &hashrate, &power, &electricity)
        }
        Commands::Register {
            email,
            name,
            password,
        } => {
            let ctx = CommandContext::new(&opts)?;
            cli::auth::register(&ctx, email, name, password).await
        }
        Commands::Login {
            email,
            password,
            code,
        } => {
            let ctx = CommandContext::new(&opts)?;
            cli::auth::login(&ctx, email, password, code).await
        }
        Commands::Dashboard => {
            let ctx = CommandContext::new(&opts)?;
            cli::dashboard::run(&ctx).await
        }
        Commands::Logout => {
            let ctx = CommandContext::new(&opts)?;
            cli::dashboard::logout(&ctx).await
        }
        Commands::Twofa(TwofaCommands::Enable) => {
            let ctx = CommandContext::new(&opts)?;
            cli::twofa::enable(&ctx).await
        }
        Commands::Account(account_cmd) => {
            let ctx = CommandContext::new(&opts)?;
            match account_cmd {
                AccountCommands::List => cli::account::list(&ctx).await,
                AccountCommands::Create {
                    name,
                    hashrate,
                    power,
                } => cli::account::create(&ctx, &name, hashrate, power).await,
                AccountCommands::Stats { id } => cli::account::stats(&ctx, &id).await,
            }
        }
    }
}
