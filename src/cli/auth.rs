//! Register and login commands

use std::io::IsTerminal;

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::CommandContext;
use crate::client::AuthApi;
use crate::client::models::SessionGrant;
use crate::error::{ApiError, Error, Result};
use crate::flow::auth::{
    AuthFlow, LoginStep, MSG_ENTER_CODE, MSG_LOGGED_IN, MSG_TWO_FACTOR_REQUIRED,
};
use crate::session::TokenStore;

/// Codes a user may try before the login is abandoned
const MAX_CODE_ATTEMPTS: usize = 3;

/// Run the register command
pub async fn register(
    ctx: &CommandContext,
    email: Option<String>,
    name: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let email = text_field(email, "Email")?;
    let name = text_field(name, "Full name")?;
    let password = secret_field(password, "Password")?;

    let mut flow = AuthFlow::new(&ctx.client, &ctx.store);
    let message = flow.register(&email, &password, &name).await?;

    println!("{} {}", "✓".green(), message);
    Ok(())
}

/// Run the login command, including the two-factor step when required
pub async fn login(
    ctx: &CommandContext,
    email: Option<String>,
    password: Option<String>,
    code: Option<String>,
) -> Result<()> {
    let email = text_field(email, "Email")?;
    let password = secret_field(password, "Password")?;

    let mut flow = AuthFlow::new(&ctx.client, &ctx.store);

    let grant = match flow.login(&email, &password).await? {
        LoginStep::LoggedIn(grant) => grant,
        LoginStep::TwoFactorRequired => {
            eprintln!("{} {}", "→".yellow(), MSG_TWO_FACTOR_REQUIRED);
            second_factor(&mut flow, code).await?
        }
    };

    print_logged_in(&grant);
    Ok(())
}

/// Finish a pending login. A code given on the command line gets one try;
/// an interactive user gets [`MAX_CODE_ATTEMPTS`].
async fn second_factor<A, S>(
    flow: &mut AuthFlow<'_, A, S>,
    code: Option<String>,
) -> Result<SessionGrant>
where
    A: AuthApi + ?Sized,
    S: TokenStore + ?Sized,
{
    if let Some(code) = code {
        let result = flow.verify_2fa(&code).await;
        if result.is_err() {
            flow.close();
        }
        return result;
    }

    if !is_interactive() {
        flow.close();
        return Err(Error::Validation(MSG_ENTER_CODE.to_string()));
    }

    let mut attempt = 1;
    loop {
        let code: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("2FA code")
            .allow_empty(true)
            .interact_text()?;

        match flow.verify_2fa(&code).await {
            Ok(grant) => return Ok(grant),
            Err(e @ (Error::Validation(_) | Error::Api(ApiError::Rejected { .. })))
                if attempt < MAX_CODE_ATTEMPTS =>
            {
                eprintln!("{} {}", "✗".red(), e);
                attempt += 1;
            }
            Err(e) => {
                flow.close();
                return Err(e);
            }
        }
    }
}

fn print_logged_in(grant: &SessionGrant) {
    println!("{} {}", "✓".green(), MSG_LOGGED_IN);
    if let Some(user) = &grant.user {
        if user.full_name.is_empty() {
            println!("  {}", user.email);
        } else {
            println!("  {} {}", user.full_name.bold(), format!("<{}>", user.email).dimmed());
        }
    }
}

fn is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Use the given value, prompt on a terminal, or fall back to empty input so
/// the flow reports the missing field
fn text_field(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None if is_interactive() => Ok(Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?),
        None => Ok(String::new()),
    }
}

fn secret_field(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None if is_interactive() => Ok(Password::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()?),
        None => Ok(String::new()),
    }
}
