//! Two-factor enrollment command

use colored::Colorize;
use qrcode::QrCode;
use qrcode::render::unicode;

use crate::cli::{CommandContext, OutputFormat};
use crate::client::AuthApi;
use crate::client::models::TwoFactorSetup;
use crate::error::{Error, Result};
use crate::flow::with_session;

/// Run `twofa enable`
pub async fn enable(ctx: &CommandContext) -> Result<()> {
    let client = &ctx.client;
    let outcome = with_session(&ctx.store, |token| async move {
        client.enable_2fa(&token).await
    })
    .await?;

    let Some(setup) = ctx.ready(outcome) else {
        return Ok(());
    };

    match ctx.format {
        OutputFormat::Json => ctx.print_json(&setup)?,
        OutputFormat::Pretty | OutputFormat::Table => print_setup(&setup)?,
    }

    Ok(())
}

fn print_setup(setup: &TwoFactorSetup) -> Result<()> {
    println!("{}\n", "Scan this code with your authenticator app".bold());
    println!("{}", render_qr(&setup.qr_uri)?);
    println!("Secret: {}", setup.secret.cyan());
    println!("URI:    {}", setup.qr_uri.dimmed());
    Ok(())
}

/// Render `data` as a terminal QR code, two modules per character cell
fn render_qr(data: &str) -> Result<String> {
    let code = QrCode::new(data.as_bytes())
        .map_err(|e| Error::Other(format!("Cannot render QR code: {}", e)))?;

    Ok(code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .quiet_zone(true)
        .build())
}
