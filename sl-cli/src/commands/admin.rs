//! Admin account management commands.

use std::sync::Arc;

use clap::Subcommand;
use console::style;

use sl_core::config::AppConfig;
use sl_core::error::SlResult;
use sl_services::accounts::{ChangePasswordRequest, WelcomeEmailRequest};
use sl_services::{AccountFunctions, BackendAuth, BackendStore};

use crate::OutputFormat;

#[derive(Subcommand)]
pub enum AdminAction {
    /// Change another user's password (admin only).
    ChangePassword {
        /// Target user id.
        #[arg(long)]
        target: String,
        /// New password (minimum 6 characters).
        #[arg(long)]
        password: String,
    },
    /// Generate a welcome email password-setup link (admin only).
    WelcomeEmail {
        /// Invited account email.
        #[arg(long)]
        email: String,
    },
}

pub async fn run(config: &AppConfig, action: AdminAction, format: OutputFormat) -> SlResult<()> {
    let db = super::open_database(config)?;
    let api = super::build_api_client(config, &db)?;
    let caller = super::stored_caller(&db)?;

    let functions = AccountFunctions::new(
        Arc::new(BackendStore::new(api.clone())),
        Arc::new(BackendAuth::new(api)),
    );

    match action {
        AdminAction::ChangePassword { target, password } => {
            let request = ChangePasswordRequest {
                target_uid: target.clone(),
                new_password: password,
            };
            let response = functions.change_password(Some(&caller), &request).await?;
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string(&response)?);
                }
                OutputFormat::Text => {
                    println!("{} password changed for {target}", style("✓").green());
                }
            }
        }
        AdminAction::WelcomeEmail { email } => {
            let request = WelcomeEmailRequest { email };
            let response = functions.send_welcome_email(Some(&caller), &request).await?;
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string(&response)?);
                }
                OutputFormat::Text => {
                    println!("{} setup link: {}", style("✓").green(), response.link);
                }
            }
        }
    }

    Ok(())
}
