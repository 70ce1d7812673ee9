use anyhow::ensure;
use clap::Subcommand;
use helvion_config::Config;
use helvion_email_contracts::{Email, EmailBody, EmailService};
use helvion_models::email_address::EmailAddressWithName;

use crate::email;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test { recipient: EmailAddressWithName },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddressWithName) -> anyhow::Result<()> {
    let email_service = email::connect(&config.smtp)?;

    let ok = email_service
        .send(Email {
            sender_name: None,
            recipient,
            reply_to: None,
            subject: "Email Deliverability Test".into(),
            body: EmailBody::Text("Email deliverability seems to be working!".into()),
        })
        .await?;

    ensure!(ok, "Failed to send email");

    println!("Email sent");

    Ok(())
}
