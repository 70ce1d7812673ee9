use std::time::Duration;

use anyhow::anyhow;
use helvion_config::SmtpTls;
use helvion_email_contracts::{Email, EmailBody, EmailService};
use helvion_models::email_address::{EmailAddress, EmailAddressWithName};
use helvion_utils::Apply;
use lettre::{
    message::{header, MessageBuilder, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddress,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

/// Where and how to reach the SMTP server.
#[derive(Debug, Clone)]
pub struct SmtpConnection {
    pub host: String,
    pub port: u16,
    /// Username and password, `None` for unauthenticated relays.
    pub credentials: Option<(String, String)>,
    pub encryption: SmtpEncryption,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpEncryption {
    Implicit,
    Starttls,
    None,
}

impl From<SmtpTls> for SmtpEncryption {
    fn from(value: SmtpTls) -> Self {
        match value {
            SmtpTls::Implicit => Self::Implicit,
            SmtpTls::Starttls => Self::Starttls,
            SmtpTls::None => Self::None,
        }
    }
}

impl EmailServiceImpl {
    /// Build a pooled transport. No connection is opened until the first
    /// email is sent or the server is pinged.
    pub fn new(connection: SmtpConnection, from: EmailAddress) -> anyhow::Result<Self> {
        let builder = match connection.encryption {
            SmtpEncryption::Implicit => {
                AsyncSmtpTransport::<Tokio1Executor>::relay(&connection.host)?
            }
            SmtpEncryption::Starttls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&connection.host)?
            }
            SmtpEncryption::None => {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&connection.host)
            }
        };

        let transport = builder
            .port(connection.port)
            .timeout(connection.timeout)
            .apply_map(connection.credentials, |builder, (username, password)| {
                builder.credentials(Credentials::new(username, password))
            })
            .build();

        Ok(Self { from, transport })
    }

    #[cfg(feature = "dummy")]
    pub fn dummy() -> Self {
        Self::new(
            SmtpConnection {
                host: "localhost".into(),
                port: 25,
                credentials: None,
                encryption: SmtpEncryption::None,
                timeout: None,
            },
            "dummy@example.com".parse().unwrap(),
        )
        .unwrap()
    }

    fn message(&self, email: Email) -> anyhow::Result<Message> {
        let from: EmailAddressWithName = match email.sender_name {
            Some(name) => self.from.clone().with_name(name),
            None => self.from.clone().into(),
        };

        let builder = Message::builder()
            .from(from.0)
            .to(email.recipient.0)
            .apply_map(email.reply_to.map(|x| x.0), MessageBuilder::reply_to)
            .subject(email.subject);

        let message = match email.body {
            EmailBody::Text(body) => builder.header(header::ContentType::TEXT_PLAIN).body(body)?,
            EmailBody::Alternative { text, html } => {
                builder.multipart(MultiPart::alternative_plain_html(text, html))?
            }
        };

        Ok(message)
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let message = self.message(email)?;

        debug!(envelope = ?message.envelope(), "sending email");

        self.transport
            .send(message)
            .await
            .map(|response| response.is_positive())
            .map_err(Into::into)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}
