use helvion_config::SmtpConfig;
use helvion_email_impl::{EmailServiceImpl, SmtpConnection};

/// Build the shared SMTP transport.
pub fn connect(config: &SmtpConfig) -> anyhow::Result<EmailServiceImpl> {
    EmailServiceImpl::new(connection(config), config.username.clone())
}

fn connection(config: &SmtpConfig) -> SmtpConnection {
    // an empty password means the server does not authenticate
    let credentials = (!config.password.is_empty())
        .then(|| (config.username.as_str().to_owned(), (*config.password).clone()));

    SmtpConnection {
        host: config.host.clone(),
        port: config.port,
        credentials,
        encryption: config.tls.into(),
        timeout: config.timeout.map(Into::into),
    }
}
