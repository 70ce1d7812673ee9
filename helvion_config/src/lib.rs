use std::{net::SocketAddr, path::Path};

use anyhow::Context;
use config::{builder::DefaultState, ConfigBuilder, File, FileFormat};
use helvion_models::{
    email_address::{EmailAddress, EmailAddressWithName},
    Sensitive,
};
use serde::Deserialize;
use url::Url;

pub use duration::Duration;

mod duration;

/// Configuration shipped with the binary, every other source is layered on top.
pub const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

/// Environment variable holding additional config files, separated like `PATH`.
pub const CONFIG_PATHS_ENV: &str = "HELVION_CONFIG";

/// Load the config from the default config, the files listed in
/// [`CONFIG_PATHS_ENV`] and the process environment.
pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var_os(CONFIG_PATHS_ENV)
        .map(|paths| std::env::split_paths(&paths).collect::<Vec<_>>())
        .unwrap_or_default();
    load_with_env(&paths, |name| std::env::var(name).ok())
}

/// Load only the default config, ignoring the process environment.
pub fn load_dev_config() -> anyhow::Result<Config> {
    load_with_env::<&Path>(&[], |_| None)
}

pub fn load_with_env<P: AsRef<Path>>(
    paths: &[P],
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Config> {
    let builder = config::Config::builder()
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    let builder = paths.iter().try_fold(builder, |builder, path| {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        let source = File::from_str(&content, FileFormat::Toml);
        anyhow::Ok(builder.add_source(source))
    })?;

    apply_env_overrides(builder, |name| env(name).filter(|value| !value.is_empty()))?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

fn apply_env_overrides(
    builder: ConfigBuilder<DefaultState>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<ConfigBuilder<DefaultState>> {
    let port = env("SMTP_PORT")
        .map(|port| port.parse::<u16>())
        .transpose()
        .context("SMTP_PORT is not a valid port number")?;

    builder
        .set_override_option("smtp.host", env("SMTP_HOST"))?
        .set_override_option("smtp.port", port.map(i64::from))?
        .set_override_option("smtp.username", env("SMTP_USER"))?
        .set_override_option("smtp.password", env("SMTP_PASSWORD"))?
        .set_override_option("contact.email", env("CONTACT_EMAIL"))
        .map_err(Into::into)
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub smtp: SmtpConfig,
    pub contact: ContactConfig,
    pub health: HealthConfig,
    pub sentry: Option<SentryConfig>,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub address: SocketAddr,
}

#[derive(Debug, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    /// Mailbox used to authenticate and to send every email from.
    pub username: EmailAddress,
    pub password: Sensitive<String>,
    pub tls: SmtpTls,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmtpTls {
    /// TLS from the first byte (SMTPS).
    Implicit,
    /// Plain connection upgraded with `STARTTLS`.
    Starttls,
    /// Unencrypted, only meant for local test servers.
    None,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    /// Inbox receiving the contact form submissions.
    pub email: EmailAddressWithName,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Deserialize)]
pub struct SentryConfig {
    pub dsn: Url,
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, io::Write};

    use pretty_assertions::assert_eq;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect::<HashMap<_, _>>();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn load_default_config() {
        let config = load_dev_config().unwrap();
        assert_eq!(config.smtp.port, 465);
        assert_eq!(config.smtp.tls, SmtpTls::Implicit);
        assert!(config.sentry.is_none());
    }

    #[test]
    fn env_overrides_file_values() {
        let config = load_with_env::<&Path>(
            &[],
            env(&[
                ("SMTP_HOST", "smtp.example.net"),
                ("SMTP_PORT", "587"),
                ("SMTP_USER", "relay@example.net"),
                ("SMTP_PASSWORD", "hunter2"),
                ("CONTACT_EMAIL", "Elian <elian@example.net>"),
            ]),
        )
        .unwrap();

        assert_eq!(config.smtp.host, "smtp.example.net");
        assert_eq!(config.smtp.port, 587);
        assert_eq!(config.smtp.username.as_str(), "relay@example.net");
        assert_eq!(*config.smtp.password, "hunter2");
        assert_eq!(config.contact.email.0.email.to_string(), "elian@example.net");
        assert_eq!(config.contact.email.0.name.as_deref(), Some("Elian"));
    }

    #[test]
    fn empty_env_vars_are_ignored() {
        let config = load_with_env::<&Path>(&[], env(&[("SMTP_PORT", "")])).unwrap();
        assert_eq!(config.smtp.port, 465);
    }

    #[test]
    fn invalid_port() {
        let result = load_with_env::<&Path>(&[], env(&[("SMTP_PORT", "smtps")]));
        assert!(result.is_err());
    }

    #[test]
    fn invalid_sender_mailbox() {
        let result = load_with_env::<&Path>(&[], env(&[("SMTP_USER", "not a mailbox")]));
        assert!(result.is_err());
    }

    #[test]
    fn config_files_are_layered() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[smtp]\nhost = \"localhost\"\nport = 2525\ntls = \"none\"\ntimeout = \"5s\""
        )
        .unwrap();

        let config = load_with_env(&[file.path()], env(&[("SMTP_HOST", "mail.internal")])).unwrap();

        assert_eq!(config.smtp.host, "mail.internal");
        assert_eq!(config.smtp.port, 2525);
        assert_eq!(config.smtp.tls, SmtpTls::None);
        assert_eq!(config.smtp.timeout.map(|t| t.as_secs()), Some(5));
    }

    #[test]
    fn missing_config_file() {
        let result = load_with_env(&[Path::new("/nonexistent/helvion.toml")], env(&[]));
        assert!(result.is_err());
    }
}
