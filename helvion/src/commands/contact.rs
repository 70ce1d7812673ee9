use std::sync::Arc;

use anyhow::bail;
use clap::Args;
use helvion_client::{
    ContactField, ContactForm, ContactFormErrors, HeadlessPage, HttpContactApi, SubmitOutcome,
};
use url::Url;

/// Submit a message through the contact form of a running server
#[derive(Debug, Args)]
pub struct ContactCommand {
    /// Base url of the server
    #[arg(long, default_value = "http://127.0.0.1:8000/")]
    url: Url,
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    message: String,
}

impl ContactCommand {
    pub async fn invoke(self) -> anyhow::Result<()> {
        let api = HttpContactApi::new(&self.url)?;
        let mut form = ContactForm::open(api, Arc::new(HeadlessPage), || {});
        form.change(ContactField::Name, self.name);
        form.change(ContactField::Email, self.email);
        form.change(ContactField::Message, self.message);

        match form.submit().await {
            SubmitOutcome::Sent => {
                println!("Message sent");
                Ok(())
            }
            SubmitOutcome::Invalid | SubmitOutcome::Failed => bail!(describe(form.errors())),
            SubmitOutcome::Ignored => bail!("Form was not ready to submit"),
        }
    }
}

fn describe(errors: &ContactFormErrors) -> String {
    [
        ("name", errors.name),
        ("email", errors.email),
        ("message", errors.message),
        ("error", errors.general),
    ]
    .into_iter()
    .filter_map(|(label, error)| error.map(|error| format!("{label}: {error}")))
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_errors() {
        let errors = ContactFormErrors {
            name: Some("missing"),
            email: None,
            message: Some("empty"),
            general: None,
        };

        assert_eq!(describe(&errors), "name: missing\nmessage: empty");
    }
}
