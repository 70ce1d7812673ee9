use std::sync::Arc;

use anyhow::Context;
use helvion_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};
use helvion_email_contracts::{Email, EmailBody, EmailService};
use helvion_models::{
    contact::ContactSubmission,
    email_address::{EmailAddress, EmailAddressWithName},
};
use helvion_templates_contracts::{
    ContactMessageTemplate, ContactMessageTextTemplate, TemplateService,
};
use tracing::info;

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Email, Template> {
    email: Email,
    template: Template,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Inbox receiving the relayed messages.
    pub email: Arc<EmailAddressWithName>,
}

impl<EmailS, Template> ContactFeatureServiceImpl<EmailS, Template> {
    pub fn new(email: EmailS, template: Template, config: ContactFeatureConfig) -> Self {
        Self {
            email,
            template,
            config,
        }
    }
}

impl<EmailS, Template> ContactFeatureService for ContactFeatureServiceImpl<EmailS, Template>
where
    EmailS: EmailService,
    Template: TemplateService,
{
    async fn send_message(
        &self,
        submission: ContactSubmission,
    ) -> Result<(), ContactSendMessageError> {
        let ContactSubmission {
            name,
            email,
            message,
        } = submission;

        let reply_to = email
            .parse::<EmailAddress>()
            .context("Failed to parse the email address of the submitter")?;

        let html = self.template.render(&ContactMessageTemplate {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })?;
        let text = self.template.render(&ContactMessageTextTemplate {
            name: name.to_string(),
            email: email.to_string(),
            message: message.into_inner(),
        })?;

        let email = Email {
            sender_name: Some(format!("{name} (Vía Helvion)")),
            recipient: (*self.config.email).clone(),
            reply_to: Some(reply_to.into()),
            subject: format!("Nueva Propuesta Comercial de: {name}"),
            body: EmailBody::Alternative { text, html },
        };

        if !self.email.send(email).await? {
            return Err(ContactSendMessageError::Send);
        }

        info!("relayed contact message");

        Ok(())
    }
}
