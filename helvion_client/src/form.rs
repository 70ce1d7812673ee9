use std::sync::Arc;

use helvion_models::contact::{ContactFieldError, ContactFieldErrors, ContactSubmission};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::api::{ContactApi, ContactRequest};

const NAME_REQUIRED: &str = "El nombre es necesario para saber a quién me dirijo.";
const EMAIL_REQUIRED: &str = "El correo electrónico es obligatorio para poder responderte.";
const EMAIL_INVALID: &str = "Por favor, ingresa un formato de correo válido.";
const MESSAGE_REQUIRED: &str = "Por favor, incluye un mensaje o detalle de tu propuesta.";
const NETWORK_ERROR: &str =
    "Hubo una interrupción en la red. Por favor, intenta de nuevo o contáctame por LinkedIn.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    /// Terminal for the form instance.
    Sent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed, nothing was sent.
    Invalid,
    Sent,
    /// The endpoint could not be reached or rejected the request.
    Failed,
    /// The form was not idle.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// User facing error messages, `None` when there is nothing to report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactFormErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
    pub general: Option<&'static str>,
}

impl ContactFormErrors {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn field_mut(&mut self, field: ContactField) -> &mut Option<&'static str> {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }
}

impl From<ContactFieldErrors> for ContactFormErrors {
    fn from(errors: ContactFieldErrors) -> Self {
        Self {
            name: errors.name.map(|_| NAME_REQUIRED),
            email: errors.email.map(|err| match err {
                ContactFieldError::Required => EMAIL_REQUIRED,
                ContactFieldError::InvalidFormat => EMAIL_INVALID,
            }),
            message: errors.message.map(|_| MESSAGE_REQUIRED),
            general: None,
        }
    }
}

/// Host page of the contact modal.
pub trait Page: Send + Sync {
    fn lock_scroll(&self);
    fn unlock_scroll(&self);
    /// Invoke `on_escape` whenever the user presses escape.
    fn listen_escape(&self, on_escape: Arc<dyn Fn() + Send + Sync>);
    fn unlisten(&self);
}

/// Page without scrolling or a keyboard, e.g. a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessPage;

impl Page for HeadlessPage {
    fn lock_scroll(&self) {}
    fn unlock_scroll(&self) {}
    fn listen_escape(&self, _on_escape: Arc<dyn Fn() + Send + Sync>) {}
    fn unlisten(&self) {}
}

/// Holds the page side effects of an open form and releases them on drop.
struct ModalGuard {
    page: Arc<dyn Page>,
}

impl ModalGuard {
    fn acquire(page: Arc<dyn Page>, on_close: Arc<dyn Fn() + Send + Sync>) -> Self {
        page.lock_scroll();
        page.listen_escape(on_close);
        Self { page }
    }
}

impl Drop for ModalGuard {
    fn drop(&mut self) {
        self.page.unlisten();
        self.page.unlock_scroll();
    }
}

/// Controller of an open contact form.
///
/// A form instance goes through `Idle → Sending → Sent` at most once, to
/// start over the form has to be closed and a new one opened.
pub struct ContactForm<Api> {
    api: Api,
    fields: ContactFields,
    errors: ContactFormErrors,
    state: watch::Sender<SubmissionState>,
    _guard: ModalGuard,
}

impl<Api: ContactApi> ContactForm<Api> {
    pub fn open(
        api: Api,
        page: Arc<dyn Page>,
        on_close: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self {
            api,
            fields: ContactFields::default(),
            errors: ContactFormErrors::default(),
            state,
            _guard: ModalGuard::acquire(page, Arc::new(on_close)),
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn errors(&self) -> &ContactFormErrors {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    pub fn change(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.fields.name,
            ContactField::Email => &mut self.fields.email,
            ContactField::Message => &mut self.fields.message,
        };
        *slot = value.into();

        if self.errors.field_mut(field).take().is_some() {
            self.errors.general = None;
        }
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.state() != SubmissionState::Idle {
            return SubmitOutcome::Ignored;
        }

        let ContactFields {
            name,
            email,
            message,
        } = &self.fields;
        if let Err(errors) = ContactSubmission::validate(name, email, message) {
            self.errors = errors.into();
            return SubmitOutcome::Invalid;
        }
        self.errors = ContactFormErrors::default();

        self.state.send_replace(SubmissionState::Sending);

        let request = ContactRequest {
            nombre: self.fields.name.clone(),
            email: self.fields.email.clone(),
            mensaje: self.fields.message.clone(),
        };
        match self.api.send(&request).await {
            Ok(()) => {
                info!("contact message sent");
                self.state.send_replace(SubmissionState::Sent);
                SubmitOutcome::Sent
            }
            Err(err) => {
                warn!("failed to send contact message: {err:#}");
                self.errors.general = Some(NETWORK_ERROR);
                self.state.send_replace(SubmissionState::Idle);
                SubmitOutcome::Failed
            }
        }
    }

    /// Close the form, releasing the page.
    pub fn close(self) {}
}
