use helvion_models::contact::{ContactFieldErrors, ContactSubmission};
use serde::Deserialize;

/// Body of a contact form submission, every field may be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactRequest {
    /// Full name of the sender
    pub nombre: Option<String>,
    /// Email address replies go to
    pub email: Option<String>,
    /// Content of the message
    pub mensaje: Option<String>,
}

impl TryFrom<ApiContactRequest> for ContactSubmission {
    type Error = ContactFieldErrors;

    fn try_from(value: ApiContactRequest) -> Result<Self, Self::Error> {
        ContactSubmission::validate(
            value.nombre.as_deref().unwrap_or_default(),
            value.email.as_deref().unwrap_or_default(),
            value.mensaje.as_deref().unwrap_or_default(),
        )
    }
}
