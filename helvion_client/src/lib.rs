//! Client side of the contact relay: the form controller driving a contact
//! modal and the HTTP client talking to `POST /api/contacto`.

pub use api::{ContactApi, ContactRequest, HttpContactApi};
#[cfg(any(test, feature = "mock"))]
pub use api::MockContactApi;
pub use form::{
    ContactField, ContactFields, ContactForm, ContactFormErrors, HeadlessPage, Page,
    SubmissionState, SubmitOutcome,
};

mod api;
mod form;
