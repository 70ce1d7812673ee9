use std::sync::Arc;

use anyhow::anyhow;
use axum::{body::Bytes, extract::State, http::StatusCode, response::Response, routing, Router};
use helvion_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};
use helvion_models::contact::ContactSubmission;

use super::{error, internal_server_error, message};
use crate::models::contact::ApiContactRequest;

pub const CONTACT_ROUTE: &str = "/api/contacto";

const INCOMPLETE_PARAMETERS: &str = "Parámetros de conexión incompletos.";
const INVALID_EMAIL: &str = "Formato de correo electrónico inválido.";
const SENT: &str = "Transmisión exitosa";

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route(CONTACT_ROUTE, routing::post(send_message))
        .with_state(service)
}

async fn send_message(service: State<Arc<impl ContactFeatureService>>, body: Bytes) -> Response {
    let request = match serde_json::from_slice::<ApiContactRequest>(&body) {
        Ok(request) => request,
        Err(err) => return internal_server_error(err),
    };

    let submission = match ContactSubmission::try_from(request) {
        Ok(submission) => submission,
        Err(errors) if errors.has_missing() => {
            return error(StatusCode::BAD_REQUEST, INCOMPLETE_PARAMETERS)
        }
        Err(_) => return error(StatusCode::BAD_REQUEST, INVALID_EMAIL),
    };

    match service.send_message(submission).await {
        Ok(()) => message(StatusCode::OK, SENT),
        Err(ContactSendMessageError::Send) => {
            internal_server_error(anyhow!("smtp server rejected the contact message"))
        }
        Err(ContactSendMessageError::Other(err)) => internal_server_error(err),
    }
}
