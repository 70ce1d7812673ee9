use std::sync::Arc;

use axum::{
    http::{HeaderMap, StatusCode},
    routing, Json, Router,
};
use helvion_client::{
    ContactApi, ContactField, ContactForm, ContactRequest, HeadlessPage, HttpContactApi,
    SubmissionState, SubmitOutcome,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use url::Url;

async fn serve(status: StatusCode) -> Url {
    let router = Router::new().route(
        "/api/contacto",
        routing::post(move |headers: HeaderMap, Json(body): Json<Value>| async move {
            let user_agent = headers
                .get("User-Agent")
                .and_then(|ua| ua.to_str().ok())
                .unwrap_or_default();
            if !user_agent.starts_with("Helvion Contact Client") {
                return StatusCode::BAD_REQUEST;
            }
            if body != json!({"nombre": "Carlos", "email": "carlos@x.com", "mensaje": "Hola"}) {
                return StatusCode::UNPROCESSABLE_ENTITY;
            }
            status
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });

    format!("http://{addr}").parse().unwrap()
}

fn carlos() -> ContactRequest {
    ContactRequest {
        nombre: "Carlos".into(),
        email: "carlos@x.com".into(),
        mensaje: "Hola".into(),
    }
}

#[tokio::test]
async fn send_ok() {
    let url = serve(StatusCode::OK).await;
    let api = HttpContactApi::new(&url).unwrap();

    api.send(&carlos()).await.unwrap();
}

#[tokio::test]
async fn send_server_error() {
    let url = serve(StatusCode::INTERNAL_SERVER_ERROR).await;
    let api = HttpContactApi::new(&url).unwrap();

    let result = api.send(&carlos()).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn send_unreachable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap()).parse().unwrap();
    drop(listener);
    let api = HttpContactApi::new(&url).unwrap();

    let result = api.send(&carlos()).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn form_against_server() {
    for (status, outcome, state) in [
        (StatusCode::OK, SubmitOutcome::Sent, SubmissionState::Sent),
        (StatusCode::BAD_REQUEST, SubmitOutcome::Failed, SubmissionState::Idle),
    ] {
        let url = serve(status).await;
        let api = HttpContactApi::new(&url).unwrap();
        let mut form = ContactForm::open(api, Arc::new(HeadlessPage), || {});
        form.change(ContactField::Name, "Carlos");
        form.change(ContactField::Email, "carlos@x.com");
        form.change(ContactField::Message, "Hola");

        assert_eq!(form.submit().await, outcome);
        assert_eq!(form.state(), state);
    }
}
