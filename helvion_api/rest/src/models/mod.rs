use serde::Serialize;

pub mod contact;

#[derive(Serialize)]
pub struct ApiError<E> {
    pub error: E,
}

#[derive(Serialize)]
pub struct ApiMessage<M> {
    pub message: M,
}
