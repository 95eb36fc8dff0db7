//! Transport-level errors.
//!
//! Fatal function errors are not HTTP errors: they travel inside a normal
//! `RunFunctionResponse`. Only requests that cannot be framed as a
//! `RunFunctionRequest` at all end up here.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };
        tracing::debug!(%status, %error, "rejecting request");
        (status, Json(ErrorBody { error })).into_response()
    }
}
