use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use engine::EngineError;

use serde::Serialize;
pub use server::{App, ServerState, router, run_with_listener, spawn_with_listener};

mod characters;
mod extract;
mod favorites;
mod planets;
mod server;
mod sitemap;
mod user;
mod vehicles;

/// The one error shape clients ever see.
#[derive(Debug)]
pub enum ServerError {
    Engine(EngineError),
    Generic(String),
    /// The request did not make it past an extractor (bad JSON, bad path).
    Rejected {
        status: StatusCode,
        message: String,
    },
}

#[derive(Serialize)]
struct Error {
    message: String,
    status_code: u16,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::ExistingKey(_) => StatusCode::CONFLICT,
        EngineError::InvalidField(_) => StatusCode::BAD_REQUEST,
        EngineError::Password(_) | EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        EngineError::Password(reason) => {
            tracing::error!("password hashing failed: {reason}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), message_for_engine_error(err)),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
            ServerError::Rejected { status, message } => (status, message),
        };

        let body = Error {
            message,
            status_code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        Self::Rejected {
            status: value.status(),
            message: value.body_text(),
        }
    }
}

impl From<PathRejection> for ServerError {
    fn from(value: PathRejection) -> Self {
        Self::Rejected {
            status: value.status(),
            message: value.body_text(),
        }
    }
}
