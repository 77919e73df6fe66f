//! A minimal expense tracking API.
//!
//! Users, categories and expense records live in an in-memory [Store] and are
//! served as JSON over HTTP. Nothing is persisted: restarting the server
//! starts from an empty store.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde::Serialize;
use tokio::signal;

mod app_state;
mod category;
pub mod endpoints;
mod logging;
mod name;
mod payload;
mod record;
mod routing;
mod store;
mod user;

pub use app_state::AppState;
pub use category::{Category, CategoryId};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use name::Name;
pub use record::{NewRecord, Record, RecordFilter, RecordId};
pub use routing::build_router;
pub use store::Store;
pub use user::{User, UserId};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required field was absent from the request body.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// A field was present but could not be coerced to the expected type.
    ///
    /// The second string describes the expected type, e.g. "an integer".
    #[error("field '{0}' must be {1}")]
    InvalidField(&'static str, &'static str),

    /// A name was given but it is empty once surrounding whitespace is removed.
    #[error("name cannot be empty")]
    EmptyName,

    /// The request body is not a JSON object.
    #[error("invalid JSON body: {0}")]
    InvalidJson(String),

    /// The ID in the request path is not an integer.
    #[error("invalid ID in path: {0}")]
    InvalidPath(String),

    /// The query string could not be parsed.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Records can only be listed with at least one filter.
    #[error("provide at least one of 'user_id' or 'category_id'")]
    MissingFilter,

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The user ID used to create a record does not match an existing user.
    #[error("user {0} does not exist")]
    InvalidUser(UserId),

    /// The category ID used to create a record does not match an existing category.
    #[error("category {0} does not exist")]
    InvalidCategory(CategoryId),

    /// Tried to delete a user that does not exist
    #[error("tried to delete a user that is not in the store")]
    DeleteMissingUser,

    /// Tried to delete a category that does not exist
    #[error("tried to delete a category that is not in the store")]
    DeleteMissingCategory,

    /// Tried to delete a record that does not exist
    #[error("tried to delete a record that is not in the store")]
    DeleteMissingRecord,

    /// Could not acquire the store lock
    #[error("could not acquire the store lock")]
    StoreLockError,
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingField(_)
            | Error::InvalidField(_, _)
            | Error::EmptyName
            | Error::InvalidJson(_)
            | Error::InvalidPath(_)
            | Error::InvalidQuery(_)
            | Error::MissingFilter => StatusCode::BAD_REQUEST,
            Error::NotFound
            | Error::InvalidUser(_)
            | Error::InvalidCategory(_)
            | Error::DeleteMissingUser
            | Error::DeleteMissingCategory
            | Error::DeleteMissingRecord => StatusCode::NOT_FOUND,
            Error::StoreLockError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// The JSON body sent with every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let error = if status.is_server_error() {
            // Internal errors are not intended to be shown to the client.
            tracing::error!("An unexpected error occurred: {}", self);
            "An unexpected error occurred, check the server logs for more details.".to_owned()
        } else {
            self.to_string()
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
    use serde_json::{Value, json};

    use crate::Error;

    async fn response_json(error: Error) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not read response body");

        (
            status,
            serde_json::from_slice(&body).expect("Could not parse response body"),
        )
    }

    #[tokio::test]
    async fn validation_errors_are_bad_requests() {
        let (status, body) = response_json(Error::MissingField("name")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "missing required field 'name'"}));
    }

    #[tokio::test]
    async fn missing_references_are_not_found() {
        let (status, body) = response_json(Error::InvalidUser(999)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "user 999 does not exist"}));
    }

    #[tokio::test]
    async fn lock_error_hides_details() {
        let (status, body) = response_json(Error::StoreLockError).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_ne!(body["error"], json!("could not acquire the store lock"));
    }
}
