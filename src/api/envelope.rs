//! Uniform HTTP reply contract.
//!
//! Handlers receive an [`Envelope`] as an extractor and finish by calling
//! exactly one [`Respond`] operation on it. Each operation consumes the
//! envelope and yields a [`Reply`], so a second terminal call does not
//! compile.
//!
//! | Operation                 | Status | Body                    |
//! |---------------------------|--------|-------------------------|
//! | `content`                 | 200    | data                    |
//! | `ok`                      | 200    | data                    |
//! | `created`                 | 201    | data                    |
//! | `bad_request`             | 400    | validator payload       |
//! | `not_found`               | 404    | `{"message": ...}`      |
//! | `internal_server_error`   | 500    | `{"message": ...}`      |

use std::convert::Infallible;

use axum::{
    Json,
    extract::{FromRequestParts, OriginalUri},
    http::{Method, StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::error::{AppError, GENERIC_SERVER_ERROR};

/// Terminal outcome of a request. One variant per envelope operation.
#[derive(Debug)]
pub enum Reply {
    Content(Value),
    Ok(Value),
    Created(Value),
    BadRequest(Value),
    NotFound { message: String },
    InternalServerError { message: String },
}

impl Reply {
    pub fn status(&self) -> StatusCode {
        match self {
            Reply::Content(_) | Reply::Ok(_) => StatusCode::OK,
            Reply::Created(_) => StatusCode::CREATED,
            Reply::BadRequest(_) => StatusCode::BAD_REQUEST,
            Reply::NotFound { .. } => StatusCode::NOT_FOUND,
            Reply::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn into_body(self) -> Value {
        match self {
            Reply::Content(data) | Reply::Ok(data) | Reply::Created(data) => data,
            Reply::BadRequest(error) => error,
            Reply::NotFound { message } | Reply::InternalServerError { message } => {
                json!({ "message": message })
            }
        }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(self.into_body())).into_response()
    }
}

/// The six reply operations every handler speaks.
pub trait Respond: Sized {
    fn content<T: Serialize>(self, data: T) -> Reply;

    fn ok<T: Serialize>(self, data: T) -> Reply;

    fn created<T: Serialize>(self, data: T) -> Reply;

    fn bad_request(self, error: Value) -> Reply;

    fn not_found(self, message: impl Into<String>) -> Reply;

    /// Replies 500 with `message`, or with a generic message when `message`
    /// is absent or blank.
    fn internal_server_error(self, message: Option<&str>) -> Reply;

    /// Routes a typed error to the matching operation.
    fn fail(self, error: AppError) -> Reply {
        match error {
            AppError::Validation { details } => self.bad_request(details),
            AppError::NotFound { message } => self.not_found(message),
            err @ AppError::Internal { .. } => self.internal_server_error(err.message()),
        }
    }

    /// Finishes a pipeline: `Ok` goes through `success`, `Err` through
    /// [`Respond::fail`].
    fn finish<T, F>(self, result: Result<T, AppError>, success: F) -> Reply
    where
        F: FnOnce(Self, T) -> Reply,
    {
        match result {
            Ok(data) => success(self, data),
            Err(err) => self.fail(err),
        }
    }
}

/// Per-request envelope. Extracted by axum, consumed by its terminal call.
#[derive(Debug)]
pub struct Envelope {
    method: Method,
    path: String,
}

impl Envelope {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }

    fn serialize<T: Serialize>(self, data: T, wrap: fn(Value) -> Reply) -> Reply {
        match serde_json::to_value(data) {
            Ok(value) => wrap(value),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize response body");
                self.internal_server_error(None)
            }
        }
    }
}

impl Respond for Envelope {
    fn content<T: Serialize>(self, data: T) -> Reply {
        self.serialize(data, Reply::Content)
    }

    fn ok<T: Serialize>(self, data: T) -> Reply {
        self.serialize(data, Reply::Ok)
    }

    fn created<T: Serialize>(self, data: T) -> Reply {
        self.serialize(data, Reply::Created)
    }

    fn bad_request(self, error: Value) -> Reply {
        tracing::debug!(method = %self.method, path = %self.path, "Rejected invalid request");
        Reply::BadRequest(error)
    }

    fn not_found(self, message: impl Into<String>) -> Reply {
        Reply::NotFound {
            message: message.into(),
        }
    }

    fn internal_server_error(self, message: Option<&str>) -> Reply {
        let message = message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(GENERIC_SERVER_ERROR)
            .to_string();

        tracing::error!(
            method = %self.method,
            path = %self.path,
            %message,
            "Request failed with internal error"
        );

        Reply::InternalServerError { message }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Envelope {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let path = parts
            .extensions
            .get::<OriginalUri>()
            .map_or_else(|| parts.uri.path(), |uri| uri.path());
        Ok(Envelope::new(parts.method.clone(), path))
    }
}
