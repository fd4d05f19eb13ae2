//! Request body validation.
//!
//! [`validate_request`] turns a raw JSON body into either sanitized data or a
//! structured error payload. The operation mode is picked by the target type:
//! [`crate::api::dto::user::CreateUserRequest`] for `create`,
//! [`crate::api::dto::user::UpdateUserRequest`] for `update`.
//!
//! Error payloads share the shape of [`validator::ValidationErrors`]:
//!
//! ```json
//! { "email": [ { "code": "email", "message": "Invalid email address", "params": { ... } } ] }
//! ```
//!
//! Bodies that are not JSON, or do not match the expected fields, are reported
//! under the `body` key.

use axum::{Json, extract::rejection::JsonRejection};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use validator::Validate;

use crate::error::{AppError, validation_details};

/// A request body type the validator can produce.
pub trait Payload: DeserializeOwned + Validate {
    /// Operation tag, used in logs.
    const MODE: &'static str;

    /// Normalizes fields before rules are checked.
    fn sanitize(self) -> Self;
}

/// Outcome of validating one request. Either data or an error, never both.
#[derive(Debug)]
pub enum ValidationResult<T> {
    Data(T),
    Error(Value),
}

impl<T> ValidationResult<T> {
    pub fn into_result(self) -> Result<T, AppError> {
        match self {
            ValidationResult::Data(data) => Ok(data),
            ValidationResult::Error(details) => Err(AppError::bad_request(details)),
        }
    }
}

/// Validates a raw request body for the mode given by `T`.
pub fn validate_request<T: Payload>(
    body: Result<Json<Value>, JsonRejection>,
) -> ValidationResult<T> {
    let raw = match body {
        Ok(Json(raw)) => raw,
        Err(rejection) => {
            tracing::debug!(mode = T::MODE, error = %rejection, "Unreadable request body");
            return ValidationResult::Error(body_error("invalid_json", rejection.body_text()));
        }
    };

    let payload = match serde_json::from_value::<T>(raw) {
        Ok(payload) => payload.sanitize(),
        Err(e) => {
            tracing::debug!(mode = T::MODE, error = %e, "Request body does not match schema");
            return ValidationResult::Error(body_error("invalid_payload", e.to_string()));
        }
    };

    match payload.validate() {
        Ok(()) => ValidationResult::Data(payload),
        Err(errors) => ValidationResult::Error(validation_details(&errors)),
    }
}

fn body_error(code: &str, message: String) -> Value {
    json!({ "body": [ { "code": code, "message": message, "params": {} } ] })
}
