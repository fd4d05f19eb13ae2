//! Request bodies for the user endpoints.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use validator::Validate;

use crate::api::validation::Payload;
use crate::domain::entities::UpdateUser;

/// Digits with optional leading `+` and common separators.
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 ()\-]{0,19}$").expect("valid phone regex"));

/// Body of `POST /users`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    #[validate(length(max = 255))]
    pub email: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: String,

    /// bcrypt only reads the first 72 bytes.
    #[validate(length(min = 6, max = 72, message = "Password must be 6-72 characters"))]
    pub password: String,
}

impl Payload for CreateUserRequest {
    const MODE: &'static str = "create";

    fn sanitize(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            phone: self.phone.trim().to_string(),
            password: self.password,
        }
    }
}

/// Body of `PUT /users/update/{id}`. Unknown fields such as `password` are
/// ignored, so an update can never touch the stored hash.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    #[validate(length(max = 255))]
    pub email: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: String,
}

impl Payload for UpdateUserRequest {
    const MODE: &'static str = "update";

    fn sanitize(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            phone: self.phone.trim().to_string(),
        }
    }
}

impl From<UpdateUserRequest> for UpdateUser {
    fn from(req: UpdateUserRequest) -> Self {
        UpdateUser {
            name: req.name,
            email: req.email,
            phone: req.phone,
        }
    }
}
