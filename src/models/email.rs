use crate::validation::engine::ValidationVerdict;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Form body accepted by the validation endpoint.
///
/// A missing `email` field becomes an empty string so the handler can
/// answer it with its own error body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct EmailForm {
    #[serde(default)]
    pub email: String,
}

impl EmailForm {
    /// Builds the form from decoded name/value pairs. When `email` repeats,
    /// the first value wins; unknown fields are ignored.
    pub fn from_fields(fields: Vec<(String, String)>) -> Self {
        let email = fields
            .into_iter()
            .find(|(name, _)| name == "email")
            .map(|(_, value)| value)
            .unwrap_or_default();
        Self { email }
    }
}

/// # Validation Result
///
/// Body returned by `POST /` for both outcomes.
///
/// ## Fields
/// - `status`: mirrors the HTTP status (200 or 500)
/// - `message`: `"OK"` or the reason the address or request was rejected
/// - `email`, `user`, `host`: echoed inputs, empty when unknown
/// - `valid`: whether the address passed every check
///
/// ## Example JSON
/// ```json
/// {
///   "status": 200,
///   "message": "OK",
///   "email": "testing@thing.com",
///   "valid": true,
///   "host": "thing.com",
///   "user": "testing"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct ValidationResponse {
    pub status: u16,
    pub message: String,
    pub email: String,
    pub valid: bool,
    pub host: String,
    pub user: String,
}

impl ValidationResponse {
    /// Successful round trip: always status 200, whatever the verdict.
    pub fn from_verdict(verdict: &ValidationVerdict) -> Self {
        Self {
            status: 200,
            message: verdict.message(),
            email: verdict.email.clone(),
            valid: verdict.valid,
            host: verdict.host.clone(),
            user: verdict.user.clone(),
        }
    }

    pub fn error(email: &str, user: &str, host: &str, message: impl Into<String>) -> Self {
        Self {
            status: 500,
            message: message.into(),
            email: email.to_string(),
            valid: false,
            host: host.to_string(),
            user: user.to_string(),
        }
    }
}
