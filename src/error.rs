use crate::models::email::ValidationResponse;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

/// Reasons a raw string cannot be split into user and host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("email address is empty")]
    Empty,
    #[error("missing '@' separator")]
    MissingSeparator,
    #[error("user portion is empty")]
    EmptyUser,
    #[error("host portion is empty")]
    EmptyHost,
}

/// Message shared by the verdict and the HTTP error for an address that
/// could not be split.
pub fn malformed_message(error: &AddressError) -> String {
    format!("invalid email format: {error}")
}

/// Failures of the request itself, as opposed to an address that was
/// received and found invalid. All of them are answered with HTTP 500.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("unable to decode request body: {0}")]
    Undecodable(String),
    #[error("no email address provided")]
    MissingEmail,
    #[error("{}", malformed_message(.source))]
    Unparsable {
        email: String,
        #[source]
        source: AddressError,
    },
}

impl ResponseError for RequestError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        let email = match self {
            RequestError::Unparsable { email, .. } => email.as_str(),
            _ => "",
        };
        HttpResponse::build(self.status_code())
            .json(ValidationResponse::error(email, "", "", self.to_string()))
    }
}
