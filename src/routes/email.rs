use crate::error::RequestError;
use crate::models::email::{EmailForm, ValidationResponse};
use crate::validation::engine::{Reason, Validator};
use actix_web::{HttpResponse, post, web};

/// # Email Validation Endpoint
///
/// Validates an address submitted as the `email` field of a form body:
/// 1. Splits it into user and host on the last `@`
/// 2. Matches the user and host grammars
/// 3. Looks the host up in the blacklist
///
/// ## Request
/// - Method: POST
/// - Body: `application/x-www-form-urlencoded` with an `email` field
///
/// ## Responses
/// - **200 OK**: The address was checked; `valid` carries the verdict
/// - **500 Internal Server Error**:
///   - Body could not be decoded
///   - `email` field missing or empty (a repeated field uses its first value)
///   - Address has no usable `@` split
///
/// ## Example Request
/// ```text
/// POST /
/// Content-Type: application/x-www-form-urlencoded
///
/// email=user@example.com
/// ```
#[utoipa::path(
    post,
    path = "/",
    request_body(
        content = EmailForm,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Address checked", body = ValidationResponse),
        (status = 500, description = "Request could not be processed", body = ValidationResponse)
    ),
    tag = "Email Validation"
)]
#[post("/")]
pub async fn validate_email(
    fields: web::Form<Vec<(String, String)>>,
    validator: web::Data<Validator>,
) -> Result<HttpResponse, RequestError> {
    let form = EmailForm::from_fields(fields.into_inner());
    let email = form.email.trim();
    if email.is_empty() {
        return Err(RequestError::MissingEmail);
    }

    let verdict = validator.validate(email);
    if let Reason::Malformed(source) = verdict.reason {
        return Err(RequestError::Unparsable {
            email: verdict.email,
            source,
        });
    }

    Ok(HttpResponse::Ok().json(ValidationResponse::from_verdict(&verdict)))
}

/// Answers undecodable form bodies with the same JSON error shape as the
/// handler instead of actix' plain-text 400.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .error_handler(|err, _req| RequestError::Undecodable(err.to_string()).into())
}

/// Configures the validation route at the service root
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(form_config()).service(validate_email);
}
