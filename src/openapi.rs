use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `utoipa` annotations on the handlers.
///
/// # Endpoints
/// - Health Check: `GET /health`
/// - Email Validation: `POST /`
///
/// # Schemas
/// - `HealthResponse`: Service status payload
/// - `EmailForm`: Form body of the validation endpoint
/// - `ValidationResponse`: Verdict or error payload
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::email::validate_email,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::email::EmailForm,
            crate::models::email::ValidationResponse
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Email Validation", description = "Email syntax and host blacklist validation")
    ),
    info(
        description = "Validates email address syntax and rejects blacklisted hosts",
        title = "Email Verifier API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_endpoints() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/"));
        assert!(doc.paths.paths.contains_key("/health"));
        assert_eq!(doc.info.title, "Email Verifier API");
    }

    #[test]
    fn test_document_serializes() {
        let json = ApiDoc::openapi().to_json().unwrap();
        assert!(json.contains("ValidationResponse"));
        assert!(json.contains("application/x-www-form-urlencoded"));
    }
}
