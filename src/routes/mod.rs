use actix_web::web;

/// # Health Check Endpoint
///
/// `GET /health`: service status, timestamp and loaded blacklist size.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2023-10-05T12:34:56.789Z",
///   "blacklist_entries": 3
/// }
/// ```
pub mod health;

/// # Email Validation Endpoint
///
/// `POST /` with a form-encoded `email` field.
///
/// ## Responses
/// - **200 OK**: Address was checked, `valid` tells whether it passed
/// - **500 Internal Server Error**: Body undecodable, field missing, or
///   address without a usable `@`
///
/// ## Example Request
/// ```text
/// email=user@example.com
/// ```
pub mod email;

/// # Route Configuration
///
/// Mounts every endpoint at the service root.
///
/// ```text
/// GET /health - Service health status
/// POST /      - Email validation endpoint
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(email::configure_routes);
}
