/// Request and response bodies of the validation endpoint.
pub mod email;

/// # Health Status Response
///
/// Operational status of the service with a timestamp and the number of
/// blacklisted hosts currently loaded.
pub mod health;
