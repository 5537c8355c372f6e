use crate::models::health::HealthResponse;
use crate::validation::engine::Validator;
use actix_web::{HttpResponse, Responder, get, web};

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp
/// and the size of the loaded blacklist.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health(validator: web::Data<Validator>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::up(validator.blacklist().len()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::blacklist::Blacklist;
    use actix_web::{App, test};
    use serde_json::from_str;

    #[actix_web::test]
    async fn test_health_endpoint() {
        let blacklist: Blacklist = ["item1", "item2"].into_iter().map(String::from).collect();

        // Set up test app
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Validator::new(blacklist)))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        let body_str = std::str::from_utf8(&body).unwrap();
        let health_response: HealthResponse = from_str(body_str).unwrap();

        assert_eq!(health_response.status, "UP");
        assert_eq!(health_response.blacklist_entries, 2);
        assert!(!health_response.timestamp.is_empty());
    }
}
