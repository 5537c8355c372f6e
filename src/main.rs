use actix_web::{App, HttpServer, middleware::Logger, web::Data};
use clap::Parser;
use email_verifier::config::Configuration;
use email_verifier::openapi::ApiDoc;
use email_verifier::telemetry;
use email_verifier::validation::blacklist::Blacklist;
use email_verifier::validation::engine::Validator;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Email Verifier Service Entry Point
///
/// Loads the configuration (`.env`, environment, flags), reads the host
/// blacklist once and serves:
/// - Validation: `POST /`
/// - Health: `GET /health`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init_tracing();

    let config = Configuration::parse();
    tracing::info!(?config, "Loaded configuration");

    let validator = Data::new(Validator::new(Blacklist::load(&config.blacklist)));

    tracing::info!(host = %config.host, port = config.port, "Starting HTTP server");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(validator.clone())
            .configure(email_verifier::routes::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
