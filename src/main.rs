use actix_web::{App, HttpServer, web::Data};
use liveness_probe::graphql::schema::create_schema;
use liveness_probe::logging::OperatorLog;
use liveness_probe::openapi::ApiDoc;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Liveness Probe Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Liveness endpoint under `/api/v1`
/// - GraphQL endpoint powered by Async-GraphQL
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
/// - Operator log stream backed by the `tracing` subscriber
///
/// # Endpoints
/// - Liveness: `/api/v1/live`
/// - GraphQL: `/api/v1/graphql` (configured in routes)
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Server binds to `HOST`:`PORT`, defaulting to `127.0.0.1:8080`
/// - Environment variables loaded from `.env` file (if present)
/// - Log filtering via `RUST_LOG`
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();

    // Operator log stream shared by the REST and GraphQL surfaces
    let log = OperatorLog::new();
    let schema = create_schema(log.clone());

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .app_data(Data::new(openapi.clone()))
            .app_data(Data::new(schema.clone()))
            .app_data(Data::new(log.clone()))
            .configure(liveness_probe::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((host, port))?
    .run()
    .await
}
