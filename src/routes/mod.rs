use actix_web::web;

/// # Liveness Check Endpoint
///
/// Answers whether the process is running and able to respond, with no
/// downstream dependency checks.
///
/// ## Response
///
/// - **200 OK**: JSON object with `status` ("success"), a fixed healthy
///   message, and `timestamp` in ISO 8601 format
/// - **500 Internal Server Error**: JSON object with `status` ("error") and
///   a fixed generic message, no timestamp
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "success",
///   "message": "Server is healthy",
///   "timestamp": "2023-10-05T12:34:56.789+00:00"
/// }
/// ```
pub mod liveness;

/// # GraphQL Endpoints
///
/// Query surface mirroring the REST liveness check, plus the interactive
/// Playground for development.
///
/// ## Endpoints
/// - POST `/graphql`: executes GraphQL queries against the schema
/// - GET `/playground`: serves the GraphQL Playground page
pub mod graphql;

/// # API Route Configuration
///
/// Sets up versioned API endpoints under the `/api/v1` base path.
///
/// ## API Version
/// - Version: 1.0
/// - Base Path: `/api/v1`
///
/// ## Mounted Services
/// - Liveness check endpoint (see [`liveness::configure_routes`] for details)
/// - GraphQL endpoint and Playground (see [`graphql::configure_routes`] for details)
///
/// ## Example Endpoints
///
/// ```text
/// GET /api/v1/live - Service liveness status
/// POST /api/v1/graphql - GraphQL query endpoint
/// ```
///
/// [`liveness::configure_routes`]: crate::routes::liveness::configure_routes
/// [`graphql::configure_routes`]: crate::routes::graphql::configure_routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(liveness::configure_routes)
            .configure(graphql::configure_routes),
    );
}
