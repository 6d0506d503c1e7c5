use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural macros.
/// This documentation serves as the source of truth for both API consumers and
/// automated documentation generators.
///
/// # Endpoints
/// - Liveness Check: `GET /live`
///
/// # Schemas
/// - `LivenessResponse`: Probe outcome payload
/// - `LivenessStatus`: Enumerated outcome marker
///
/// # Tags
/// 1. **Liveness**: Service monitoring endpoints
/// 2. **GraphQL**: Unified query interface
///
/// # API Information
/// - **Title**: Liveness Probe API
/// - **Version**: 0.4.0+sprint2
/// - **Description**: Liveness reporting with both REST and GraphQL interfaces
///
/// # Note
/// The OpenAPI spec is generated at compile time from these annotations. Any changes
/// to the API surface should be reflected here first to maintain documentation accuracy.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::liveness::live,
    ),
    components(
        schemas(
            crate::models::liveness::LivenessResponse,
            crate::models::liveness::LivenessStatus
        )
    ),
    tags(
        (name = "Liveness", description = "Service liveness monitoring endpoints"),
        (name = "GraphQL", description = "GraphQL API for interacting with all service features")
    ),
    info(
        description = "API reporting server liveness with both REST and GraphQL interfaces",
        title = "Liveness Probe API",
        version = "0.4.0+sprint2",
    )
)]
pub struct ApiDoc;
