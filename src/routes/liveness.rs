use crate::handlers::liveness::{build_liveness_response, outcome_to_response};
use crate::logging::OperatorLog;
use crate::models::LivenessResponse;
use actix_web::{Responder, get, web};

/// # Liveness Check Endpoint
///
/// Reports whether the process is running and able to respond. Used by load
/// balancers and orchestrators; distinct from a readiness check, no
/// downstream dependency is consulted.
///
/// ## Response
///
/// - **200 OK**: `status = "success"`, a fixed healthy message, and an
///   ISO 8601 timestamp captured at response construction time
/// - **500 Internal Server Error**: `status = "error"` with a fixed generic
///   message and no timestamp; the triggering fault is recorded on the
///   operator log stream before the response is sent
///
/// ## Example Responses
///
/// ```json
/// {
///   "status": "success",
///   "message": "Server is healthy",
///   "timestamp": "2023-10-05T12:34:56.789+00:00"
/// }
/// ```
///
/// ```json
/// {
///   "status": "error",
///   "message": "Server error during health check"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/live",
    responses(
        (status = 200, description = "Service is healthy", body = LivenessResponse),
        (status = 500, description = "Internal fault while producing the liveness payload", body = LivenessResponse)
    ),
    tag = "Liveness"
)]
#[get("/live")]
pub async fn live(log: web::Data<OperatorLog>) -> impl Responder {
    outcome_to_response(build_liveness_response(), log.get_ref())
}

/// Configures liveness routes under /api/v1
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(live);
}
