use crate::logging::OperatorLog;
use crate::models::liveness::LivenessResponse;
use actix_web::{HttpResponse, Responder, web};
use thiserror::Error;

/// Internal fault raised while the liveness payload is built or encoded.
///
/// The single error kind of the service. It never reaches the client as a
/// raw error: the boundary converts it into the generic 500 body and records
/// it once on the operator log stream.
#[derive(Debug, Error, PartialEq)]
pub enum LivenessFault {
    #[error("internal fault during health check: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for LivenessFault {
    fn from(err: serde_json::Error) -> Self {
        LivenessFault::Internal(err.to_string())
    }
}

/// # Liveness Response Construction
///
/// Builds the success payload with a timestamp captured now, and rehearses
/// its JSON encoding once so a serialization fault surfaces here as
/// [`LivenessFault`] rather than mid-transmission. Under normal operation
/// this step cannot fail; the explicit `Result` keeps the fallback path
/// honest for the boundary layer.
pub fn build_liveness_response() -> Result<LivenessResponse, LivenessFault> {
    let response = LivenessResponse::healthy();
    serde_json::to_value(&response)?;
    Ok(response)
}

/// # Outcome Boundary Conversion
///
/// Translates the construction outcome into the HTTP response:
///
/// - `Ok(payload)` → **200 OK** with the payload as JSON body
/// - `Err(fault)` → one error-severity entry on the operator log stream
///   (including the fault's description), then **500 Internal Server Error**
///   with the generic failure body
///
/// The fault itself is never propagated to the router or the client.
pub fn outcome_to_response(
    outcome: Result<LivenessResponse, LivenessFault>,
    log: &OperatorLog,
) -> HttpResponse {
    match outcome {
        Ok(payload) => HttpResponse::Ok().json(payload),
        Err(fault) => {
            log.error(&fault.to_string());
            HttpResponse::InternalServerError().json(LivenessResponse::fault())
        }
    }
}

/// # Service Liveness Check Endpoint
///
/// Answers "is the process able to handle a request right now" with no
/// external checks. The inbound request is ignored entirely; nothing from
/// its parameters, headers, or body is read.
///
/// ## Response
///
/// - **200 OK**: liveness payload with `status = "success"`, a fixed healthy
///   message, and an ISO 8601 timestamp captured at construction time
/// - **500 Internal Server Error**: generic failure payload with
///   `status = "error"` and no timestamp, emitted if any step of response
///   construction faults; the fault is logged for operator visibility
///
/// ## Example Success Response
/// ```json
/// {
///   "status": "success",
///   "message": "Server is healthy",
///   "timestamp": "2023-10-05T14:23:45.678+00:00"
/// }
/// ```
pub async fn liveness_check(log: web::Data<OperatorLog>) -> impl Responder {
    outcome_to_response(build_liveness_response(), log.get_ref())
}
