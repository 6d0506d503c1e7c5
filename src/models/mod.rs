/// # Liveness Check Response Model
///
/// Represents the outcome of a liveness probe: an enumerated status, a
/// human-readable message, and (on success only) an ISO 8601 timestamp.
///
/// ## Serialization
/// Implements `Serialize`/`Deserialize` for JSON and `ToSchema` for the
/// OpenAPI document; the timestamp field is omitted from the JSON entirely
/// when absent.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "success",
///   "message": "Server is healthy",
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00"
/// }
/// ```
pub mod liveness;

pub use liveness::{LivenessResponse, LivenessStatus};
