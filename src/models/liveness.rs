use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome marker carried by every liveness payload.
///
/// Serialized in lowercase, so the wire values are exactly `"success"` and
/// `"error"`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LivenessStatus {
    Success,
    Error,
}

impl LivenessStatus {
    /// The serialized form of the status, as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            LivenessStatus::Success => "success",
            LivenessStatus::Error => "error",
        }
    }
}

/// # Liveness Check Response
///
/// The single transient entity of the service: constructed fresh for every
/// probe, never persisted, never shared across requests.
///
/// ## Fields
/// - `status`: outcome marker, `"success"` or `"error"`
/// - `message`: human-readable text describing the outcome
/// - `timestamp`: RFC 3339 / ISO 8601 timestamp captured at construction
///   time; present only on success and omitted from the JSON otherwise
///
/// The two constructors are the only producers, which keeps the invariant
/// "timestamp is present if and only if status is success".
///
/// ## Example JSON
/// ```json
/// {
///   "status": "success",
///   "message": "Server is healthy",
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct LivenessResponse {
    pub status: LivenessStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl LivenessResponse {
    /// Success payload with the timestamp captured now.
    pub fn healthy() -> Self {
        Self {
            status: LivenessStatus::Success,
            message: "Server is healthy".to_string(),
            timestamp: Some(Utc::now().to_rfc3339()),
        }
    }

    /// Generic failure payload sent when the success payload could not be
    /// produced. Carries no timestamp.
    pub fn fault() -> Self {
        Self {
            status: LivenessStatus::Error,
            message: "Server error during health check".to_string(),
            timestamp: None,
        }
    }
}
