use crate::handlers::liveness::build_liveness_response;
use crate::logging::OperatorLog;
use crate::models::liveness::{LivenessResponse, LivenessStatus};
use async_graphql::{Context, Error, Object, Result};

/// GraphQL representation of the liveness probe outcome
///
/// Mirrors the REST liveness payload through the GraphQL API, so both
/// surfaces report the same status, message, and timestamp shape.
///
/// # Fields
/// - `status`: outcome marker, `"success"` or `"error"`
/// - `message`: human-readable text describing the outcome
/// - `timestamp`: ISO 8601 timestamp, null unless the probe succeeded
#[derive(Debug)]
pub struct Liveness {
    pub status: LivenessStatus,
    pub message: String,
    pub timestamp: Option<String>,
}

impl From<LivenessResponse> for Liveness {
    /// Converts the REST model payload to the GraphQL type
    ///
    /// Allows sharing the response construction step between REST and
    /// GraphQL while maintaining separate presentation layers.
    fn from(response: LivenessResponse) -> Self {
        Self {
            status: response.status,
            message: response.message,
            timestamp: response.timestamp,
        }
    }
}

#[Object]
impl Liveness {
    /// Outcome marker in its wire form
    ///
    /// # Returns
    /// `"success"` when the probe produced a payload, `"error"` otherwise.
    async fn status(&self) -> &str {
        self.status.as_str()
    }

    /// Human-readable text describing the outcome
    async fn message(&self) -> &str {
        &self.message
    }

    /// Probe timestamp
    ///
    /// # Returns
    /// ISO 8601 formatted timestamp string in UTC, or null when the probe
    /// did not succeed.
    async fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }
}

/// Root query type for liveness-related GraphQL operations
///
/// Provides the GraphQL entry point for liveness monitoring, following the
/// same probe semantics as the REST endpoint.
#[derive(Default)]
pub struct LivenessQuery;

#[Object]
impl LivenessQuery {
    /// Runs the liveness probe
    ///
    /// # Returns
    /// [`Liveness`] payload containing the outcome status, message, and
    /// construction timestamp.
    ///
    /// # Errors
    /// On an internal fault the entry is recorded on the operator log stream
    /// and a GraphQL error carrying the generic failure message is returned;
    /// the raw fault never reaches the client.
    async fn liveness(&self, ctx: &Context<'_>) -> Result<Liveness> {
        match build_liveness_response() {
            Ok(payload) => Ok(Liveness::from(payload)),
            Err(fault) => {
                if let Ok(log) = ctx.data::<OperatorLog>() {
                    log.error(&fault.to_string());
                }
                Err(Error::new(LivenessResponse::fault().message))
            }
        }
    }
}
