/// # Service Liveness Check Handler
///
/// Core of the liveness probe: the explicit construction step, the fault
/// taxonomy, and the boundary conversion from outcome to HTTP response.
///
/// ## Response
///
/// - **200 OK**: Service is running and able to respond
///   - Content-Type: `application/json`
///   - Body: [`LivenessResponse`] containing:
///     - `status`: `"success"`
///     - `message`: fixed healthy message
///     - `timestamp`: ISO 8601 timestamp of the check
/// - **500 Internal Server Error**: internal fault during construction
///   - Body: [`LivenessResponse`] with `status = "error"`, a fixed generic
///     message, and no timestamp
///
/// ## Example Success Response
/// ```json
/// {
///   "status": "success",
///   "message": "Server is healthy",
///   "timestamp": "2023-10-05T14:23:45.678+00:00"
/// }
/// ```
///
/// [`LivenessResponse`]: crate::models::liveness::LivenessResponse
pub mod liveness;
