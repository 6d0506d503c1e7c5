use super::liveness::LivenessQuery;
use crate::logging::OperatorLog;
use async_graphql::{EmptyMutation, EmptySubscription, Schema};

/// Main GraphQL Schema Definition
///
/// Combines the root query type with empty mutation and subscription types
/// to form the complete GraphQL schema for the application.
///
/// # Type Parameters
/// - `LivenessQuery`: Root query type containing all available query operations
/// - `EmptyMutation`: Placeholder for mutation operations (currently unused)
/// - `EmptySubscription`: Placeholder for subscription operations (currently unused)
pub type AppSchema = Schema<LivenessQuery, EmptyMutation, EmptySubscription>;

/// Creates a new GraphQL schema with configured queries and mutations.
///
/// The operator log stream is stored as schema data so the liveness resolver
/// can report faults through the same injected port as the REST surface.
///
/// # Example
///
/// ```rust,no_run
/// use liveness_probe::graphql::schema::create_schema;
/// use liveness_probe::logging::OperatorLog;
///
/// let schema = create_schema(OperatorLog::new());
/// ```
pub fn create_schema(log: OperatorLog) -> AppSchema {
    Schema::build(
        LivenessQuery::default(),
        EmptyMutation::default(),
        EmptySubscription::default(),
    )
    .data(log)
    .finish()
}
