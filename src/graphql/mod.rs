pub mod handlers;
pub mod liveness;
pub mod schema;
