pub mod graphql;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod openapi;
pub mod routes;

#[cfg(test)]
mod additional_tests;
