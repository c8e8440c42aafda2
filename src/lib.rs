pub mod error;
pub mod extractors;
pub mod handlers;
pub mod observability;
pub mod routes;
pub mod types;
