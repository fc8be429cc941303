pub mod config;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod tracing_init;
