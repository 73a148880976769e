pub mod agenda;
pub mod app;
pub mod config;
pub mod tracing;
