//! Process bootstrap: configuration loading, tracing and dependency wiring.

pub mod config;
pub mod tracing;
pub mod wiring;
