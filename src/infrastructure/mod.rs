pub mod config;
pub mod inventory;
pub mod runner;
pub mod tracing;
