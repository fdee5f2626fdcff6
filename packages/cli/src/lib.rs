// ABOUTME: Process entry points for the roster server
// ABOUTME: Configuration, logging and HTTP server lifecycle

pub mod config;
pub mod logging;
pub mod server;

pub use config::{Config, ConfigError};
pub use server::{build_app, run_server};
