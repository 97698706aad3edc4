//! Marquee Core - shared configuration and observability
//!
//! Holds the central configuration used by the suggest and search crates
//! and the tracing setup for the CLI.

pub mod config;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use config::MarqueeConfig;
pub use tracing_setup::{CliLogLevel, init_tracing};
