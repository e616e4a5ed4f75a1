//! CLI library components for the ceremony toolkit.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
