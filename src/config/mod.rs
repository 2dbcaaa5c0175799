// src/config/mod.rs

pub mod calcs_config;

// Re-export main types for convenience
pub use calcs_config::{CalcsConfig, SieveConfig};
