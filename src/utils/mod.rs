//! Utility modules for engine configuration

pub mod config;

pub use config::{ConfigError, SurveyConfig};
