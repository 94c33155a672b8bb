//! Core types and constants for directional survey computation

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
