//! Whole-trajectory roll-up statistics

pub mod summary;

pub use summary::{summarize, TrajectoryAggregator, TrajectorySummary};
