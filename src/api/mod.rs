//! Output rendering for derived stations and trajectory summaries

pub mod formatting;

pub use formatting::{JsonFormatter, SurveyReport, TextFormatter};
