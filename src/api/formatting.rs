//! Survey report formatting
//!
//! Renders derived stations and summary metrics as an aligned text table
//! or as JSON.

use crate::core::SurveyStation;
use crate::processing::summary::TrajectorySummary;
use serde::{Deserialize, Serialize};

/// Everything written out for one survey
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyReport {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stations: Vec<SurveyStation>,
    pub summary: Option<TrajectorySummary>,
}

/// Human-readable text formatter
pub struct TextFormatter {
    /// Decimal places for lengths and angles
    pub precision: usize,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn format_report(&self, report: &SurveyReport) -> String {
        let mut output = String::new();

        if !report.stations.is_empty() {
            output.push_str(&self.format_stations(&report.stations));
            output.push('\n');
        }

        match &report.summary {
            Some(summary) => output.push_str(&self.format_summary(summary)),
            None => output.push_str("No stations\n"),
        }

        output
    }

    /// Station table, one row per station
    pub fn format_stations(&self, stations: &[SurveyStation]) -> String {
        let p = self.precision;
        let mut output = format!(
            "{:>6} {:>10} {:>7} {:>7} {:>10} {:>10} {:>10} {:>10} {:>7}\n",
            "ID", "MD", "Inc", "Azi", "TVD", "North", "East", "VS", "DLS"
        );

        for station in stations {
            let id = station.id.map(|id| id.0.to_string()).unwrap_or_else(|| "-".to_string());
            output.push_str(&format!(
                "{:>6} {:>10.p$} {:>7.p$} {:>7.p$} {:>10.p$} {:>10.p$} {:>10.p$} {:>10.p$} {:>7.p$}\n",
                id,
                station.measured_depth,
                station.inclination,
                station.azimuth,
                station.true_vertical_depth,
                station.northing,
                station.easting,
                station.vertical_section,
                station.dog_leg_severity,
            ));
        }

        output
    }

    pub fn format_summary(&self, summary: &TrajectorySummary) -> String {
        let p = self.precision;
        let optional = |value: Option<f64>| value.map(|v| format!("{:.p$}", v)).unwrap_or_else(|| "n/a".to_string());

        let mut output = String::from("Trajectory summary:\n");
        output.push_str(&format!("  Stations:       {}\n", summary.station_count));
        output.push_str(&format!("  Total MD:       {:.p$}\n", summary.total_md));
        output.push_str(&format!("  Total TVD:      {:.p$}\n", summary.total_tvd));
        output.push_str(&format!("  Displacement:   {:.p$}\n", summary.total_displacement));
        output.push_str(&format!("  VS azimuth:     {:.p$} deg\n", summary.vs_azimuth));
        output.push_str(&format!("  Max inc:        {:.p$} deg\n", summary.max_inclination));
        output.push_str(&format!("  Max DLS:        {:.p$}\n", summary.max_dls));
        output.push_str(&format!("  Avg build rate: {}\n", optional(summary.avg_build_rate)));
        output.push_str(&format!("  K/D ratio:      {}\n", optional(summary.kd_ratio)));
        output
    }
}

/// JSON formatter for structured output
#[derive(Default)]
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn format_report(&self, report: &SurveyReport) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        }
    }
}
