//! Analytics output layout selector

use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout of the spending analytics output
///
/// Names follow the chart the original dashboard draws for each mode; here
/// they select between a ranked table, a per-day series, and a percentage
/// share listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    /// Ranked category rows
    #[default]
    Bar,
    /// Per-day spending series
    Line,
    /// Category shares of total spend
    Pie,
}

impl ChartType {
    /// Parse a chart type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bar" => Some(Self::Bar),
            "line" => Some(Self::Line),
            "pie" => Some(Self::Pie),
            _ => None,
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bar => write!(f, "bar"),
            Self::Line => write!(f, "line"),
            Self::Pie => write!(f, "pie"),
        }
    }
}
