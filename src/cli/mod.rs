//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the session and report layers.

pub mod assistant;
pub mod bill;
pub mod dashboard;
pub mod report;
pub mod transaction;

pub use assistant::{handle_ask_command, handle_insights_command};
pub use bill::{handle_bill_command, BillCommands};
pub use dashboard::handle_dashboard_command;
pub use report::{handle_accounts_command, handle_budget_command, handle_spending_command};
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::error::{SpenceError, SpenceResult};
use crate::models::{ChartType, TimeWindow};

/// Parse a window argument
pub fn parse_window(s: &str) -> SpenceResult<TimeWindow> {
    TimeWindow::parse(s).ok_or_else(|| {
        SpenceError::Validation(format!(
            "Invalid window: '{}'. Valid windows: day, week, month",
            s
        ))
    })
}

/// Parse a chart type argument
pub fn parse_chart(s: &str) -> SpenceResult<ChartType> {
    ChartType::parse(s).ok_or_else(|| {
        SpenceError::Validation(format!(
            "Invalid chart type: '{}'. Valid types: bar, line, pie",
            s
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_window() {
        assert_eq!(parse_window("week").unwrap(), TimeWindow::Week);
        assert!(parse_window("decade").is_err());
    }

    #[test]
    fn test_parse_chart() {
        assert_eq!(parse_chart("pie").unwrap(), ChartType::Pie);
        assert!(parse_chart("scatter").is_err());
    }
}
