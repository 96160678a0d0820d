//! Spending overview report
//!
//! The three dashboard headline numbers for a window (spending, income,
//! net cash flow) plus the comparison against the previous period.

use crate::error::SpenceResult;
use crate::models::{Money, TimeWindow};
use crate::services::{percent_change, SpendingService};
use crate::session::Session;

/// Spending overview for a time window
#[derive(Debug, Clone)]
pub struct OverviewReport {
    /// Window the report covers
    pub window: TimeWindow,
    /// Sum of absolute expense amounts
    pub total_spending: Money,
    /// Sum of income amounts
    pub total_income: Money,
    /// Income minus expenses
    pub net_cash_flow: Money,
    /// Spending over the previous period
    pub previous_spending: Money,
    /// Spending change vs the previous period, in percent
    pub spending_change: f64,
}

impl OverviewReport {
    /// Generate the overview for a window
    pub fn generate(session: &Session, window: TimeWindow) -> SpenceResult<Self> {
        let service = SpendingService::new(session);

        let total_spending = service.total_spending(window)?;
        let total_income = service.total_income(window)?;
        let net_cash_flow = service.net_cash_flow(window)?;
        let previous_spending = service.previous_spending(window)?;
        let spending_change = percent_change(total_spending, previous_spending);

        Ok(Self {
            window,
            total_spending,
            total_income,
            net_cash_flow,
            previous_spending,
            spending_change,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Spending Overview ({})\n", self.window));
        output.push_str(&"=".repeat(44));
        output.push('\n');

        let direction = if self.spending_change > 0.0 { "▲" } else { "▼" };
        output.push_str(&format!(
            "Total Spending: {:>12}   {} {:.1}% vs previous {}\n",
            self.total_spending.to_string(),
            direction,
            self.spending_change.abs(),
            self.window
        ));
        output.push_str(&format!(
            "Total Income:   {:>12}\n",
            self.total_income.to_string()
        ));
        output.push_str(&format!(
            "Net Cash Flow:  {:>12}   income minus expenses\n",
            self.net_cash_flow.to_string()
        ));

        output
    }
}
