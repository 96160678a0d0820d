//! Spending analytics report
//!
//! The analytics page's data in three textual layouts, selected by
//! `ChartType`: ranked category rows (bar), a per-day series (line), or
//! category shares of total spend (pie).

use chrono::NaiveDate;

use crate::error::SpenceResult;
use crate::models::{ChartType, Money, TimeWindow};
use crate::services::SpendingService;
use crate::session::Session;

use super::spending::CategorySpendingReport;

/// Spending analytics over a window
#[derive(Debug, Clone)]
pub struct AnalyticsReport {
    /// Window the report covers
    pub window: TimeWindow,
    /// Selected output layout
    pub chart: ChartType,
    /// Daily spending totals, oldest first
    pub series: Vec<(NaiveDate, Money)>,
    /// Category breakdown
    pub by_category: CategorySpendingReport,
}

impl AnalyticsReport {
    /// Generate analytics for a window
    pub fn generate(
        session: &Session,
        window: TimeWindow,
        chart: ChartType,
    ) -> SpenceResult<Self> {
        let service = SpendingService::new(session);
        let series = service.spending_over_time(window)?;
        let by_category = CategorySpendingReport::generate(session, window)?;

        Ok(Self {
            window,
            chart,
            series,
            by_category,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Spending Analytics ({}, {})\n",
            self.window, self.chart
        ));
        output.push_str(&"=".repeat(44));
        output.push('\n');

        match self.chart {
            ChartType::Bar => output.push_str(&self.format_ranked()),
            ChartType::Line => output.push_str(&self.format_series()),
            ChartType::Pie => output.push_str(&self.format_shares()),
        }

        output
    }

    fn format_ranked(&self) -> String {
        let mut output = String::new();
        for row in self.by_category.top_categories(usize::MAX) {
            output.push_str(&format!(
                "{:<20} {:>12}\n",
                row.category.to_string(),
                row.total.to_string()
            ));
        }
        if output.is_empty() {
            output.push_str("No spending in this window.\n");
        }
        output
    }

    fn format_series(&self) -> String {
        let mut output = String::new();
        for (date, total) in &self.series {
            output.push_str(&format!(
                "{} {:>12}\n",
                date.format("%Y-%m-%d"),
                total.to_string()
            ));
        }
        output
    }

    fn format_shares(&self) -> String {
        let mut output = String::new();
        for row in self.by_category.top_categories(usize::MAX) {
            output.push_str(&format!(
                "{:<20} {:>6.1}%\n",
                row.category.to_string(),
                row.percentage
            ));
        }
        if output.is_empty() {
            output.push_str("No spending in this window.\n");
        }
        output
    }
}
