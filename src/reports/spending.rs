//! Spending by category report
//!
//! Per-category breakdown of spending within a window. Every non-income
//! category has a row, zero or not, so the rows always sum to the window's
//! total spending.

use crate::error::SpenceResult;
use crate::models::{Category, Money, TimeWindow};
use crate::services::SpendingService;
use crate::session::Session;

/// One category's share of spending
#[derive(Debug, Clone)]
pub struct CategoryRow {
    /// Category
    pub category: Category,
    /// Absolute spending total
    pub total: Money,
    /// Number of expense transactions
    pub transaction_count: usize,
    /// Share of total spending, in percent
    pub percentage: f64,
}

/// Spending breakdown by category
#[derive(Debug, Clone)]
pub struct CategorySpendingReport {
    /// Window the report covers
    pub window: TimeWindow,
    /// One row per non-income category, highest spending first
    pub rows: Vec<CategoryRow>,
    /// Total spending across all categories
    pub total_spending: Money,
}

impl CategorySpendingReport {
    /// Generate the breakdown for a window
    pub fn generate(session: &Session, window: TimeWindow) -> SpenceResult<Self> {
        let service = SpendingService::new(session);

        let by_category = service.spending_by_category(window)?;
        let total_spending = service.total_spending(window)?;

        let transactions = service.transactions_in_window(window)?;
        let count_for = |category: Category| {
            transactions
                .iter()
                .filter(|t| t.is_expense() && t.category == category)
                .count()
        };

        let mut rows: Vec<CategoryRow> = by_category
            .into_iter()
            .map(|(category, total)| CategoryRow {
                category,
                total,
                transaction_count: count_for(category),
                percentage: total.share_of(total_spending),
            })
            .collect();

        // Highest spending first; ties keep category order
        rows.sort_by(|a, b| b.total.cmp(&a.total));

        Ok(Self {
            window,
            rows,
            total_spending,
        })
    }

    /// Rows with any spending, highest first
    pub fn top_categories(&self, limit: usize) -> Vec<&CategoryRow> {
        self.rows
            .iter()
            .filter(|r| !r.total.is_zero())
            .take(limit)
            .collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Spending by Category ({})\n", self.window));
        output.push_str(&format!(
            "{:<20} {:>12} {:>8} {:>8}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(52));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<20} {:>12} {:>8} {:>7.1}%\n",
                row.category.to_string(),
                row.total.to_string(),
                row.transaction_count,
                row.percentage
            ));
        }

        output.push_str(&"-".repeat(52));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>12}\n",
            "TOTAL",
            self.total_spending.to_string()
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, DatasetConfig};
    use crate::models::Transaction;
    use chrono::{Duration, NaiveDate};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 30).unwrap()
    }

    fn txn(days_ago: i64, cents: i64, category: Category) -> Transaction {
        Transaction::new(
            today() - Duration::days(days_ago),
            "Test",
            Money::from_cents(cents),
            category,
            "Chase Checking",
        )
    }

    #[test]
    fn test_rows_cover_every_spending_category() {
        let session = Session::new(
            Dataset {
                transactions: vec![txn(0, -10_00, Category::Dining)],
                ..Dataset::default()
            },
            today(),
        );

        let report = CategorySpendingReport::generate(&session, TimeWindow::Week).unwrap();
        assert_eq!(report.rows.len(), 14);
        assert_eq!(report.rows[0].category, Category::Dining);
        assert_eq!(report.rows[0].transaction_count, 1);
    }

    #[test]
    fn test_rows_sum_to_total() {
        let session = Session::generate(&DatasetConfig::new(today()).seed(5));
        let report = CategorySpendingReport::generate(&session, TimeWindow::Month).unwrap();

        let sum: Money = report.rows.iter().map(|r| r.total).sum();
        assert_eq!(sum, report.total_spending);

        let pct: f64 = report.rows.iter().map(|r| r.percentage).sum();
        assert!((pct - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_sorted_highest_first() {
        let session = Session::generate(&DatasetConfig::new(today()).seed(5));
        let report = CategorySpendingReport::generate(&session, TimeWindow::Month).unwrap();

        for pair in report.rows.windows(2) {
            assert!(pair[0].total >= pair[1].total);
        }
    }

    #[test]
    fn test_top_categories_skips_zero_rows() {
        let session = Session::new(
            Dataset {
                transactions: vec![
                    txn(0, -10_00, Category::Dining),
                    txn(1, -30_00, Category::Groceries),
                ],
                ..Dataset::default()
            },
            today(),
        );

        let report = CategorySpendingReport::generate(&session, TimeWindow::Week).unwrap();
        let top = report.top_categories(5);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].category, Category::Groceries);
    }

    #[test]
    fn test_format_terminal() {
        let session = Session::new(
            Dataset {
                transactions: vec![txn(0, -10_00, Category::Dining)],
                ..Dataset::default()
            },
            today(),
        );

        let report = CategorySpendingReport::generate(&session, TimeWindow::Week).unwrap();
        let formatted = report.format_terminal();
        assert!(formatted.contains("Dining"));
        assert!(formatted.contains("TOTAL"));
        assert!(formatted.contains("$10.00"));
    }
}
