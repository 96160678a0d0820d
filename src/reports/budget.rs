//! Budget overview report
//!
//! Compares monthly spending against the fixed default allocations the
//! budgeting page ships with. Allocations are not user-editable in this
//! scope; income has no allocation and is excluded.

use crate::error::SpenceResult;
use crate::models::{Category, Money, TimeWindow};
use crate::services::SpendingService;
use crate::session::Session;

/// Default monthly allocation per category, in whole dollars
const ALLOCATIONS: [(Category, i64); 14] = [
    (Category::Groceries, 500),
    (Category::Dining, 300),
    (Category::Transportation, 200),
    (Category::Housing, 1500),
    (Category::Utilities, 300),
    (Category::Entertainment, 200),
    (Category::Shopping, 300),
    (Category::Travel, 400),
    (Category::Healthcare, 200),
    (Category::Personal, 150),
    (Category::Education, 100),
    (Category::Fitness, 80),
    (Category::Subscriptions, 50),
    (Category::Other, 100),
];

/// One category's budget status
#[derive(Debug, Clone)]
pub struct BudgetRow {
    /// Category
    pub category: Category,
    /// Monthly allocation
    pub budget: Money,
    /// Spending this month
    pub spent: Money,
    /// Allocation minus spending (negative when over budget)
    pub remaining: Money,
    /// Spending as a share of the allocation, in percent
    pub percent_used: f64,
}

impl BudgetRow {
    /// Whether spending exceeded the allocation
    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Budget overview for the trailing month
#[derive(Debug, Clone)]
pub struct BudgetReport {
    /// One row per allocated category, most-used first
    pub rows: Vec<BudgetRow>,
    /// Sum of allocations
    pub total_budget: Money,
    /// Sum of monthly spending across allocated categories
    pub total_spent: Money,
}

impl BudgetReport {
    /// Generate the budget overview
    pub fn generate(session: &Session) -> SpenceResult<Self> {
        let service = SpendingService::new(session);
        let by_category = service.spending_by_category(TimeWindow::Month)?;

        let mut rows = Vec::with_capacity(ALLOCATIONS.len());
        let mut total_budget = Money::zero();
        let mut total_spent = Money::zero();

        for (category, dollars) in ALLOCATIONS {
            let budget = Money::from_dollars(dollars);
            let spent = by_category
                .iter()
                .find(|(c, _)| *c == category)
                .map(|(_, m)| *m)
                .unwrap_or_default();

            let percent_used = if budget.is_zero() {
                0.0
            } else {
                spent.cents() as f64 / budget.cents() as f64 * 100.0
            };

            total_budget += budget;
            total_spent += spent;
            rows.push(BudgetRow {
                category,
                budget,
                spent,
                remaining: budget - spent,
                percent_used,
            });
        }

        // Most-used allocations first
        rows.sort_by(|a, b| {
            b.percent_used
                .partial_cmp(&a.percent_used)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(Self {
            rows,
            total_budget,
            total_spent,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Budget Overview (month)\n");
        output.push_str(&format!(
            "{:<18} {:>10} {:>10} {:>10} {:>7}\n",
            "Category", "Budget", "Spent", "Remaining", "Used"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for row in &self.rows {
            let over = if row.is_over_budget() { " !" } else { "" };
            output.push_str(&format!(
                "{:<18} {:>10} {:>10} {:>10} {:>6.0}%{}\n",
                row.category.to_string(),
                row.budget.to_string(),
                row.spent.to_string(),
                row.remaining.to_string(),
                row.percent_used,
                over
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<18} {:>10} {:>10} {:>10}\n",
            "TOTAL",
            self.total_budget.to_string(),
            self.total_spent.to_string(),
            (self.total_budget - self.total_spent).to_string()
        ));

        output
    }
}
