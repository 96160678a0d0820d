//! Spending aggregation service
//!
//! Answers the read-only aggregation questions the dashboard asks:
//! windowed transaction lists, per-category spending, totals, net cash
//! flow, and the previous-period comparison. Every operation is a pure
//! synchronous computation over the session's collections.

use chrono::{Duration, NaiveDate};

use crate::error::SpenceResult;
use crate::models::{Category, Money, TimeWindow, Transaction};
use crate::session::Session;

/// Service for spending queries over a session
pub struct SpendingService<'a> {
    session: &'a Session,
}

impl<'a> SpendingService<'a> {
    /// Create a new spending service
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Transactions within the window ending on the session's reference date
    pub fn transactions_in_window(&self, window: TimeWindow) -> SpenceResult<Vec<Transaction>> {
        self.session
            .transactions
            .in_window(window, self.session.today())
    }

    /// Transactions dated exactly `date` (the day window with an explicit
    /// reference date)
    pub fn transactions_on(&self, date: NaiveDate) -> SpenceResult<Vec<Transaction>> {
        self.session.transactions.on_day(date)
    }

    /// Absolute spending per category within the window
    ///
    /// Only expense transactions count; the income category is excluded.
    /// Every other category is present even when its total is zero, in
    /// `Category::ALL` order, so totals over the mapping cover the window
    /// exactly.
    pub fn spending_by_category(
        &self,
        window: TimeWindow,
    ) -> SpenceResult<Vec<(Category, Money)>> {
        let transactions = self.transactions_in_window(window)?;

        let mut totals: Vec<(Category, Money)> =
            Category::spending().map(|c| (c, Money::zero())).collect();

        for txn in transactions.iter().filter(|t| t.is_expense()) {
            if txn.category.is_income() {
                continue;
            }
            if let Some(entry) = totals.iter_mut().find(|(c, _)| *c == txn.category) {
                entry.1 += txn.amount.abs();
            }
        }

        Ok(totals)
    }

    /// Sum of absolute expense amounts within the window
    pub fn total_spending(&self, window: TimeWindow) -> SpenceResult<Money> {
        let transactions = self.transactions_in_window(window)?;
        Ok(transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount.abs())
            .sum())
    }

    /// Sum of positive amounts within the window
    pub fn total_income(&self, window: TimeWindow) -> SpenceResult<Money> {
        let transactions = self.transactions_in_window(window)?;
        Ok(transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum())
    }

    /// Signed sum of all amounts within the window (income minus expenses)
    pub fn net_cash_flow(&self, window: TimeWindow) -> SpenceResult<Money> {
        let transactions = self.transactions_in_window(window)?;
        Ok(transactions.iter().map(|t| t.amount).sum())
    }

    /// Absolute spending over the immediately preceding period
    ///
    /// The comparison behind "vs previous week" on the overview.
    pub fn previous_spending(&self, window: TimeWindow) -> SpenceResult<Money> {
        let (start, end) = window.previous_range(self.session.today());
        let transactions = self.session.transactions.in_range(start, end)?;
        Ok(transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount.abs())
            .sum())
    }

    /// Daily absolute spending across the window, oldest day first
    ///
    /// Days with no expenses appear with a zero total so the series covers
    /// the full range.
    pub fn spending_over_time(
        &self,
        window: TimeWindow,
    ) -> SpenceResult<Vec<(NaiveDate, Money)>> {
        let (start, end) = window.range(self.session.today());
        let transactions = self.session.transactions.in_range(start, end)?;

        let days = (end - start).num_days();
        let mut series: Vec<(NaiveDate, Money)> = (0..=days)
            .map(|offset| (start + Duration::days(offset), Money::zero()))
            .collect();

        for txn in transactions.iter().filter(|t| t.is_expense()) {
            let offset = (txn.date - start).num_days() as usize;
            series[offset].1 += txn.amount.abs();
        }

        Ok(series)
    }
}

/// Percent change from `previous` to `current`
///
/// A zero previous period maps to 100 when the current period is positive
/// and 0 otherwise, so the comparison never divides by zero.
pub fn percent_change(current: Money, previous: Money) -> f64 {
    if previous.is_zero() {
        return if current.is_positive() { 100.0 } else { 0.0 };
    }
    (current.cents() - previous.cents()) as f64 / previous.abs().cents() as f64 * 100.0
}
