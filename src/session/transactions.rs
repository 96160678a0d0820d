//! In-memory transaction store
//!
//! Holds the generated transactions for the lifetime of the session and
//! answers the read-only filters the query layer is built on. Transactions
//! are never mutated after generation.

use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::{SpenceError, SpenceResult};
use crate::models::{Category, TimeWindow, Transaction};

/// Read-only store over the generated transactions
pub struct TransactionStore {
    data: RwLock<Vec<Transaction>>,
}

impl TransactionStore {
    /// Create a store over generated transactions
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            data: RwLock::new(transactions),
        }
    }

    fn read(&self) -> SpenceResult<std::sync::RwLockReadGuard<'_, Vec<Transaction>>> {
        self.data
            .read()
            .map_err(|e| SpenceError::Session(format!("Failed to acquire read lock: {}", e)))
    }

    /// Get all transactions in source order (newest first)
    pub fn all(&self) -> SpenceResult<Vec<Transaction>> {
        Ok(self.read()?.clone())
    }

    /// Number of transactions in the session
    pub fn len(&self) -> SpenceResult<usize> {
        Ok(self.read()?.len())
    }

    /// Whether the session holds no transactions
    pub fn is_empty(&self) -> SpenceResult<bool> {
        Ok(self.read()?.is_empty())
    }

    /// Transactions within the window ending on `today`, source order
    pub fn in_window(&self, window: TimeWindow, today: NaiveDate) -> SpenceResult<Vec<Transaction>> {
        Ok(self
            .read()?
            .iter()
            .filter(|t| window.contains(today, t.date))
            .cloned()
            .collect())
    }

    /// Transactions dated exactly `date`
    pub fn on_day(&self, date: NaiveDate) -> SpenceResult<Vec<Transaction>> {
        Ok(self
            .read()?
            .iter()
            .filter(|t| t.date == date)
            .cloned()
            .collect())
    }

    /// Transactions within an inclusive date range
    pub fn in_range(&self, start: NaiveDate, end: NaiveDate) -> SpenceResult<Vec<Transaction>> {
        Ok(self
            .read()?
            .iter()
            .filter(|t| t.date >= start && t.date <= end)
            .cloned()
            .collect())
    }

    /// Transactions carrying the given category
    pub fn by_category(&self, category: Category) -> SpenceResult<Vec<Transaction>> {
        Ok(self
            .read()?
            .iter()
            .filter(|t| t.category == category)
            .cloned()
            .collect())
    }

    /// Transactions flagged recurring
    pub fn recurring(&self) -> SpenceResult<Vec<Transaction>> {
        Ok(self.read()?.iter().filter(|t| t.recurring).cloned().collect())
    }
}
