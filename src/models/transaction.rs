//! Transaction model
//!
//! A single generated ledger entry. Transactions are immutable once
//! generated: the session never edits them, only reads and aggregates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;

/// A financial transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Transaction date (day granularity)
    pub date: NaiveDate,

    /// Merchant or payment description
    pub description: String,

    /// Amount (positive for income, negative for expenses)
    pub amount: Money,

    /// Spending category
    pub category: Category,

    /// Display label of the account the transaction posted to
    pub account: String,

    /// Whether this is a recurring charge or deposit
    #[serde(default)]
    pub recurring: bool,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        category: Category,
        account: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            date,
            description: description.into(),
            amount,
            category,
            account: account.into(),
            recurring: false,
        }
    }

    /// Mark as recurring (builder-style, used by the generator)
    pub fn recurring(mut self, recurring: bool) -> Self {
        self.recurring = recurring;
        self
    }

    /// Check if this is income (positive amount)
    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    /// Check if this is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}
