//! Bill model
//!
//! Upcoming and paid bills. Unlike transactions, bills are mutable within
//! a session: the paid and auto-pay flags can be toggled by user action.
//! Neither mutation survives the session.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::BillId;
use super::money::Money;

/// A bill due within the session's horizon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    /// Unique identifier
    pub id: BillId,

    /// Bill name (e.g., "Electricity")
    pub name: String,

    /// Amount owed (always positive)
    pub amount: Money,

    /// Date the bill is due
    pub due_date: NaiveDate,

    /// Whether the bill is configured for automatic payment
    pub auto_pay: bool,

    /// Whether the bill has been paid
    pub paid: bool,

    /// Spending category
    pub category: Category,
}

impl Bill {
    /// Create a new unpaid bill
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        due_date: NaiveDate,
        category: Category,
    ) -> Self {
        Self {
            id: BillId::new(),
            name: name.into(),
            amount,
            due_date,
            auto_pay: false,
            paid: false,
            category,
        }
    }

    /// Set the auto-pay flag (builder-style, used by the generator)
    pub fn auto_pay(mut self, auto_pay: bool) -> Self {
        self.auto_pay = auto_pay;
        self
    }

    /// Set the paid flag (builder-style, used by the generator)
    pub fn paid(mut self, paid: bool) -> Self {
        self.paid = paid;
        self
    }

    /// Mark the bill as paid; already-paid bills stay paid
    pub fn mark_paid(&mut self) {
        self.paid = true;
    }

    /// Flip the auto-pay flag, returning the new value
    pub fn toggle_auto_pay(&mut self) -> bool {
        self.auto_pay = !self.auto_pay;
        self.auto_pay
    }

    /// Check whether the bill falls due within `days` of `today`
    pub fn is_due_within(&self, today: NaiveDate, days: i64) -> bool {
        let cutoff = today + chrono::Duration::days(days);
        self.due_date >= today && self.due_date <= cutoff
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} due {}",
            self.name,
            self.amount,
            self.due_date.format("%Y-%m-%d")
        )
    }
}
