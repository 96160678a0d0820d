//! Demo dataset generation
//!
//! The dashboard runs over a fixed dataset generated once per session from
//! deterministic templates plus randomized fields. Nothing here touches
//! disk; the dataset lives and dies with the session.

pub mod generator;
pub mod templates;

pub use generator::{generate, DatasetConfig, DEFAULT_TRANSACTION_COUNT};

use crate::models::{Account, Bill, Transaction};

/// The generated collections a session runs over
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Generated transactions, newest first
    pub transactions: Vec<Transaction>,
    /// Scheduled bills for the next 30 days
    pub bills: Vec<Bill>,
    /// Linked demo accounts
    pub accounts: Vec<Account>,
}
