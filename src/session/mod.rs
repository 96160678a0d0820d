//! Session state
//!
//! A `Session` owns the generated dataset and the reference date every
//! trailing-window query is anchored on. It is created once at startup by
//! the top-level application and passed by reference to the query and
//! presentation layers; tests build their own with a fixed seed or
//! hand-rolled collections. Nothing in a session survives the process.

pub mod accounts;
pub mod bills;
pub mod transactions;

pub use accounts::AccountStore;
pub use bills::BillStore;
pub use transactions::TransactionStore;

use chrono::NaiveDate;

use crate::dataset::{self, Dataset, DatasetConfig};

/// Owns the in-memory dataset for one run of the app
pub struct Session {
    today: NaiveDate,
    pub transactions: TransactionStore,
    pub bills: BillStore,
    pub accounts: AccountStore,
}

impl Session {
    /// Build a session over an already-generated dataset
    pub fn new(dataset: Dataset, today: NaiveDate) -> Self {
        Self {
            today,
            transactions: TransactionStore::new(dataset.transactions),
            bills: BillStore::new(dataset.bills),
            accounts: AccountStore::new(dataset.accounts),
        }
    }

    /// Generate a fresh dataset and build a session over it
    pub fn generate(config: &DatasetConfig) -> Self {
        Self::new(dataset::generate(config), config.today)
    }

    /// The session's reference date
    pub fn today(&self) -> NaiveDate {
        self.today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_builds_all_stores() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let session = Session::generate(&DatasetConfig::new(today).seed(7));

        assert_eq!(session.today(), today);
        assert!(!session.transactions.is_empty().unwrap());
        assert_eq!(session.bills.all().unwrap().len(), 10);
        assert_eq!(session.accounts.all().unwrap().len(), 4);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let a = Session::generate(&DatasetConfig::new(today).seed(7));
        let b = Session::generate(&DatasetConfig::new(today).seed(7));

        // Mutating one session's bills leaves the other untouched
        let bill = a.bills.upcoming().unwrap()[0].clone();
        a.bills.mark_paid(bill.id).unwrap();
        assert!(b.bills.upcoming().unwrap().iter().any(|x| x.id == bill.id));
    }
}
