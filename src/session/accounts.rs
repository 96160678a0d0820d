//! In-memory account store
//!
//! Accounts are read-only: balances come from the generated dataset.

use std::sync::RwLock;

use crate::error::{SpenceError, SpenceResult};
use crate::models::{Account, AccountId};

/// Read-only store over the session's accounts
pub struct AccountStore {
    data: RwLock<Vec<Account>>,
}

impl AccountStore {
    /// Create a store over generated accounts
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            data: RwLock::new(accounts),
        }
    }

    fn read(&self) -> SpenceResult<std::sync::RwLockReadGuard<'_, Vec<Account>>> {
        self.data
            .read()
            .map_err(|e| SpenceError::Session(format!("Failed to acquire read lock: {}", e)))
    }

    /// Get all accounts in source order
    pub fn all(&self) -> SpenceResult<Vec<Account>> {
        Ok(self.read()?.clone())
    }

    /// Get an account by ID
    pub fn get(&self, id: AccountId) -> SpenceResult<Option<Account>> {
        Ok(self.read()?.iter().find(|a| a.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::templates;

    #[test]
    fn test_all() {
        let store = AccountStore::new(templates::accounts());
        assert_eq!(store.all().unwrap().len(), 4);
    }

    #[test]
    fn test_get() {
        let accounts = templates::accounts();
        let first = accounts[0].clone();
        let store = AccountStore::new(accounts);

        let found = store.get(first.id).unwrap().unwrap();
        assert_eq!(found.name, first.name);
        assert!(store.get(AccountId::new()).unwrap().is_none());
    }
}
