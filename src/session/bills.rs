//! In-memory bill store
//!
//! Bills are the one mutable collection in the session: the paid and
//! auto-pay flags can be toggled in place. Mutations on an unknown
//! identifier return a NotFound error rather than silently doing nothing,
//! so callers can decide how to surface the miss.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{SpenceError, SpenceResult};
use crate::models::{Bill, BillId};

/// Store over the session's bills
pub struct BillStore {
    data: RwLock<Vec<Bill>>,
}

impl BillStore {
    /// Create a store over generated bills
    pub fn new(bills: Vec<Bill>) -> Self {
        Self {
            data: RwLock::new(bills),
        }
    }

    fn read(&self) -> SpenceResult<RwLockReadGuard<'_, Vec<Bill>>> {
        self.data
            .read()
            .map_err(|e| SpenceError::Session(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> SpenceResult<RwLockWriteGuard<'_, Vec<Bill>>> {
        self.data
            .write()
            .map_err(|e| SpenceError::Session(format!("Failed to acquire write lock: {}", e)))
    }

    /// Get all bills in source order
    pub fn all(&self) -> SpenceResult<Vec<Bill>> {
        Ok(self.read()?.clone())
    }

    /// Unpaid bills, ascending by due date
    pub fn upcoming(&self) -> SpenceResult<Vec<Bill>> {
        let mut bills: Vec<Bill> = self.read()?.iter().filter(|b| !b.paid).cloned().collect();
        bills.sort_by(|a, b| a.due_date.cmp(&b.due_date));
        Ok(bills)
    }

    /// Paid bills, ascending by due date
    pub fn paid(&self) -> SpenceResult<Vec<Bill>> {
        let mut bills: Vec<Bill> = self.read()?.iter().filter(|b| b.paid).cloned().collect();
        bills.sort_by(|a, b| a.due_date.cmp(&b.due_date));
        Ok(bills)
    }

    /// Get a bill by ID
    pub fn get(&self, id: BillId) -> SpenceResult<Option<Bill>> {
        Ok(self.read()?.iter().find(|b| b.id == id).cloned())
    }

    /// Find a bill by ID, displayed ID prefix, or case-insensitive name
    pub fn find(&self, identifier: &str) -> SpenceResult<Option<Bill>> {
        if let Ok(id) = identifier.parse::<BillId>() {
            if let Some(bill) = self.get(id)? {
                return Ok(Some(bill));
            }
        }

        let needle = identifier.to_lowercase();
        Ok(self
            .read()?
            .iter()
            .find(|b| b.id.matches_prefix(identifier) || b.name.to_lowercase() == needle)
            .cloned())
    }

    /// Mark a bill paid, returning the updated bill
    ///
    /// Paying an already-paid bill is an Ok no-op; an unknown ID is a
    /// NotFound error.
    pub fn mark_paid(&self, id: BillId) -> SpenceResult<Bill> {
        let mut bills = self.write()?;
        let bill = bills
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| SpenceError::bill_not_found(id.to_string()))?;
        bill.mark_paid();
        Ok(bill.clone())
    }

    /// Flip a bill's auto-pay flag, returning the updated bill
    pub fn toggle_auto_pay(&self, id: BillId) -> SpenceResult<Bill> {
        let mut bills = self.write()?;
        let bill = bills
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| SpenceError::bill_not_found(id.to_string()))?;
        bill.toggle_auto_pay();
        Ok(bill.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, day).unwrap()
    }

    fn store() -> BillStore {
        BillStore::new(vec![
            Bill::new("Rent", Money::from_cents(180000), date(20), Category::Housing),
            Bill::new("Netflix", Money::from_cents(1399), date(5), Category::Subscriptions)
                .auto_pay(true),
            Bill::new("Electricity", Money::from_cents(12000), date(3), Category::Utilities)
                .paid(true),
            Bill::new("Internet", Money::from_cents(7999), date(12), Category::Utilities),
        ])
    }

    #[test]
    fn test_upcoming_unpaid_sorted() {
        let store = store();
        let upcoming = store.upcoming().unwrap();
        assert_eq!(upcoming.len(), 3);
        assert!(upcoming.iter().all(|b| !b.paid));
        for pair in upcoming.windows(2) {
            assert!(pair[0].due_date <= pair[1].due_date);
        }
        assert_eq!(upcoming[0].name, "Netflix");
    }

    #[test]
    fn test_paid() {
        let store = store();
        let paid = store.paid().unwrap();
        assert_eq!(paid.len(), 1);
        assert_eq!(paid[0].name, "Electricity");
    }

    #[test]
    fn test_mark_paid_moves_out_of_upcoming() {
        let store = store();
        let rent = store.find("rent").unwrap().unwrap();
        let updated = store.mark_paid(rent.id).unwrap();
        assert!(updated.paid);

        let upcoming = store.upcoming().unwrap();
        assert!(upcoming.iter().all(|b| b.id != rent.id));
    }

    #[test]
    fn test_mark_paid_twice_is_idempotent() {
        let store = store();
        let rent = store.find("Rent").unwrap().unwrap();
        store.mark_paid(rent.id).unwrap();
        let again = store.mark_paid(rent.id).unwrap();
        assert!(again.paid);
    }

    #[test]
    fn test_mark_paid_unknown_id_is_not_found() {
        let store = store();
        let err = store.mark_paid(BillId::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_toggle_auto_pay() {
        let store = store();
        let netflix = store.find("netflix").unwrap().unwrap();
        assert!(netflix.auto_pay);

        let updated = store.toggle_auto_pay(netflix.id).unwrap();
        assert!(!updated.auto_pay);

        let updated = store.toggle_auto_pay(netflix.id).unwrap();
        assert!(updated.auto_pay);
    }

    #[test]
    fn test_toggle_auto_pay_unknown_id_is_not_found() {
        let store = store();
        let err = store.toggle_auto_pay(BillId::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_find_by_prefix() {
        let store = store();
        let rent = store.find("Rent").unwrap().unwrap();
        let display = format!("{}", rent.id);
        let found = store.find(&display[..8]).unwrap().unwrap();
        assert_eq!(found.id, rent.id);
    }

    #[test]
    fn test_find_unknown_is_none() {
        let store = store();
        assert!(store.find("water bill").unwrap().is_none());
    }
}
