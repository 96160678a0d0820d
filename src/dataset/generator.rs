//! Demo dataset generation
//!
//! Builds the session's transactions, bills, and accounts from the fixed
//! templates plus randomized dates, amounts, and picks. The generator is
//! seedable so tests (and `--seed` runs) reproduce the same dataset,
//! identifiers included.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{
    AccountId, Bill, BillId, Category, Money, Transaction, TransactionId,
};

use super::templates;
use super::Dataset;

/// Transactions generated when no count is configured
pub const DEFAULT_TRANSACTION_COUNT: usize = 100;

/// How far back randomized transaction dates reach, in days
const HISTORY_DAYS: i64 = 30;

/// Bills falling due within this many days are pre-marked paid
const PREPAID_HORIZON_DAYS: i64 = 5;

/// Configuration for dataset generation
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Number of randomized transactions (recurring items come on top)
    pub transaction_count: usize,

    /// Fixed RNG seed; `None` draws one from entropy
    pub seed: Option<u64>,

    /// Reference date the dataset trails from
    pub today: NaiveDate,
}

impl DatasetConfig {
    /// Create a config with the default transaction count and no fixed seed
    pub fn new(today: NaiveDate) -> Self {
        Self {
            transaction_count: DEFAULT_TRANSACTION_COUNT,
            seed: None,
            today,
        }
    }

    /// Fix the RNG seed (builder-style)
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the randomized transaction count (builder-style)
    pub fn transaction_count(mut self, count: usize) -> Self {
        self.transaction_count = count;
        self
    }
}

/// Generate a full dataset from the templates
pub fn generate(config: &DatasetConfig) -> Dataset {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let transactions = generate_transactions(config, &mut rng);
    let bills = generate_bills(config.today, &mut rng);

    let mut accounts = templates::accounts();
    for account in &mut accounts {
        account.id = AccountId::from_pair(rng.gen(), rng.gen());
    }

    Dataset {
        transactions,
        bills,
        accounts,
    }
}

fn generate_transactions(config: &DatasetConfig, rng: &mut StdRng) -> Vec<Transaction> {
    let mut transactions = Vec::with_capacity(config.transaction_count + templates::RECURRING.len() * 3);

    for _ in 0..config.transaction_count {
        let days_ago = rng.gen_range(0..HISTORY_DAYS);
        let date = config.today - Duration::days(days_ago);

        let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
        let pool = templates::descriptions_for(category);
        let description = pool[rng.gen_range(0..pool.len())];

        // Income lands between $1,000 and $3,000; expenses between $5 and
        // $155, whole dollars either way
        let amount = if category.is_income() {
            Money::from_dollars(rng.gen_range(1000..=3000))
        } else {
            -Money::from_dollars(rng.gen_range(5..=155))
        };

        let account = templates::ACCOUNT_LABELS[rng.gen_range(0..templates::ACCOUNT_LABELS.len())];

        let mut txn = Transaction::new(date, description, amount, category, account)
            .recurring(rng.gen_bool(0.3));
        txn.id = TransactionId::from_pair(rng.gen(), rng.gen());
        transactions.push(txn);
    }

    // Clear recurring items across the past three months
    for template in &templates::RECURRING {
        for month in 0..3i64 {
            let days_ago = month * 30 + rng.gen_range(0..5);
            let date = config.today - Duration::days(days_ago);
            let account =
                templates::ACCOUNT_LABELS[rng.gen_range(0..templates::ACCOUNT_LABELS.len())];

            let mut txn = Transaction::new(
                date,
                template.description,
                Money::from_cents(template.amount_cents),
                template.category,
                account,
            )
            .recurring(true);
            txn.id = TransactionId::from_pair(rng.gen(), rng.gen());
            transactions.push(txn);
        }
    }

    // Newest first, matching the order presentation consumes
    transactions.sort_by(|a, b| b.date.cmp(&a.date));
    transactions
}

fn generate_bills(today: NaiveDate, rng: &mut StdRng) -> Vec<Bill> {
    templates::BILLS
        .iter()
        .map(|template| {
            let days_ahead = rng.gen_range(1..=HISTORY_DAYS);
            let due_date = today + Duration::days(days_ahead);

            let mut bill = Bill::new(
                template.name,
                Money::from_cents(template.amount_cents),
                due_date,
                template.category,
            )
            .auto_pay(template.auto_pay)
            .paid(days_ahead <= PREPAID_HORIZON_DAYS);
            bill.id = BillId::from_pair(rng.gen(), rng.gen());
            bill
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn seeded() -> Dataset {
        generate(&DatasetConfig::new(today()).seed(42))
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let a = seeded();
        let b = seeded();

        assert_eq!(a.transactions.len(), b.transactions.len());
        for (x, y) in a.transactions.iter().zip(&b.transactions) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.date, y.date);
            assert_eq!(x.amount, y.amount);
            assert_eq!(x.description, y.description);
        }
        for (x, y) in a.bills.iter().zip(&b.bills) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.due_date, y.due_date);
            assert_eq!(x.paid, y.paid);
        }
        for (x, y) in a.accounts.iter().zip(&b.accounts) {
            assert_eq!(x.id, y.id);
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate(&DatasetConfig::new(today()).seed(1));
        let b = generate(&DatasetConfig::new(today()).seed(2));
        let same = a
            .transactions
            .iter()
            .zip(&b.transactions)
            .all(|(x, y)| x.date == y.date && x.amount == y.amount);
        assert!(!same);
    }

    #[test]
    fn test_transaction_count() {
        let dataset = seeded();
        let expected = DEFAULT_TRANSACTION_COUNT + templates::RECURRING.len() * 3;
        assert_eq!(dataset.transactions.len(), expected);
    }

    #[test]
    fn test_dates_within_history() {
        let dataset = seeded();
        let oldest = today() - Duration::days(HISTORY_DAYS + 4 + 60);
        for txn in &dataset.transactions {
            assert!(txn.date <= today());
            assert!(txn.date >= oldest, "{} too old", txn.date);
        }
    }

    #[test]
    fn test_sorted_newest_first() {
        let dataset = seeded();
        for pair in dataset.transactions.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn test_income_sign_convention() {
        let dataset = seeded();
        for txn in &dataset.transactions {
            if txn.category.is_income() {
                assert!(txn.amount.is_positive(), "{} not positive", txn.description);
            } else {
                assert!(txn.amount.is_negative(), "{} not negative", txn.description);
            }
        }
    }

    #[test]
    fn test_bills_match_templates() {
        let dataset = seeded();
        assert_eq!(dataset.bills.len(), templates::BILLS.len());
        for bill in &dataset.bills {
            assert!(bill.amount.is_positive());
            assert!(bill.due_date > today());
            assert!(bill.due_date <= today() + Duration::days(HISTORY_DAYS));
            // Bills due soon are pre-marked paid
            let days_ahead = (bill.due_date - today()).num_days();
            assert_eq!(bill.paid, days_ahead <= PREPAID_HORIZON_DAYS);
        }
    }

    #[test]
    fn test_recurring_items_present() {
        let dataset = seeded();
        for template in &templates::RECURRING {
            let count = dataset
                .transactions
                .iter()
                .filter(|t| {
                    t.recurring
                        && t.description == template.description
                        && t.amount.cents() == template.amount_cents
                })
                .count();
            assert!(count >= 3, "{} occurs {} times", template.description, count);
        }
    }
}
