//! Fixed templates the demo dataset is generated from
//!
//! Merchant names, recurring charges, bill schedules, and linked accounts
//! are constant; the generator layers randomized dates, amounts, and picks
//! on top of them.

use crate::models::{Account, AccountKind, Category, Money};

/// Five merchant descriptions per category, in `Category::ALL` order
pub const DESCRIPTIONS: [(Category, [&str; 5]); 15] = [
    (
        Category::Groceries,
        ["Whole Foods", "Trader Joe's", "Kroger", "Publix", "Safeway"],
    ),
    (
        Category::Dining,
        [
            "Starbucks",
            "Chipotle",
            "Uber Eats",
            "Cheesecake Factory",
            "Local Café",
        ],
    ),
    (
        Category::Transportation,
        ["Uber", "Lyft", "Gas Station", "Subway", "Bus Fare"],
    ),
    (
        Category::Housing,
        [
            "Rent Payment",
            "Mortgage",
            "Home Insurance",
            "HOA Fees",
            "Property Tax",
        ],
    ),
    (
        Category::Utilities,
        [
            "Electric Bill",
            "Water Bill",
            "Internet",
            "Gas Bill",
            "Phone Bill",
        ],
    ),
    (
        Category::Entertainment,
        [
            "Netflix",
            "Movie Theater",
            "Concert Tickets",
            "Spotify",
            "Game Pass",
        ],
    ),
    (
        Category::Shopping,
        ["Amazon", "Target", "Walmart", "Best Buy", "Nike"],
    ),
    (
        Category::Travel,
        [
            "Airbnb",
            "Flight Tickets",
            "Hotel Stay",
            "Car Rental",
            "Travel Insurance",
        ],
    ),
    (
        Category::Healthcare,
        [
            "Doctor Visit",
            "Pharmacy",
            "Health Insurance",
            "Dental Care",
            "Vision Care",
        ],
    ),
    (
        Category::Personal,
        ["Haircut", "Gym Membership", "Cosmetics", "Clothing", "Gifts"],
    ),
    (
        Category::Income,
        ["Salary", "Freelance", "Dividends", "Interest", "Side Hustle"],
    ),
    (
        Category::Education,
        [
            "Tuition",
            "Books",
            "Online Course",
            "Student Loan",
            "Educational Supplies",
        ],
    ),
    (
        Category::Fitness,
        [
            "Gym Membership",
            "Fitness App",
            "Sports Equipment",
            "Protein Supplements",
            "Sports Club",
        ],
    ),
    (
        Category::Subscriptions,
        [
            "Amazon Prime",
            "Streaming Service",
            "Cloud Storage",
            "Magazine",
            "Software",
        ],
    ),
    (
        Category::Other,
        ["Misc Payment", "Donation", "Fee", "Refund", "Cash Withdrawal"],
    ),
];

/// Account labels stamped on generated transactions
pub const ACCOUNT_LABELS: [&str; 4] = [
    "Chase Checking",
    "Bank of America Credit",
    "Wells Fargo Savings",
    "Amex Gold",
];

/// A fixed recurring charge or deposit repeated at monthly intervals
pub struct RecurringTemplate {
    pub description: &'static str,
    pub category: Category,
    pub amount_cents: i64,
}

/// Recurring items injected three months back from the reference date
pub const RECURRING: [RecurringTemplate; 7] = [
    RecurringTemplate {
        description: "Netflix",
        category: Category::Subscriptions,
        amount_cents: -13_99,
    },
    RecurringTemplate {
        description: "Spotify",
        category: Category::Subscriptions,
        amount_cents: -9_99,
    },
    RecurringTemplate {
        description: "Rent",
        category: Category::Housing,
        amount_cents: -1800_00,
    },
    RecurringTemplate {
        description: "Internet",
        category: Category::Utilities,
        amount_cents: -79_99,
    },
    RecurringTemplate {
        description: "Phone Bill",
        category: Category::Utilities,
        amount_cents: -85_00,
    },
    RecurringTemplate {
        description: "Gym Membership",
        category: Category::Fitness,
        amount_cents: -50_00,
    },
    RecurringTemplate {
        description: "Salary",
        category: Category::Income,
        amount_cents: 3500_00,
    },
];

/// A bill schedule entry
pub struct BillTemplate {
    pub name: &'static str,
    pub amount_cents: i64,
    pub category: Category,
    pub auto_pay: bool,
}

/// The ten bills scheduled into the next 30 days
pub const BILLS: [BillTemplate; 10] = [
    BillTemplate {
        name: "Rent",
        amount_cents: 1800_00,
        category: Category::Housing,
        auto_pay: false,
    },
    BillTemplate {
        name: "Electricity",
        amount_cents: 120_00,
        category: Category::Utilities,
        auto_pay: true,
    },
    BillTemplate {
        name: "Internet",
        amount_cents: 79_99,
        category: Category::Utilities,
        auto_pay: true,
    },
    BillTemplate {
        name: "Phone Bill",
        amount_cents: 85_00,
        category: Category::Utilities,
        auto_pay: true,
    },
    BillTemplate {
        name: "Netflix",
        amount_cents: 13_99,
        category: Category::Subscriptions,
        auto_pay: true,
    },
    BillTemplate {
        name: "Spotify",
        amount_cents: 9_99,
        category: Category::Subscriptions,
        auto_pay: true,
    },
    BillTemplate {
        name: "Credit Card Payment",
        amount_cents: 450_00,
        category: Category::Other,
        auto_pay: false,
    },
    BillTemplate {
        name: "Gym Membership",
        amount_cents: 50_00,
        category: Category::Fitness,
        auto_pay: true,
    },
    BillTemplate {
        name: "Car Insurance",
        amount_cents: 120_00,
        category: Category::Transportation,
        auto_pay: false,
    },
    BillTemplate {
        name: "Student Loan",
        amount_cents: 320_00,
        category: Category::Education,
        auto_pay: true,
    },
];

/// The four linked demo accounts
pub fn accounts() -> Vec<Account> {
    vec![
        Account::new(
            "Chase Checking",
            AccountKind::Checking,
            Money::from_cents(4250_65),
            "Chase Bank",
        ),
        Account::new(
            "Wells Fargo Savings",
            AccountKind::Savings,
            Money::from_cents(12750_42),
            "Wells Fargo",
        ),
        Account::new(
            "Bank of America Credit",
            AccountKind::Credit,
            Money::from_cents(-1850_30),
            "Bank of America",
        ),
        Account::new(
            "Amex Gold",
            AccountKind::Credit,
            Money::from_cents(-750_80),
            "American Express",
        ),
    ]
}

/// Look up the description pool for a category
pub fn descriptions_for(category: Category) -> &'static [&'static str; 5] {
    // DESCRIPTIONS is in declaration order, so the discriminant indexes it
    &DESCRIPTIONS[category as usize].1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_descriptions() {
        for category in Category::ALL {
            let pool = descriptions_for(category);
            assert_eq!(pool.len(), 5);
        }
    }

    #[test]
    fn test_descriptions_match_all_order() {
        for (i, (category, _)) in DESCRIPTIONS.iter().enumerate() {
            assert_eq!(*category, Category::ALL[i]);
        }
    }

    #[test]
    fn test_bill_amounts_positive() {
        for template in &BILLS {
            assert!(template.amount_cents > 0, "{} owes nothing", template.name);
        }
    }

    #[test]
    fn test_recurring_only_salary_is_income() {
        for template in &RECURRING {
            if template.category.is_income() {
                assert_eq!(template.description, "Salary");
                assert!(template.amount_cents > 0);
            } else {
                assert!(template.amount_cents < 0);
            }
        }
    }

    #[test]
    fn test_four_accounts() {
        let accounts = accounts();
        assert_eq!(accounts.len(), 4);
        assert_eq!(
            accounts.iter().filter(|a| a.kind.is_liability()).count(),
            2
        );
    }
}
