//! Account model
//!
//! Linked financial accounts (checking, savings, credit, investment).
//! Accounts are read-only in this app: balances come from the generated
//! dataset and never move.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;

/// Kind of financial account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Checking account
    #[default]
    Checking,
    /// Savings account
    Savings,
    /// Credit card
    Credit,
    /// Investment account
    Investment,
}

impl AccountKind {
    /// Returns true if balances on this kind represent debt
    pub fn is_liability(&self) -> bool {
        matches!(self, Self::Credit)
    }

    /// Parse account kind from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "checking" => Some(Self::Checking),
            "savings" => Some(Self::Savings),
            "credit" | "credit_card" | "creditcard" => Some(Self::Credit),
            "investment" => Some(Self::Investment),
            _ => None,
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => write!(f, "Checking"),
            Self::Savings => write!(f, "Savings"),
            Self::Credit => write!(f, "Credit Card"),
            Self::Investment => write!(f, "Investment"),
        }
    }
}

/// A linked financial account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Account name (e.g., "Chase Checking")
    pub name: String,

    /// Kind of account
    pub kind: AccountKind,

    /// Current balance (negative for credit card debt)
    pub balance: Money,

    /// Institution holding the account
    pub institution: String,
}

impl Account {
    /// Create a new account
    pub fn new(
        name: impl Into<String>,
        kind: AccountKind,
        balance: Money,
        institution: impl Into<String>,
    ) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            kind,
            balance,
            institution: institution.into(),
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account() {
        let account = Account::new(
            "Chase Checking",
            AccountKind::Checking,
            Money::from_cents(425065),
            "Chase Bank",
        );
        assert_eq!(account.name, "Chase Checking");
        assert_eq!(account.kind, AccountKind::Checking);
        assert_eq!(account.balance.cents(), 425065);
    }

    #[test]
    fn test_is_liability() {
        assert!(AccountKind::Credit.is_liability());
        assert!(!AccountKind::Checking.is_liability());
        assert!(!AccountKind::Savings.is_liability());
        assert!(!AccountKind::Investment.is_liability());
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!(AccountKind::parse("checking"), Some(AccountKind::Checking));
        assert_eq!(AccountKind::parse("SAVINGS"), Some(AccountKind::Savings));
        assert_eq!(AccountKind::parse("credit_card"), Some(AccountKind::Credit));
        assert_eq!(AccountKind::parse("crypto"), None);
    }

    #[test]
    fn test_serialization() {
        let account = Account::new(
            "Amex Gold",
            AccountKind::Credit,
            Money::from_cents(-75080),
            "American Express",
        );
        let json = serde_json::to_string(&account).unwrap();
        let deserialized: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(account.id, deserialized.id);
        assert_eq!(account.balance, deserialized.balance);
    }

    #[test]
    fn test_display() {
        let account = Account::new(
            "Wells Fargo Savings",
            AccountKind::Savings,
            Money::from_cents(1275042),
            "Wells Fargo",
        );
        assert_eq!(format!("{}", account), "Wells Fargo Savings (Savings)");
    }
}
