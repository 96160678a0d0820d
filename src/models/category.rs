//! Spending categories
//!
//! The category set is closed: every transaction and bill carries exactly
//! one of these fifteen labels. `income` is special-cased by the spending
//! aggregations, which only ever look at the other fourteen.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of labels classifying a transaction or bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Groceries,
    Dining,
    Transportation,
    Housing,
    Utilities,
    Entertainment,
    Shopping,
    Travel,
    Healthcare,
    Personal,
    Income,
    Education,
    Fitness,
    Subscriptions,
    Other,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 15] = [
        Self::Groceries,
        Self::Dining,
        Self::Transportation,
        Self::Housing,
        Self::Utilities,
        Self::Entertainment,
        Self::Shopping,
        Self::Travel,
        Self::Healthcare,
        Self::Personal,
        Self::Income,
        Self::Education,
        Self::Fitness,
        Self::Subscriptions,
        Self::Other,
    ];

    /// Iterate the spending categories (everything except income)
    pub fn spending() -> impl Iterator<Item = Category> {
        Self::ALL.iter().copied().filter(|c| !c.is_income())
    }

    /// Whether this is the income category
    pub const fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    /// Parse a category from its lowercase label
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "groceries" => Some(Self::Groceries),
            "dining" => Some(Self::Dining),
            "transportation" => Some(Self::Transportation),
            "housing" => Some(Self::Housing),
            "utilities" => Some(Self::Utilities),
            "entertainment" => Some(Self::Entertainment),
            "shopping" => Some(Self::Shopping),
            "travel" => Some(Self::Travel),
            "healthcare" => Some(Self::Healthcare),
            "personal" => Some(Self::Personal),
            "income" => Some(Self::Income),
            "education" => Some(Self::Education),
            "fitness" => Some(Self::Fitness),
            "subscriptions" => Some(Self::Subscriptions),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// The lowercase label used on the wire and in CLI arguments
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Groceries => "groceries",
            Self::Dining => "dining",
            Self::Transportation => "transportation",
            Self::Housing => "housing",
            Self::Utilities => "utilities",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
            Self::Travel => "travel",
            Self::Healthcare => "healthcare",
            Self::Personal => "personal",
            Self::Income => "income",
            Self::Education => "education",
            Self::Fitness => "fitness",
            Self::Subscriptions => "subscriptions",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Groceries => write!(f, "Groceries"),
            Self::Dining => write!(f, "Dining"),
            Self::Transportation => write!(f, "Transportation"),
            Self::Housing => write!(f, "Housing"),
            Self::Utilities => write!(f, "Utilities"),
            Self::Entertainment => write!(f, "Entertainment"),
            Self::Shopping => write!(f, "Shopping"),
            Self::Travel => write!(f, "Travel"),
            Self::Healthcare => write!(f, "Healthcare"),
            Self::Personal => write!(f, "Personal"),
            Self::Income => write!(f, "Income"),
            Self::Education => write!(f, "Education"),
            Self::Fitness => write!(f, "Fitness"),
            Self::Subscriptions => write!(f, "Subscriptions"),
            Self::Other => write!(f, "Other"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_fifteen_labels() {
        assert_eq!(Category::ALL.len(), 15);
    }

    #[test]
    fn test_spending_excludes_income() {
        let spending: Vec<_> = Category::spending().collect();
        assert_eq!(spending.len(), 14);
        assert!(!spending.contains(&Category::Income));
    }

    #[test]
    fn test_parse_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.label()), Some(category));
        }
        assert_eq!(Category::parse("DINING"), Some(Category::Dining));
        assert_eq!(Category::parse("unknown"), None);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Category::Subscriptions).unwrap();
        assert_eq!(json, "\"subscriptions\"");

        let parsed: Category = serde_json::from_str("\"groceries\"").unwrap();
        assert_eq!(parsed, Category::Groceries);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Category::Healthcare), "Healthcare");
        assert_eq!(format!("{}", Category::Other), "Other");
    }
}
