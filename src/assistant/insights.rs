//! Smart insight cards
//!
//! The three dashboard cards, derived from the session instead of
//! hardcoded: dining week-over-week, the next auto-pay subscription
//! charge, and utilities month-over-month.

use crate::display::relative_date_label;
use crate::error::SpenceResult;
use crate::models::{Category, Money, TimeWindow};
use crate::services::percent_change;
use crate::session::Session;

/// Severity of an insight card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    /// Something trending the wrong way
    Warning,
    /// Neutral heads-up
    Info,
    /// Something trending the right way
    Success,
}

/// One insight card
#[derive(Debug, Clone)]
pub struct Insight {
    /// Card headline
    pub title: String,
    /// Supporting sentence
    pub detail: String,
    /// Severity
    pub kind: InsightKind,
}

/// Derive the dashboard's insight cards from the session
pub fn insights(session: &Session) -> SpenceResult<Vec<Insight>> {
    let mut cards = Vec::with_capacity(3);

    if let Some(card) = dining_trend(session)? {
        cards.push(card);
    }
    if let Some(card) = next_subscription_charge(session)? {
        cards.push(card);
    }
    if let Some(card) = utilities_trend(session)? {
        cards.push(card);
    }

    Ok(cards)
}

fn category_spend_in_range(
    session: &Session,
    category: Category,
    start: chrono::NaiveDate,
    end: chrono::NaiveDate,
) -> SpenceResult<Money> {
    Ok(session
        .transactions
        .in_range(start, end)?
        .iter()
        .filter(|t| t.is_expense() && t.category == category)
        .map(|t| t.amount.abs())
        .sum())
}

fn dining_trend(session: &Session) -> SpenceResult<Option<Insight>> {
    let today = session.today();
    let (start, end) = TimeWindow::Week.range(today);
    let current = category_spend_in_range(session, Category::Dining, start, end)?;
    let (prev_start, prev_end) = TimeWindow::Week.previous_range(today);
    let previous = category_spend_in_range(session, Category::Dining, prev_start, prev_end)?;

    if current.is_zero() && previous.is_zero() {
        return Ok(None);
    }

    let change = percent_change(current, previous);
    let card = if change > 0.0 {
        Insight {
            title: format!("{:.0}% Higher Food Spending", change),
            detail: format!(
                "You've spent {:.0}% more on dining out compared to last week.",
                change
            ),
            kind: InsightKind::Warning,
        }
    } else {
        Insight {
            title: "Dining Spending Down".to_string(),
            detail: format!(
                "Your dining spending is down {:.0}% from last week. Great job!",
                -change
            ),
            kind: InsightKind::Success,
        }
    };
    Ok(Some(card))
}

fn next_subscription_charge(session: &Session) -> SpenceResult<Option<Insight>> {
    let upcoming = session.bills.upcoming()?;
    let next = upcoming
        .iter()
        .find(|b| b.auto_pay && b.category == Category::Subscriptions);

    Ok(next.map(|bill| Insight {
        title: format!("Recurring {} Payment", bill.name),
        detail: format!(
            "Your {} subscription ({}) will be charged {}.",
            bill.name,
            bill.amount,
            relative_date_label(bill.due_date, session.today()).to_lowercase()
        ),
        kind: InsightKind::Info,
    }))
}

fn utilities_trend(session: &Session) -> SpenceResult<Option<Insight>> {
    let today = session.today();
    let (start, end) = TimeWindow::Month.range(today);
    let current = category_spend_in_range(session, Category::Utilities, start, end)?;
    let (prev_start, prev_end) = TimeWindow::Month.previous_range(today);
    let previous = category_spend_in_range(session, Category::Utilities, prev_start, prev_end)?;

    if current.is_zero() && previous.is_zero() {
        return Ok(None);
    }

    let change = percent_change(current, previous);
    let card = if change <= 0.0 {
        Insight {
            title: "Utilities Spending Down".to_string(),
            detail: format!(
                "Your utilities spending is down {:.0}% from last month. Great job!",
                -change
            ),
            kind: InsightKind::Success,
        }
    } else {
        Insight {
            title: format!("{:.0}% Higher Utilities Spending", change),
            detail: format!(
                "Your utilities spending is up {:.0}% from last month.",
                change
            ),
            kind: InsightKind::Warning,
        }
    };
    Ok(Some(card))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, DatasetConfig};
    use crate::models::{Bill, Transaction};
    use chrono::{Duration, NaiveDate};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 30).unwrap()
    }

    fn txn(days_ago: i64, cents: i64, category: Category) -> Transaction {
        Transaction::new(
            today() - Duration::days(days_ago),
            "Test",
            Money::from_cents(cents),
            category,
            "Chase Checking",
        )
    }

    #[test]
    fn test_empty_session_has_no_insights() {
        let session = Session::new(Dataset::default(), today());
        assert!(insights(&session).unwrap().is_empty());
    }

    #[test]
    fn test_generated_session_produces_cards() {
        let session = Session::generate(&DatasetConfig::new(today()).seed(9));
        let cards = insights(&session).unwrap();
        assert!(!cards.is_empty());
    }

    #[test]
    fn test_dining_up_is_a_warning() {
        let session = Session::new(
            Dataset {
                transactions: vec![
                    txn(1, -60_00, Category::Dining),
                    txn(10, -40_00, Category::Dining),
                ],
                ..Dataset::default()
            },
            today(),
        );
        let cards = insights(&session).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].kind, InsightKind::Warning);
        assert!(cards[0].title.contains("50% Higher Food Spending"));
    }

    #[test]
    fn test_utilities_down_is_a_success() {
        let session = Session::new(
            Dataset {
                transactions: vec![
                    txn(5, -88_00, Category::Utilities),
                    txn(45, -100_00, Category::Utilities),
                ],
                ..Dataset::default()
            },
            today(),
        );
        let cards = insights(&session).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].kind, InsightKind::Success);
        assert!(cards[0].detail.contains("down 12%"));
    }

    #[test]
    fn test_subscription_card_names_next_charge() {
        let session = Session::new(
            Dataset {
                bills: vec![
                    Bill::new(
                        "Netflix",
                        Money::from_cents(13_99),
                        today() + Duration::days(1),
                        Category::Subscriptions,
                    )
                    .auto_pay(true),
                    Bill::new(
                        "Spotify",
                        Money::from_cents(9_99),
                        today() + Duration::days(9),
                        Category::Subscriptions,
                    )
                    .auto_pay(true),
                ],
                ..Dataset::default()
            },
            today(),
        );
        let cards = insights(&session).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].kind, InsightKind::Info);
        assert!(cards[0].title.contains("Netflix"));
        assert!(cards[0].detail.contains("charged tomorrow"));
    }
}
