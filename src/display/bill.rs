//! Bill display formatting

use chrono::NaiveDate;

use crate::models::Bill;

use super::category::category_icon;
use super::date::relative_date_label;

/// Format a single bill for display
pub fn format_bill_row(bill: &Bill, today: NaiveDate) -> String {
    let auto_pay = if bill.auto_pay { "auto" } else { "    " };
    let due = relative_date_label(bill.due_date, today);

    format!(
        "{} {:22} {:>10}  {}  due {} ({})",
        category_icon(bill.category),
        bill.name,
        bill.amount.to_string(),
        auto_pay,
        bill.due_date.format("%Y-%m-%d"),
        due
    )
}

/// Format the upcoming bills list
pub fn format_bill_list(bills: &[Bill], today: NaiveDate) -> String {
    if bills.is_empty() {
        return "No upcoming bills.\n".to_string();
    }

    let mut output = String::new();
    for bill in bills {
        output.push_str(&format_bill_row(bill, today));
        output.push('\n');
    }
    output
}

/// Format the paid bills list
pub fn format_paid_bill_list(bills: &[Bill]) -> String {
    if bills.is_empty() {
        return "No paid bills.\n".to_string();
    }

    let mut output = String::new();
    for bill in bills {
        output.push_str(&format!(
            "{} {:22} {:>10}  paid\n",
            category_icon(bill.category),
            bill.name,
            bill.amount.to_string()
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn bill() -> Bill {
        Bill::new(
            "Internet",
            Money::from_cents(7999),
            NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            Category::Utilities,
        )
        .auto_pay(true)
    }

    #[test]
    fn test_format_bill_row() {
        let formatted = format_bill_row(&bill(), today());
        assert!(formatted.contains("Internet"));
        assert!(formatted.contains("$79.99"));
        assert!(formatted.contains("auto"));
        assert!(formatted.contains("In 3 days"));
    }

    #[test]
    fn test_format_empty_list() {
        assert!(format_bill_list(&[], today()).contains("No upcoming bills"));
        assert!(format_paid_bill_list(&[]).contains("No paid bills"));
    }

    #[test]
    fn test_format_paid_list() {
        let paid = bill().paid(true);
        let formatted = format_paid_bill_list(&[paid]);
        assert!(formatted.contains("Internet"));
        assert!(formatted.contains("paid"));
    }
}
