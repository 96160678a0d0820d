//! Transaction display formatting
//!
//! Formats transactions for terminal display as register-style rows.

use crate::models::Transaction;

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction) -> String {
    let recurring_indicator = if txn.recurring { "↻" } else { " " };

    format!(
        "{} {} {:22} {:14} {:>12}",
        recurring_indicator,
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.description, 22),
        truncate(&txn.category.to_string(), 14),
        txn.amount.to_string()
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "  {:10} {:22} {:14} {:>12}\n",
        "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(64));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum length, padding short strings
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}
