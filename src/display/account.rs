//! Account display formatting

use crate::models::Account;

/// Format a single account for display
pub fn format_account_row(account: &Account) -> String {
    format!(
        "{:24} {:12} {:>14}   {}",
        account.name,
        account.kind.to_string(),
        account.balance.to_string(),
        account.institution
    )
}

/// Format the account list
pub fn format_account_list(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "No linked accounts.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:24} {:12} {:>14}   {}\n",
        "Account", "Kind", "Balance", "Institution"
    ));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for account in accounts {
        output.push_str(&format_account_row(account));
        output.push('\n');
    }

    output
}
