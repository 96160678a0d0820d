//! Net worth report
//!
//! Summarizes the linked accounts: assets, liabilities, and the net
//! position across them.

use crate::error::SpenceResult;
use crate::models::{Account, Money};
use crate::session::Session;

use crate::display::format_account_row;

/// Account balances summary
#[derive(Debug, Clone)]
pub struct NetWorthReport {
    /// All linked accounts in source order
    pub accounts: Vec<Account>,
    /// Sum of positive balances on asset accounts
    pub total_assets: Money,
    /// Sum of balances owed on liability accounts (positive number)
    pub total_liabilities: Money,
    /// Assets minus liabilities
    pub net_worth: Money,
}

impl NetWorthReport {
    /// Generate the account summary
    pub fn generate(session: &Session) -> SpenceResult<Self> {
        let accounts = session.accounts.all()?;

        let mut total_assets = Money::zero();
        let mut total_liabilities = Money::zero();

        for account in &accounts {
            if account.kind.is_liability() {
                total_liabilities += account.balance.abs();
            } else {
                total_assets += account.balance;
            }
        }

        Ok(Self {
            net_worth: total_assets - total_liabilities,
            accounts,
            total_assets,
            total_liabilities,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Accounts\n");
        output.push_str(&"=".repeat(70));
        output.push('\n');

        for account in &self.accounts {
            output.push_str(&format_account_row(account));
            output.push('\n');
        }

        output.push_str(&"-".repeat(70));
        output.push('\n');
        output.push_str(&format!(
            "Assets:      {:>14}\n",
            self.total_assets.to_string()
        ));
        output.push_str(&format!(
            "Liabilities: {:>14}\n",
            self.total_liabilities.to_string()
        ));
        output.push_str(&format!(
            "Net Worth:   {:>14}\n",
            self.net_worth.to_string()
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{templates, Dataset};
    use chrono::NaiveDate;

    fn session() -> Session {
        Session::new(
            Dataset {
                accounts: templates::accounts(),
                ..Dataset::default()
            },
            NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
        )
    }

    #[test]
    fn test_totals() {
        let report = NetWorthReport::generate(&session()).unwrap();

        // Checking + savings
        assert_eq!(report.total_assets.cents(), 4250_65 + 12750_42);
        // Both credit cards, as amounts owed
        assert_eq!(report.total_liabilities.cents(), 1850_30 + 750_80);
        assert_eq!(
            report.net_worth,
            report.total_assets - report.total_liabilities
        );
    }

    #[test]
    fn test_format_terminal() {
        let report = NetWorthReport::generate(&session()).unwrap();
        let formatted = report.format_terminal();
        assert!(formatted.contains("Chase Checking"));
        assert!(formatted.contains("Net Worth"));
        assert!(formatted.contains("$14399.97"));
    }
}
