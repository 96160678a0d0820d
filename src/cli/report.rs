//! Report CLI commands
//!
//! Spending analytics, budget overview, and account summary.

use crate::error::SpenceResult;
use crate::reports::{AnalyticsReport, BudgetReport, CategorySpendingReport, NetWorthReport, OverviewReport};
use crate::session::Session;

use super::{parse_chart, parse_window};

/// Handle the spending analytics command
pub fn handle_spending_command(
    session: &Session,
    window: &str,
    chart: &str,
    by_category: bool,
) -> SpenceResult<()> {
    let window = parse_window(window)?;

    let overview = OverviewReport::generate(session, window)?;
    print!("{}", overview.format_terminal());
    println!();

    if by_category {
        let report = CategorySpendingReport::generate(session, window)?;
        print!("{}", report.format_terminal());
    } else {
        let chart = parse_chart(chart)?;
        let report = AnalyticsReport::generate(session, window, chart)?;
        print!("{}", report.format_terminal());
    }

    Ok(())
}

/// Handle the budget overview command
pub fn handle_budget_command(session: &Session) -> SpenceResult<()> {
    let report = BudgetReport::generate(session)?;
    print!("{}", report.format_terminal());
    Ok(())
}

/// Handle the accounts command
pub fn handle_accounts_command(session: &Session) -> SpenceResult<()> {
    let report = NetWorthReport::generate(session)?;
    print!("{}", report.format_terminal());
    Ok(())
}
