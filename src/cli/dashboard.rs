//! Dashboard command
//!
//! The default view: overview numbers, top spending categories, recent
//! transactions, upcoming bills, insight cards, and the account summary in
//! one screen.

use crate::assistant::{insights, InsightKind};
use crate::display::{format_bill_list, format_transaction_register};
use crate::error::SpenceResult;
use crate::models::TimeWindow;
use crate::reports::{CategorySpendingReport, NetWorthReport, OverviewReport};
use crate::services::SpendingService;
use crate::session::Session;

/// Number of recent transactions shown on the dashboard
const RECENT_LIMIT: usize = 5;

/// Number of upcoming bills shown on the dashboard
const BILL_LIMIT: usize = 4;

/// Render the full dashboard
pub fn handle_dashboard_command(session: &Session, window: TimeWindow) -> SpenceResult<()> {
    println!("Spence ({})", session.today().format("%Y-%m-%d"));
    println!();

    let overview = OverviewReport::generate(session, window)?;
    print!("{}", overview.format_terminal());
    println!();

    let spending = CategorySpendingReport::generate(session, window)?;
    let top = spending.top_categories(5);
    if !top.is_empty() {
        println!("Top Spending");
        for row in top {
            println!(
                "  {:<20} {:>10} {:>6.1}%",
                row.category.to_string(),
                row.total.to_string(),
                row.percentage
            );
        }
        println!();
    }

    let service = SpendingService::new(session);
    let mut recent = service.transactions_in_window(TimeWindow::Month)?;
    recent.truncate(RECENT_LIMIT);
    println!("Recent Transactions");
    print!("{}", format_transaction_register(&recent));
    println!();

    let mut upcoming = session.bills.upcoming()?;
    upcoming.truncate(BILL_LIMIT);
    println!("Upcoming Bills");
    print!("{}", format_bill_list(&upcoming, session.today()));
    println!();

    let cards = insights(session)?;
    if !cards.is_empty() {
        println!("Smart Insights");
        for card in cards {
            let marker = match card.kind {
                InsightKind::Warning => "!",
                InsightKind::Info => "i",
                InsightKind::Success => "+",
            };
            println!("[{}] {}: {}", marker, card.title, card.detail);
        }
        println!();
    }

    let net_worth = NetWorthReport::generate(session)?;
    print!("{}", net_worth.format_terminal());

    Ok(())
}
