//! Transaction CLI commands

use clap::Subcommand;

use crate::display::format_transaction_register;
use crate::error::SpenceResult;
use crate::models::Category;
use crate::services::SpendingService;
use crate::session::Session;

use super::parse_window;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// List transactions
    List {
        /// Aggregation window (day, week, month)
        #[arg(short, long, default_value = "month")]
        window: String,
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
        /// Only recurring transactions
        #[arg(short, long)]
        recurring: bool,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    session: &Session,
    cmd: TransactionCommands,
) -> SpenceResult<()> {
    match cmd {
        TransactionCommands::List {
            window,
            category,
            recurring,
            limit,
        } => {
            let window = parse_window(&window)?;
            let service = SpendingService::new(session);

            let mut transactions = service.transactions_in_window(window)?;

            if let Some(label) = category {
                let category = Category::parse(&label).ok_or_else(|| {
                    crate::error::SpenceError::Validation(format!(
                        "Invalid category: '{}'. Valid categories: {}",
                        label,
                        Category::ALL.map(|c| c.label()).join(", ")
                    ))
                })?;
                transactions.retain(|t| t.category == category);
            }

            if recurring {
                transactions.retain(|t| t.recurring);
            }

            transactions.truncate(limit);

            print!("{}", format_transaction_register(&transactions));
            println!("{} transactions shown ({} window)", transactions.len(), window);
        }
    }

    Ok(())
}
