//! Bill CLI commands
//!
//! Listing plus the two session-only mutations: marking a bill paid and
//! toggling auto-pay. Mutations report what changed; a miss on the
//! identifier is a hard error rather than a silent no-op.

use clap::Subcommand;

use crate::display::{format_bill_list, format_paid_bill_list};
use crate::error::{SpenceError, SpenceResult};
use crate::session::Session;

/// Bill subcommands
#[derive(Subcommand)]
pub enum BillCommands {
    /// List upcoming bills, soonest first
    List {
        /// Also show already-paid bills
        #[arg(short, long)]
        all: bool,
    },
    /// Mark a bill as paid
    Pay {
        /// Bill name or ID
        bill: String,
    },
    /// Toggle auto-pay for a bill
    Autopay {
        /// Bill name or ID
        bill: String,
    },
}

/// Handle a bill command
pub fn handle_bill_command(session: &Session, cmd: BillCommands) -> SpenceResult<()> {
    match cmd {
        BillCommands::List { all } => {
            let upcoming = session.bills.upcoming()?;
            println!("Upcoming Bills");
            print!("{}", format_bill_list(&upcoming, session.today()));

            if all {
                let paid = session.bills.paid()?;
                println!("\nPaid Bills");
                print!("{}", format_paid_bill_list(&paid));
            }
        }

        BillCommands::Pay { bill } => {
            let found = session
                .bills
                .find(&bill)?
                .ok_or_else(|| SpenceError::bill_not_found(&bill))?;

            if found.paid {
                println!("{} is already paid.", found.name);
                return Ok(());
            }

            let updated = session.bills.mark_paid(found.id)?;
            println!("Marked {} ({}) as paid.", updated.name, updated.amount);
        }

        BillCommands::Autopay { bill } => {
            let found = session
                .bills
                .find(&bill)?
                .ok_or_else(|| SpenceError::bill_not_found(&bill))?;

            let updated = session.bills.toggle_auto_pay(found.id)?;
            let state = if updated.auto_pay { "on" } else { "off" };
            println!("AutoPay for {} is now {}.", updated.name, state);
        }
    }

    Ok(())
}
