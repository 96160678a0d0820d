//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.
//! Report bodies format themselves; this module covers the shared pieces.

pub mod account;
pub mod bill;
pub mod category;
pub mod date;
pub mod transaction;

pub use account::{format_account_list, format_account_row};
pub use bill::{format_bill_list, format_bill_row, format_paid_bill_list};
pub use category::{category_icon, category_label};
pub use date::relative_date_label;
pub use transaction::{format_transaction_register, format_transaction_row};
