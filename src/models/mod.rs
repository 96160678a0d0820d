//! Core data models for Spence
//!
//! This module contains the data structures that represent the dashboard
//! domain: transactions, bills, accounts, categories, and the closed
//! selector enums for aggregation windows and analytics layouts.

pub mod account;
pub mod bill;
pub mod category;
pub mod chart;
pub mod ids;
pub mod money;
pub mod transaction;
pub mod window;

pub use account::{Account, AccountKind};
pub use bill::Bill;
pub use category::Category;
pub use chart::ChartType;
pub use ids::{AccountId, BillId, TransactionId};
pub use money::Money;
pub use transaction::Transaction;
pub use window::TimeWindow;
