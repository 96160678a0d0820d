//! Reports module for Spence
//!
//! Provides the dashboard's aggregate views: spending overview, category
//! breakdown, analytics series, budget overview, and net worth.

pub mod analytics;
pub mod budget;
pub mod net_worth;
pub mod overview;
pub mod spending;

pub use analytics::AnalyticsReport;
pub use budget::{BudgetReport, BudgetRow};
pub use net_worth::NetWorthReport;
pub use overview::OverviewReport;
pub use spending::{CategoryRow, CategorySpendingReport};
