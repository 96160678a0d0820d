//! Spence - terminal personal-finance dashboard over a generated demo dataset
//!
//! Spence renders account balances, transactions, bills, budgets, and a
//! canned financial assistant over a fixed dataset generated fresh for each
//! session. There is no backend and no persistence: every query is an
//! in-memory aggregation, and the only thing written to disk is the
//! settings file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, bills, accounts, categories)
//! - `dataset`: Seedable demo dataset generation
//! - `session`: In-memory stores owning the dataset for one run
//! - `services`: Aggregation queries over a session
//! - `reports`: Dashboard report structs with terminal formatting
//! - `assistant`: Canned keyword assistant and insight cards
//! - `display`: Shared terminal formatting helpers
//! - `cli`: Command handlers bridging clap to the layers above
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use spence::dataset::DatasetConfig;
//! use spence::models::TimeWindow;
//! use spence::services::SpendingService;
//! use spence::session::Session;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
//! let session = Session::generate(&DatasetConfig::new(today).seed(42));
//! let service = SpendingService::new(&session);
//! let net = service.net_cash_flow(TimeWindow::Week).unwrap();
//! let income = service.total_income(TimeWindow::Week).unwrap();
//! let spending = service.total_spending(TimeWindow::Week).unwrap();
//! assert_eq!(net, income - spending);
//! ```

pub mod assistant;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod session;

pub use error::SpenceError;
