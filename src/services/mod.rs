//! Service layer for Spence
//!
//! The service layer answers aggregation questions on top of the session
//! stores. Bill mutations live on the bill store itself; everything here
//! is read-only.

pub mod spending;

pub use spending::{percent_change, SpendingService};
