//! Core business logic for Tally.
//!
//! This crate contains pure business logic with ZERO file-system or network
//! dependencies. Callers supply the chart of accounts and journal entries;
//! the crate aggregates them into a trial balance and renders it.
//!
//! # Modules
//!
//! - `ledger` - Accounts, journal entries, and period ranges
//! - `reports` - Trial balance aggregation, filtering, and rendering

pub mod ledger;
pub mod reports;
