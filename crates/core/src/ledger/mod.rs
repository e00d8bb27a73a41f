//! General ledger reference and transactional data.
//!
//! This module holds the inputs of every report:
//! - Chart of accounts entries
//! - Journal entries (dated debits and credits)
//! - Period ranges derived from journal entries

pub mod account;
pub mod entry;
pub mod period;

pub use account::{Account, account_number_range};
pub use entry::JournalEntry;
pub use period::{PeriodRange, maximum_period_range};
