//! Common types used across the application.

pub mod account_number;
pub mod filter;

pub use account_number::AccountNumber;
pub use filter::FilterInput;
