//! Financial report generation.
//!
//! This module provides pure business logic for the trial balance report:
//! - Filter resolution (account and period ranges)
//! - Aggregation of journal entries into balance rows
//! - Rendering as CSV, HTML or JSON

pub mod error;
pub mod filter;
pub mod render;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use filter::BalanceFilter;
pub use render::ReportFormat;
pub use service::ReportService;
pub use types::*;
