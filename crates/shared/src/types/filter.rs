//! Raw report filter input.

use serde::{Deserialize, Serialize};

/// Filter bounds exactly as the user supplied them.
///
/// Every bound is optional and untyped. Turning this into a typed filter is
/// lenient: blank or unparseable values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterInput {
    /// Lowest account number to include.
    #[serde(default)]
    pub start_account: Option<String>,
    /// Highest account number to include.
    #[serde(default)]
    pub end_account: Option<String>,
    /// Earliest period to include.
    #[serde(default)]
    pub start_period: Option<String>,
    /// Latest period to include.
    #[serde(default)]
    pub end_period: Option<String>,
}

impl FilterInput {
    /// Creates an empty input (no bounds).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the account range bounds.
    #[must_use]
    pub fn with_accounts(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_account = Some(start.into());
        self.end_account = Some(end.into());
        self
    }

    /// Sets the period range bounds.
    #[must_use]
    pub fn with_periods(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_period = Some(start.into());
        self.end_period = Some(end.into());
        self
    }

    /// Returns true if no bound carries a non-blank value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [
            &self.start_account,
            &self.end_account,
            &self.start_period,
            &self.end_period,
        ]
        .iter()
        .all(|bound| bound.as_deref().is_none_or(|v| v.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_input_default_is_empty() {
        assert!(FilterInput::new().is_empty());
    }

    #[test]
    fn test_filter_input_blank_values_are_empty() {
        let input = FilterInput::new().with_accounts("  ", "");
        assert!(input.is_empty());
    }

    #[test]
    fn test_filter_input_builders() {
        let input = FilterInput::new()
            .with_accounts("100", "200")
            .with_periods("2024-01-01", "2024-12-31");

        assert!(!input.is_empty());
        assert_eq!(input.start_account.as_deref(), Some("100"));
        assert_eq!(input.end_account.as_deref(), Some("200"));
        assert_eq!(input.start_period.as_deref(), Some("2024-01-01"));
        assert_eq!(input.end_period.as_deref(), Some("2024-12-31"));
    }
}
