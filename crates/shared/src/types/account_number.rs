//! Typed account numbers for chart of accounts references.
//!
//! Using a newtype prevents accidentally comparing an account number with
//! an unrelated integer such as a row index.

use serde::{Deserialize, Serialize};

/// Numeric code identifying a ledger account (e.g. `1000` for Cash).
///
/// Ordering follows the numeric value, so account ranges can be expressed
/// with plain comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(pub i64);

impl AccountNumber {
    /// Creates an account number from its numeric code.
    #[must_use]
    pub const fn new(code: i64) -> Self {
        Self(code)
    }

    /// Returns the numeric code.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl From<i64> for AccountNumber {
    fn from(code: i64) -> Self {
        Self(code)
    }
}

impl std::fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AccountNumber {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
