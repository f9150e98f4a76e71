//! Validated identifiers for groups and users.

use std::fmt;

/// A validated non-negative identifier for a group or user.
///
/// The value `0` is reserved for the anonymous identity and is a valid
/// identifier. Validation failure is signalled with `None`, so "no match"
/// is always distinguishable from "anonymous".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(u64);

impl Id {
    /// The anonymous identity.
    pub const ANONYMOUS: Id = Id(0);

    /// Creates an identifier from an already non-negative value.
    pub const fn new(value: u64) -> Self {
        Id(value)
    }

    /// Returns the numeric value.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Validates a signed integer. Succeeds iff the value is >= 0.
    pub fn from_i64(raw: i64) -> Option<Id> {
        if raw >= 0 {
            Some(Id(raw as u64))
        } else {
            None
        }
    }

    /// Validates a string-encoded identifier.
    ///
    /// Any numerically interpretable input is accepted; fractional values
    /// truncate toward zero. Negative and non-numeric input is rejected.
    pub fn parse(raw: &str) -> Option<Id> {
        let trimmed = raw.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Self::from_i64(value);
        }
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .and_then(|value| Self::from_i64(value as i64))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
