//! Country record.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A country record, keyed by its code.
///
/// Missing JSON fields decode to empty strings (`serde(default)`) so that a
/// payload omitting a field fails *presence validation* (HTTP 400 at the
/// boundary) rather than decoding (HTTP 500).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Country {
    pub code: String,
    pub name: String,
}

impl Country {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Presence check for both fields.
    ///
    /// Exact `is_empty` on purpose: whitespace-only values are accepted, only
    /// the empty string is rejected.
    pub fn validate(&self) -> DomainResult<()> {
        if self.code.is_empty() {
            return Err(DomainError::validation("country code required"));
        }
        if self.name.is_empty() {
            return Err(DomainError::validation("country name required"));
        }
        Ok(())
    }
}
