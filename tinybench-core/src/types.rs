// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Newtype wrappers for validated plan inputs.
//!
//! All types validate their invariants at creation time.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::HardValidationError;

/// Maximum length of a suite name.
const MAX_SUITE_NAME_LEN: usize = 64;

/// Validated suite name, also used as the section name in output.
/// Must be non-empty, alphanumeric with hyphens/underscores, max 64 chars.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SuiteName(String);

impl SuiteName {
    /// Create a new SuiteName with validation.
    pub fn new(name: impl Into<String>) -> Result<Self, HardValidationError> {
        let name = name.into();

        if name.is_empty() {
            return Err(HardValidationError::InvalidFieldValue {
                field: "name",
                value: name,
                reason: "Suite name cannot be empty".to_string(),
            });
        }

        if name.len() > MAX_SUITE_NAME_LEN {
            return Err(HardValidationError::InvalidFieldValue {
                field: "name",
                value: name.clone(),
                reason: format!(
                    "Suite name too long: {} chars (max {})",
                    name.len(),
                    MAX_SUITE_NAME_LEN
                ),
            });
        }

        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(HardValidationError::InvalidFieldValue {
                field: "name",
                value: name,
                reason: "Suite name must contain only alphanumeric characters, hyphens, and underscores".to_string(),
            });
        }

        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SuiteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for SuiteName {
    type Error = HardValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SuiteName> for String {
    fn from(name: SuiteName) -> Self {
        name.0
    }
}

/// Number of times a workload is measured.
/// Must be in range 1..=10000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct RepeatCount(u32);

impl RepeatCount {
    pub const MAX: u32 = 10_000;

    /// Create a new RepeatCount with validation.
    pub fn new(count: u32) -> Result<Self, HardValidationError> {
        if count == 0 || count > Self::MAX {
            return Err(HardValidationError::InvalidFieldValue {
                field: "repeat",
                value: count.to_string(),
                reason: format!("Must be between 1 and {}", Self::MAX),
            });
        }
        Ok(Self(count))
    }

    /// Get the inner count.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Default for RepeatCount {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for RepeatCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for RepeatCount {
    type Error = HardValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RepeatCount> for u32 {
    fn from(count: RepeatCount) -> Self {
        count.0
    }
}
