//! Tariff codes.
//!
//! Callers pass tariff codes as small integers. Only codes 1 and 2 select a dedicated
//! pricing rule; 0 and every other code (3, -1, ...) price at the standard rate.

use serde::{Deserialize, Serialize};

/// Pricing rule selected by a tariff code.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tariff {
    /// Code 0 and any unrecognised code.
    #[default]
    Standard,
    /// Code 1.
    First,
    /// Code 2.
    Second,
}

impl Tariff {
    /// Classify a raw tariff code. Never fails.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Tariff::First,
            2 => Tariff::Second,
            _ => Tariff::Standard,
        }
    }

    /// Canonical code for this tariff.
    pub fn code(self) -> i32 {
        match self {
            Tariff::Standard => 0,
            Tariff::First => 1,
            Tariff::Second => 2,
        }
    }
}

impl core::fmt::Display for Tariff {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "tariff {}", self.code())
    }
}
