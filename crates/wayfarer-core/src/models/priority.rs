//! Priority tiers for attractions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of attraction priority tiers.
///
/// An attraction with no stored priority is treated as [`Priority::Should`],
/// the unmarked middle tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Cannot be skipped without ruining the day
    Must,

    /// Worth doing; the default for unmarked attractions
    #[default]
    Should,

    /// Nice to have if time allows
    Could,

    /// Deliberately dropped from the plan
    Skip,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "must" => Ok(Priority::Must),
            "should" => Ok(Priority::Should),
            "could" => Ok(Priority::Could),
            "skip" => Ok(Priority::Skip),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    /// Convert to the wire string representation used by the bulk endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Must => "must",
            Priority::Should => "should",
            Priority::Could => "could",
            Priority::Skip => "skip",
        }
    }

    /// Get the tier with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wayfarer_core::models::Priority;
    ///
    /// assert_eq!(Priority::Must.with_icon(), "★ Must");
    /// assert_eq!(Priority::Skip.with_icon(), "⊘ Skip");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            Priority::Must => "★ Must",
            Priority::Should => "• Should",
            Priority::Could => "○ Could",
            Priority::Skip => "⊘ Skip",
        }
    }
}
