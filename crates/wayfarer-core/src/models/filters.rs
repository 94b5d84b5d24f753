//! Filter types for viewing attraction lists.

use std::str::FromStr;

use super::{Attraction, Priority};

/// Priority view filter over an attraction list.
///
/// Filtering is a pure, read-only projection: it never mutates priorities
/// or ordering, and filtering an already-filtered list by the same tier
/// yields the same list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    /// Show every attraction
    #[default]
    All,

    /// Show only attractions whose effective tier matches
    Only(Priority),
}

impl PriorityFilter {
    /// Whether the attraction passes the filter.
    ///
    /// An attraction with no stored priority matches [`Priority::Should`],
    /// the unmarked default tier.
    pub fn matches(&self, attraction: &Attraction) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(tier) => attraction.effective_priority() == *tier,
        }
    }

    /// Project the attractions that pass the filter, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wayfarer_core::models::{Priority, PriorityFilter};
    ///
    /// let filter: PriorityFilter = "must".parse().unwrap();
    /// assert_eq!(filter, PriorityFilter::Only(Priority::Must));
    /// assert_eq!("all".parse(), Ok(PriorityFilter::All));
    /// ```
    pub fn apply<'a>(&self, attractions: &'a [Attraction]) -> Vec<&'a Attraction> {
        attractions.iter().filter(|a| self.matches(a)).collect()
    }
}

impl FromStr for PriorityFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(PriorityFilter::All);
        }
        s.parse::<Priority>().map(PriorityFilter::Only)
    }
}
