//! Calendar-day display utilities.
//!
//! This module provides a wrapper type for formatting day keys in a
//! consistent, human-readable format.

use std::fmt;

use crate::day::DayKey;

/// A wrapper around a [`DayKey`] that provides human-readable formatting
/// via the `Display` trait.
///
/// # Format
///
/// The display format follows the pattern: `Wkd, Mon D, YYYY`, e.g.
/// `Tue, Jun 3, 2025`. Weekday and month names are English; locale-aware
/// rendering is the presentation layer's concern.
pub struct DisplayDay<'a>(pub &'a DayKey);

impl<'a> fmt::Display for DisplayDay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%a, %b %-d, %Y"))
    }
}
