//! Day-by-day schedule rendering for a stop.

use std::fmt;

use super::day::DisplayDay;
use crate::{models::Stop, schedule::DayBuckets};

/// Wrapper rendering one stop's full day-by-day schedule as markdown.
///
/// Produces the stop header followed by one section per calendar day of
/// the stay and, when present, a trailing section for attractions that
/// have no day assigned yet.
///
/// # Examples
///
/// ```rust
/// use wayfarer_core::{
///     display::StopSchedule,
///     models::Stop,
///     schedule::assign_buckets,
/// };
///
/// let stop = Stop {
///     id: 1,
///     city: "Lisbon".to_string(),
///     country: "Portugal".to_string(),
///     latitude: None,
///     longitude: None,
///     arrival_date: "2025-06-01".to_string(),
///     departure_date: "2025-06-03".to_string(),
///     notes: None,
/// };
/// let buckets = assign_buckets(&stop, &[]);
///
/// let output = format!("{}", StopSchedule::new(&stop, &buckets));
/// assert!(output.contains("Lisbon, Portugal"));
/// assert!(output.contains("Sun, Jun 1, 2025"));
/// ```
pub struct StopSchedule<'a> {
    stop: &'a Stop,
    buckets: &'a DayBuckets<'a>,
}

impl<'a> StopSchedule<'a> {
    /// Pairs a stop with its freshly computed day buckets.
    pub fn new(stop: &'a Stop, buckets: &'a DayBuckets<'a>) -> Self {
        Self { stop, buckets }
    }
}

impl<'a> fmt::Display for StopSchedule<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.stop)?;

        for (day, attractions) in self.buckets.iter_days() {
            writeln!(f)?;
            writeln!(f, "### {}", DisplayDay(&day))?;
            writeln!(f)?;
            if attractions.is_empty() {
                writeln!(f, "Nothing planned yet.")?;
            } else {
                for attraction in attractions {
                    write!(f, "{attraction}")?;
                }
            }
        }

        if !self.buckets.unscheduled().is_empty() {
            writeln!(f)?;
            writeln!(f, "### Unscheduled")?;
            writeln!(f)?;
            for attraction in self.buckets.unscheduled() {
                write!(f, "{attraction}")?;
            }
        }

        Ok(())
    }
}
