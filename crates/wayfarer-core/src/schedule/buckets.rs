//! Day-bucket assignment over a stop's date range.
//!
//! Buckets are a derived, non-owned view: they borrow the attraction list
//! and are recomputed on every call. Callers that want to change a bucket
//! mutate the underlying attractions and recompute.

use std::collections::HashMap;

use crate::{
    day::DayKey,
    models::{Attraction, Stop},
};

/// One stop's attractions grouped by planned calendar day.
///
/// Holds one bucket per day of the stop's inclusive date range plus a
/// synthetic unscheduled bucket for attractions with no planned day, an
/// unparsable one, or one outside the range. Every input attraction lands
/// in exactly one bucket:
/// `Σ bucket sizes + unscheduled size == input size`.
#[derive(Debug)]
pub struct DayBuckets<'a> {
    days: Vec<DayKey>,
    buckets: HashMap<DayKey, Vec<&'a Attraction>>,
    unscheduled: Vec<&'a Attraction>,
}

impl<'a> DayBuckets<'a> {
    /// Consecutive day keys of the stop's range, in calendar order.
    ///
    /// Empty when the stop's own dates fail to decode or are inverted; all
    /// attractions are unscheduled in that case.
    pub fn days(&self) -> &[DayKey] {
        &self.days
    }

    /// Attractions planned for the given day, in `order_index` order.
    pub fn bucket(&self, day: DayKey) -> &[&'a Attraction] {
        self.buckets.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Attractions with no day inside the stop's range.
    pub fn unscheduled(&self) -> &[&'a Attraction] {
        &self.unscheduled
    }

    /// Count of attractions that landed in a day bucket.
    pub fn scheduled_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Total count across all buckets, always equal to the input size.
    pub fn total(&self) -> usize {
        self.scheduled_count() + self.unscheduled.len()
    }

    /// Iterates `(day, bucket)` pairs in calendar order.
    pub fn iter_days(&self) -> impl Iterator<Item = (DayKey, &[&'a Attraction])> + '_ {
        self.days.iter().map(|day| (*day, self.bucket(*day)))
    }
}

/// Groups a stop's attractions into per-day buckets plus an unscheduled
/// bucket.
///
/// The day list spans the stop's inclusive `[arrival, departure]` range.
/// An attraction is appended to the bucket its decoded `planned_date`
/// names when that day is in the range, and to `unscheduled` otherwise;
/// within each bucket the input order (current `order_index` order) is
/// preserved.
pub fn assign_buckets<'a>(stop: &Stop, attractions: &'a [Attraction]) -> DayBuckets<'a> {
    let days = day_range(stop);

    let mut buckets: HashMap<DayKey, Vec<&Attraction>> =
        days.iter().map(|day| (*day, Vec::new())).collect();
    let mut unscheduled = Vec::new();

    for attraction in attractions {
        match attraction.planned_day().and_then(|day| buckets.get_mut(&day)) {
            Some(bucket) => bucket.push(attraction),
            None => unscheduled.push(attraction),
        }
    }

    DayBuckets {
        days,
        buckets,
        unscheduled,
    }
}

/// Consecutive day keys covering the stop's stay, both endpoints included.
fn day_range(stop: &Stop) -> Vec<DayKey> {
    let (Some(arrival), Some(departure)) = (stop.arrival_day(), stop.departure_day()) else {
        return Vec::new();
    };
    if departure < arrival {
        return Vec::new();
    }

    let count = (departure - arrival).get_days() as usize + 1;
    let mut days = Vec::with_capacity(count);
    let mut current = arrival;
    for _ in 0..count {
        days.push(current);
        current = match current.tomorrow() {
            Ok(next) => next,
            Err(_) => break,
        };
    }
    days
}
