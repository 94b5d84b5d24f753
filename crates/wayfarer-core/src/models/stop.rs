//! Stop model definition and related functionality.

use serde::{Deserialize, Serialize};

use crate::day::{self, DayKey};

/// Represents a place with an inclusive date range in which attractions can
/// be scheduled.
///
/// The date fields carry the wire value verbatim (`YYYY-MM-DD` or a full
/// timestamp); the [`crate::day`] codec is the only component that
/// interprets them. The scheduling engine never mutates the date range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    /// Unique identifier for the stop
    pub id: u64,

    /// City the stop is located in
    pub city: String,

    /// Country the stop is located in
    pub country: String,

    /// Latitude of the stop's anchor point (usually the accommodation)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Longitude of the stop's anchor point
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// First day of the stay (inclusive), as delivered by the journey API
    pub arrival_date: String,

    /// Last day of the stay (inclusive)
    pub departure_date: String,

    /// Free-form traveler notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Stop {
    /// Decoded arrival day, or `None` when the wire value is unparsable.
    pub fn arrival_day(&self) -> Option<DayKey> {
        day::day_key(&self.arrival_date)
    }

    /// Decoded departure day, or `None` when the wire value is unparsable.
    pub fn departure_day(&self) -> Option<DayKey> {
        day::day_key(&self.departure_date)
    }

    /// Number of calendar days in the stay, counting both endpoints.
    ///
    /// Returns `None` when either date fails to decode or the range is
    /// inverted. A same-day stay spans 1.
    pub fn day_span(&self) -> Option<u32> {
        let arrival = self.arrival_day()?;
        let departure = self.departure_day()?;
        if departure < arrival {
            return None;
        }
        Some((departure - arrival).get_days() as u32 + 1)
    }

    /// Coordinate pair when both components are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}
