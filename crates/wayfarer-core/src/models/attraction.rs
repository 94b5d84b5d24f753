//! Attraction model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::{Priority, Tag};
use crate::day::{self, DayKey};

/// Represents a candidate point of interest belonging to exactly one stop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attraction {
    /// Unique identifier for the attraction
    pub id: u64,

    /// ID of the owning stop
    pub stop_id: u64,

    /// Display name of the attraction
    pub name: String,

    /// Longer free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Latitude, when the attraction has been geocoded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Longitude, when the attraction has been geocoded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// Expected visit duration, e.g. "2 hours"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// Estimated entry/visit cost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,

    /// Currency of the estimated cost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Category tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<Tag>,

    /// Priority tier; `None` means the unmarked default tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    /// Dense 0-based position within the owning stop's list
    #[serde(default)]
    pub order_index: u32,

    /// Calendar day the visit is planned for, as a wire date value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_date: Option<String>,

    /// Time of day the visit is planned for, e.g. "14:30"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_time: Option<String>,
}

impl Attraction {
    /// The attraction's priority tier, defaulting the unmarked middle tier.
    pub fn effective_priority(&self) -> Priority {
        self.priority.unwrap_or_default()
    }

    /// Coordinate pair when both components are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }

    /// Decoded planned day, or `None` when unset or unparsable.
    pub fn planned_day(&self) -> Option<DayKey> {
        self.planned_date.as_deref().and_then(day::day_key)
    }
}
