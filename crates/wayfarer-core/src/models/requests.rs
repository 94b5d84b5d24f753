//! Wire shapes exchanged with the journey collaborators.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Attraction, Priority, Stop};

/// Per-attraction delta submitted to the bulk-update collaborator on save.
///
/// One record is assembled for every attraction across every stop,
/// reflecting the current in-memory state. `planned_date` is carried when
/// present because the bulk endpoint accepts it and the immediate
/// planned-date path reuses the same record shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttractionUpdate {
    /// ID of the attraction to update
    pub id: u64,
    /// Dense position within the owning stop's list
    pub order_index: u32,
    /// Effective priority tier
    pub priority: Priority,
    /// Planned visit day in bare `YYYY-MM-DD` form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_date: Option<String>,
    /// ID of the owning stop
    pub stop_id: u64,
}

impl From<&Attraction> for AttractionUpdate {
    fn from(attraction: &Attraction) -> Self {
        Self {
            id: attraction.id,
            order_index: attraction.order_index,
            priority: attraction.effective_priority(),
            planned_date: attraction.planned_date.clone(),
            stop_id: attraction.stop_id,
        }
    }
}

/// Full journey state as supplied by the journey-loading collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JourneySnapshot {
    /// Stops in arbitrary order; the engine sorts them by arrival day
    pub stops: Vec<Stop>,
    /// Attraction lists keyed by owning stop ID
    #[serde(default)]
    pub attractions_by_stop: HashMap<u64, Vec<Attraction>>,
}

impl JourneySnapshot {
    /// Parse a snapshot from the journey API's JSON payload.
    pub fn from_json(payload: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Total attraction count across all stops.
    pub fn attraction_count(&self) -> usize {
        self.attractions_by_stop.values().map(Vec::len).sum()
    }
}
