//! Parameter structures for itinerary operations.
//!
//! These shared parameter structs let different presentation layers (a web
//! bridge, an FFI surface, tests) drive the engine without framework
//! derives leaking into the core. Interface layers wrap them with their
//! own derives and convert via `.into()` or transparent serialization; the
//! optional `schema` feature adds `JsonSchema` derives for interfaces that
//! publish a machine-readable contract.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::Priority;

/// Parameters for moving an attraction to a position in a stop's list.
///
/// Source and target stop may be the same, in which case the move is a
/// plain reorder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct MoveAttraction {
    /// ID of the attraction to move
    pub attraction_id: u64,
    /// ID of the stop to move it into
    pub stop_id: u64,
    /// Target position; clamped to the target list's bounds
    pub index: usize,
}

/// Parameters for changing an attraction's priority tier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetPriority {
    /// ID of the attraction to update
    pub attraction_id: u64,
    /// New tier: 'must', 'should', 'could' or 'skip'
    pub priority: String,
}

impl SetPriority {
    /// Validate the tier string and return the parsed priority.
    ///
    /// # Errors
    ///
    /// * `ItineraryError::InvalidInput` - When the tier string is invalid
    pub fn validate(&self) -> crate::Result<Priority> {
        self.priority.parse::<Priority>().map_err(|_| {
            crate::ItineraryError::invalid_input(
                "priority",
                format!(
                    "Invalid priority: {}. Must be 'must', 'should', 'could' or 'skip'",
                    self.priority
                ),
            )
        })
    }
}

/// Parameters for planning (or unplanning) an attraction's visit day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetPlannedDate {
    /// ID of the attraction to update
    pub attraction_id: u64,
    /// Date-like value to plan for, or `None` to clear the planned day
    pub planned_date: Option<String>,
}

/// Parameters for route-optimizing one stop's attraction list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct OptimizeStop {
    /// ID of the stop whose list should be reordered
    pub stop_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_priority_validate_valid() {
        let params = SetPriority {
            attraction_id: 1,
            priority: "could".to_string(),
        };
        assert_eq!(params.validate().unwrap(), Priority::Could);
    }

    #[test]
    fn test_set_priority_validate_case_insensitive() {
        let params = SetPriority {
            attraction_id: 1,
            priority: "MUST".to_string(),
        };
        assert_eq!(params.validate().unwrap(), Priority::Must);
    }

    #[test]
    fn test_set_priority_validate_invalid() {
        let params = SetPriority {
            attraction_id: 1,
            priority: "urgent".to_string(),
        };
        let err = params.validate().unwrap_err();
        match err {
            crate::ItineraryError::InvalidInput { field, reason } => {
                assert_eq!(field, "priority");
                assert!(reason.contains("Invalid priority: urgent"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }
}
