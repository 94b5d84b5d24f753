//! Drag gesture state machine.
//!
//! A drag is an explicit three-phase machine rather than a pile of UI
//! callbacks, so any event model (callbacks, message passing, coroutines)
//! can drive the same transitions:
//!
//! ```text
//! Idle ──grab──▶ Dragging { over: None } ──hover──▶ Dragging { over: Some(stop) }
//!  ▲                  │                                      │
//!  └────cancel────────┴──────────drop (performs move)────────┘
//! ```
//!
//! Dropping with a candidate stop performs the move; dropping without one
//! (released outside every drop zone) and cancelling are no-ops with
//! respect to attraction state.

use crate::{
    error::{ItineraryError, Result},
    params::MoveAttraction,
};

use super::Itinerary;

/// Current phase of the drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No gesture in progress
    #[default]
    Idle,

    /// An attraction has been grabbed; `over_stop` tracks the candidate
    /// drop zone under the pointer, if any
    Dragging {
        attraction_id: u64,
        over_stop: Option<u64>,
    },
}

impl DragState {
    /// Whether a gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

impl<L, G, N> Itinerary<L, G, N> {
    /// Current drag phase.
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Grabs an attraction, entering the dragging phase.
    ///
    /// # Errors
    ///
    /// * `ItineraryError::AttractionNotFound` - When the attraction is
    ///   unknown; the machine stays in its current phase
    pub fn begin_drag(&mut self, attraction_id: u64) -> Result<()> {
        self.attraction(attraction_id)
            .ok_or(ItineraryError::AttractionNotFound { id: attraction_id })?;
        self.drag = DragState::Dragging {
            attraction_id,
            over_stop: None,
        };
        Ok(())
    }

    /// Records the drop zone currently under the pointer.
    ///
    /// Hovering an unknown stop clears the candidate instead of setting
    /// one; ignored entirely while idle.
    pub fn drag_over(&mut self, stop_id: u64) {
        if let DragState::Dragging { attraction_id, .. } = self.drag {
            let over_stop = self
                .attractions_by_stop
                .contains_key(&stop_id)
                .then_some(stop_id);
            self.drag = DragState::Dragging {
                attraction_id,
                over_stop,
            };
        }
    }

    /// Releases the drag, moving the attraction when a candidate stop is
    /// under the pointer.
    ///
    /// Returns `true` when a move was performed. A release without a
    /// candidate (outside every drop zone, or while idle) returns `false`
    /// and mutates nothing. The machine returns to idle either way.
    pub fn drop_at(&mut self, index: usize) -> Result<bool> {
        let state = std::mem::take(&mut self.drag);
        match state {
            DragState::Dragging {
                attraction_id,
                over_stop: Some(stop_id),
            } => {
                self.move_attraction(&MoveAttraction {
                    attraction_id,
                    stop_id,
                    index,
                })?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Abandons the gesture without mutating attraction state.
    pub fn cancel_drag(&mut self) {
        self.drag = DragState::Idle;
    }
}
