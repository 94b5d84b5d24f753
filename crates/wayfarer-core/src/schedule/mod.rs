//! High-level itinerary engine for scheduling attractions across stops.
//!
//! This module provides the main [`Itinerary`] interface. The engine owns
//! the per-stop attraction lists between an initial journey load and an
//! explicit save, and implements all scheduling business logic on top of
//! them:
//!
//! - day-bucket assignment over a stop's date range ([`buckets`])
//! - the nearest-neighbour route heuristic ([`route`])
//! - drag-driven reorder and cross-stop moves ([`attraction_ops`],
//!   [`drag`])
//! - deferred persistence with a dirty flag ([`persist`])
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ JourneyLoader   │───▶│   Itinerary     │───▶│ BulkUpdate      │
//! │ (load / reset)  │    │ (owned lists)   │    │ Gateway (save)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                      buckets / filters are
//!                      recomputed projections
//! ```
//!
//! All mutation methods run synchronously and atomically over the
//! in-memory lists; the only awaited operations are the save and the full
//! reload, both of which either fully apply or leave state untouched.

use std::collections::HashMap;

use log::debug;

use crate::{
    error::{ItineraryError, Result},
    models::{Attraction, JourneySnapshot, PriorityFilter, Stop},
};

// Module declarations
pub mod attraction_ops;
pub mod buckets;
pub mod builder;
pub mod drag;
pub mod persist;
pub mod route;


// Re-export the main types
pub use buckets::{assign_buckets, DayBuckets};
pub use builder::ItineraryBuilder;
pub use drag::DragState;

/// Main itinerary engine owning the per-stop attraction lists.
///
/// Generic over the three collaborators at its boundary: the journey
/// loader, the bulk-update gateway and the notifier (see
/// [`crate::collab`]).
pub struct Itinerary<L, G, N> {
    pub(crate) stops: Vec<Stop>,
    pub(crate) attractions_by_stop: HashMap<u64, Vec<Attraction>>,
    pub(crate) drag: DragState,
    pub(crate) dirty: bool,
    pub(crate) saving: bool,
    pub(crate) loader: L,
    pub(crate) gateway: G,
    pub(crate) notifier: N,
}

impl<L, G, N> Itinerary<L, G, N> {
    /// Creates an empty engine around the given collaborators.
    pub(crate) fn new(loader: L, gateway: G, notifier: N) -> Self {
        Self {
            stops: Vec::new(),
            attractions_by_stop: HashMap::new(),
            drag: DragState::Idle,
            dirty: false,
            saving: false,
            loader,
            gateway,
            notifier,
        }
    }

    /// Stops in arrival-day order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Looks up a stop by ID.
    pub fn stop(&self, stop_id: u64) -> Option<&Stop> {
        self.stops.iter().find(|s| s.id == stop_id)
    }

    /// A stop's attraction list in display order; empty for unknown stops.
    pub fn attractions(&self, stop_id: u64) -> &[Attraction] {
        self.attractions_by_stop
            .get(&stop_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Looks up an attraction by ID across all stops.
    pub fn attraction(&self, attraction_id: u64) -> Option<&Attraction> {
        self.attractions_by_stop
            .values()
            .flatten()
            .find(|a| a.id == attraction_id)
    }

    /// Total attraction count across all stops.
    pub fn attraction_count(&self) -> usize {
        self.attractions_by_stop.values().map(Vec::len).sum()
    }

    /// Whether in-memory state has diverged from the last loaded or saved
    /// snapshot.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Recomputes the day buckets for one stop (see [`assign_buckets`]).
    pub fn day_buckets(&self, stop_id: u64) -> Result<DayBuckets<'_>> {
        let stop = self
            .stop(stop_id)
            .ok_or(ItineraryError::StopNotFound { id: stop_id })?;
        Ok(assign_buckets(stop, self.attractions(stop_id)))
    }

    /// Projects one stop's list through a priority filter, preserving
    /// order.
    pub fn filtered_attractions(
        &self,
        stop_id: u64,
        filter: PriorityFilter,
    ) -> Vec<&Attraction> {
        filter.apply(self.attractions(stop_id))
    }

    /// Looks up an attraction mutably by ID across all stops.
    pub(crate) fn attraction_mut(&mut self, attraction_id: u64) -> Result<&mut Attraction> {
        self.attractions_by_stop
            .values_mut()
            .flatten()
            .find(|a| a.id == attraction_id)
            .ok_or(ItineraryError::AttractionNotFound { id: attraction_id })
    }

    /// Replaces all engine state with a freshly loaded snapshot.
    ///
    /// Stops are ordered by arrival day and every list is normalized to
    /// dense `order_index` values; any in-progress drag is abandoned.
    pub(crate) fn apply_snapshot(&mut self, snapshot: JourneySnapshot) {
        let JourneySnapshot {
            mut stops,
            mut attractions_by_stop,
        } = snapshot;

        stops.sort_by_key(Stop::arrival_day);

        let mut lists = HashMap::with_capacity(stops.len());
        for stop in &stops {
            let mut list = attractions_by_stop.remove(&stop.id).unwrap_or_default();
            list.sort_by_key(|a| a.order_index);
            reindex(&mut list);
            for attraction in &mut list {
                attraction.stop_id = stop.id;
            }
            lists.insert(stop.id, list);
        }

        for (stop_id, orphaned) in attractions_by_stop {
            debug!(
                "dropping {} attractions owned by unknown stop {stop_id}",
                orphaned.len()
            );
        }

        self.stops = stops;
        self.attractions_by_stop = lists;
        self.drag = DragState::Idle;
    }
}

/// Rewrites `order_index` values as the dense sequence `0..n-1`, preserving
/// the current list order.
pub(crate) fn reindex(attractions: &mut [Attraction]) {
    for (index, attraction) in attractions.iter_mut().enumerate() {
        attraction.order_index = index as u32;
    }
}
