//! Attraction mutation operations for the Itinerary.
//!
//! Every mutation here runs synchronously over the in-memory lists and
//! re-derives dense `order_index` values for each list it touches. The
//! dirty flag is raised by reorders, moves, priority changes and route
//! optimization; the immediate planned-date path writes through the bulk
//! gateway instead (see [`Itinerary::set_planned_date`]).

use log::{debug, info};

use super::{reindex, route, Itinerary};
use crate::{
    collab::{BulkUpdateGateway, Notifier},
    day,
    error::{ItineraryError, Result},
    models::AttractionUpdate,
    params::{MoveAttraction, OptimizeStop, SetPlannedDate, SetPriority},
};

impl<L, G, N> Itinerary<L, G, N> {
    /// Moves an attraction to a position in a stop's list.
    ///
    /// The attraction is removed from its current owning list (which is
    /// reindexed over the remaining items), inserted into the target list
    /// at the given index (clamped to the list's bounds), handed the
    /// target's `stop_id`, and the target list is reindexed. When source
    /// and target stop coincide this degrades to a plain reorder. The
    /// total attraction count is conserved.
    ///
    /// # Errors
    ///
    /// * `ItineraryError::StopNotFound` - When the target stop is unknown;
    ///   nothing is mutated
    /// * `ItineraryError::AttractionNotFound` - When no list holds the
    ///   attraction
    pub fn move_attraction(&mut self, params: &MoveAttraction) -> Result<()> {
        if !self.attractions_by_stop.contains_key(&params.stop_id) {
            return Err(ItineraryError::StopNotFound { id: params.stop_id });
        }

        let mut removed = None;
        for list in self.attractions_by_stop.values_mut() {
            if let Some(position) = list.iter().position(|a| a.id == params.attraction_id) {
                removed = Some(list.remove(position));
                reindex(list);
                break;
            }
        }
        let mut attraction = removed.ok_or(ItineraryError::AttractionNotFound {
            id: params.attraction_id,
        })?;

        let source_stop = attraction.stop_id;
        attraction.stop_id = params.stop_id;

        let target = self
            .attractions_by_stop
            .get_mut(&params.stop_id)
            .ok_or(ItineraryError::StopNotFound { id: params.stop_id })?;
        let index = params.index.min(target.len());
        target.insert(index, attraction);
        reindex(target);

        self.dirty = true;
        debug!(
            "moved attraction {} from stop {source_stop} to stop {} at index {index}",
            params.attraction_id, params.stop_id
        );
        Ok(())
    }

    /// Changes an attraction's priority tier.
    ///
    /// # Errors
    ///
    /// * `ItineraryError::InvalidInput` - When the tier string is invalid
    /// * `ItineraryError::AttractionNotFound` - When the attraction is
    ///   unknown
    pub fn set_priority(&mut self, params: &SetPriority) -> Result<()> {
        let priority = params.validate()?;
        let attraction = self.attraction_mut(params.attraction_id)?;
        attraction.priority = Some(priority);
        self.dirty = true;
        Ok(())
    }

    /// Reorders one stop's list into an approximate shortest visiting
    /// path.
    ///
    /// The walk starts from the stop's own coordinates when it has them,
    /// so the first routed attraction is the one closest to the
    /// accommodation. See [`route::optimize_route`] for the heuristic.
    ///
    /// # Errors
    ///
    /// * `ItineraryError::StopNotFound` - When the stop is unknown
    pub fn optimize_stop(&mut self, params: &OptimizeStop) -> Result<()> {
        let start = self
            .stop(params.stop_id)
            .ok_or(ItineraryError::StopNotFound { id: params.stop_id })?
            .coordinates();

        let list = self
            .attractions_by_stop
            .get_mut(&params.stop_id)
            .ok_or(ItineraryError::StopNotFound { id: params.stop_id })?;

        let mut optimized = route::optimize_route(std::mem::take(list), start);
        reindex(&mut optimized);
        *list = optimized;

        self.dirty = true;
        info!("optimized route for stop {}", params.stop_id);
        Ok(())
    }
}

impl<L, G, N> Itinerary<L, G, N>
where
    G: BulkUpdateGateway,
    N: Notifier,
{
    /// Plans (or unplans) an attraction's visit day and writes it through
    /// immediately.
    ///
    /// The value is normalized to bare `YYYY-MM-DD` form and pushed to the
    /// bulk gateway as a single-element batch right away, without waiting
    /// for the next save. The dirty flag is untouched. A well-formed day
    /// outside the stop's range is accepted and simply buckets as
    /// unscheduled.
    ///
    /// On transport failure the in-memory value is kept and the error is
    /// surfaced; the day is still part of every later save batch.
    ///
    /// # Errors
    ///
    /// * `ItineraryError::InvalidInput` - When the value's leading digits
    ///   are not a valid date
    /// * `ItineraryError::AttractionNotFound` - When the attraction is
    ///   unknown
    /// * `ItineraryError::Transport` - When the write-through fails
    pub async fn set_planned_date(&mut self, params: &SetPlannedDate) -> Result<()> {
        let normalized = match params.planned_date.as_deref() {
            None | Some("") => None,
            Some(value) => {
                let key = day::day_key(value).ok_or_else(|| {
                    ItineraryError::invalid_input(
                        "planned_date",
                        format!("Unparsable date: {value}"),
                    )
                })?;
                Some(day::to_ymd(key))
            }
        };

        let attraction = self.attraction_mut(params.attraction_id)?;
        attraction.planned_date = normalized;
        let update = AttractionUpdate::from(&*attraction);

        match self.gateway.bulk_update(std::slice::from_ref(&update)).await {
            Ok(()) => {
                self.notifier.success("Planned day saved");
                Ok(())
            }
            Err(err) => {
                self.notifier.error("Failed to save planned day");
                Err(err)
            }
        }
    }
}
