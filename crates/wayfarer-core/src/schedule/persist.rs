//! Change tracking and deferred persistence.
//!
//! Local mutations accumulate in memory under a single dirty flag; nothing
//! reaches the bulk-update collaborator until an explicit save, and an
//! explicit reset re-requests the journey snapshot instead of trying to
//! unpick individual edits. A failed save keeps the dirty state intact so
//! no edit is silently lost; the user may retry or reset.

use log::{debug, info};

use super::Itinerary;
use crate::{
    collab::{BulkUpdateGateway, JourneyLoader, Notifier},
    error::{ItineraryError, Result},
    models::AttractionUpdate,
};

impl<L, G, N> Itinerary<L, G, N>
where
    L: JourneyLoader,
    G: BulkUpdateGateway,
    N: Notifier,
{
    /// Flushes the current state to the bulk-update collaborator as one
    /// batch.
    ///
    /// One delta per attraction across every stop is assembled before the
    /// transport call, so mutations applied while a save is in flight land
    /// in the next save's batch. Only one save may be in flight at a time,
    /// enforced with a plain busy flag; the engine has no concurrent
    /// writer.
    ///
    /// On success the dirty flag is cleared and a success notification is
    /// emitted. On failure the dirty flag and all in-memory edits are
    /// kept, an error notification is emitted, and the transport error is
    /// returned for the caller to surface.
    ///
    /// # Errors
    ///
    /// * `ItineraryError::SaveInFlight` - When a save is already running
    /// * `ItineraryError::Transport` - When the bulk update fails
    pub async fn save(&mut self) -> Result<()> {
        if self.saving {
            return Err(ItineraryError::SaveInFlight);
        }

        let updates = self.collect_updates();
        debug!("saving {} attraction deltas", updates.len());

        self.saving = true;
        let result = self.gateway.bulk_update(&updates).await;
        self.saving = false;

        match result {
            Ok(()) => {
                self.dirty = false;
                self.notifier.success("Itinerary changes saved");
                Ok(())
            }
            Err(err) => {
                self.notifier.error("Failed to save itinerary changes");
                Err(err)
            }
        }
    }

    /// Discards all local edits and reloads the journey snapshot.
    ///
    /// On success the engine's lists are fully replaced and the dirty flag
    /// is cleared. On failure prior state is left untouched, an error
    /// notification is emitted, and the transport error is returned.
    ///
    /// # Errors
    ///
    /// * `ItineraryError::Transport` - When the journey loader fails
    pub async fn reset(&mut self) -> Result<()> {
        match self.loader.load().await {
            Ok(snapshot) => {
                info!(
                    "reloaded journey snapshot: {} stops, {} attractions",
                    snapshot.stops.len(),
                    snapshot.attraction_count()
                );
                self.apply_snapshot(snapshot);
                self.dirty = false;
                Ok(())
            }
            Err(err) => {
                self.notifier.error("Failed to reload journey");
                Err(err)
            }
        }
    }

    /// One delta per attraction, in stop order then list order.
    fn collect_updates(&self) -> Vec<AttractionUpdate> {
        self.stops
            .iter()
            .flat_map(|stop| self.attractions(stop.id).iter().map(AttractionUpdate::from))
            .collect()
    }
}
