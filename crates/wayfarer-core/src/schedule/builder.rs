//! Builder for creating and loading Itinerary instances.

use log::info;

use super::Itinerary;
use crate::{
    collab::{BulkUpdateGateway, JourneyLoader, Notifier},
    error::Result,
};

/// Builder for creating and loading [`Itinerary`] instances.
#[derive(Debug, Clone)]
pub struct ItineraryBuilder<L, G, N> {
    loader: L,
    gateway: G,
    notifier: N,
}

impl<L, G, N> ItineraryBuilder<L, G, N>
where
    L: JourneyLoader,
    G: BulkUpdateGateway,
    N: Notifier,
{
    /// Creates a new builder around the three collaborators.
    pub fn new(loader: L, gateway: G, notifier: N) -> Self {
        Self {
            loader,
            gateway,
            notifier,
        }
    }

    /// Fetches the initial journey snapshot and builds the engine.
    ///
    /// The freshly built engine is clean: the dirty flag is only raised by
    /// subsequent mutations.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::Transport` when the journey loader fails;
    /// no engine state exists in that case.
    pub async fn build(self) -> Result<Itinerary<L, G, N>> {
        let mut itinerary = Itinerary::new(self.loader, self.gateway, self.notifier);
        let snapshot = itinerary.loader.load().await?;
        info!(
            "loaded journey snapshot: {} stops, {} attractions",
            snapshot.stops.len(),
            snapshot.attraction_count()
        );
        itinerary.apply_snapshot(snapshot);
        Ok(itinerary)
    }
}
