//! Collaborator traits at the engine's boundary.
//!
//! The scheduling engine does not talk to a network or a database. It is
//! fed a [`JourneySnapshot`](crate::models::JourneySnapshot) by a
//! journey-loading collaborator, flushes batched deltas through a
//! bulk-update collaborator, and reports outcomes through a notification
//! collaborator. Transport, auth and retry policy are the implementer's
//! concern; failures surface as [`crate::ItineraryError::Transport`]
//! values.
//!
//! The [`Itinerary`](crate::Itinerary) engine is generic over these traits,
//! so tests drive it with in-memory mocks and a real application plugs in
//! its HTTP client.

use crate::{
    error::Result,
    models::{AttractionUpdate, JourneySnapshot},
};

/// Supplies the full journey state on initial load and on reset.
#[allow(async_fn_in_trait)]
pub trait JourneyLoader {
    /// Fetch the current journey snapshot.
    async fn load(&self) -> Result<JourneySnapshot>;
}

/// Accepts a batch of attraction deltas and persists them.
#[allow(async_fn_in_trait)]
pub trait BulkUpdateGateway {
    /// Persist the batch; either all deltas apply or the call fails.
    async fn bulk_update(&self, updates: &[AttractionUpdate]) -> Result<()>;
}

/// Receives user-facing outcome notifications.
pub trait Notifier {
    /// Report a successful operation.
    fn success(&self, message: &str);

    /// Report a failed operation.
    fn error(&self, message: &str);
}
