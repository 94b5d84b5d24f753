//! Shared fixtures and mock collaborators for integration tests.

use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use wayfarer_core::{
    Attraction, AttractionUpdate, BulkUpdateGateway, Itinerary, ItineraryBuilder, ItineraryError,
    JourneyLoader, JourneySnapshot, Notifier, Result, Stop,
};

/// In-memory journey loader serving a configurable snapshot.
#[derive(Clone, Default)]
pub struct MemoryLoader {
    pub snapshot: Arc<Mutex<JourneySnapshot>>,
    pub fail: Arc<AtomicBool>,
}

impl JourneyLoader for MemoryLoader {
    async fn load(&self) -> Result<JourneySnapshot> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ItineraryError::transport("journey endpoint unreachable"));
        }
        Ok(self.snapshot.lock().unwrap().clone())
    }
}

/// Recording bulk-update gateway.
#[derive(Clone, Default)]
pub struct RecordingGateway {
    pub batches: Arc<Mutex<Vec<Vec<AttractionUpdate>>>>,
    pub fail: Arc<AtomicBool>,
}

impl BulkUpdateGateway for RecordingGateway {
    async fn bulk_update(&self, updates: &[AttractionUpdate]) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ItineraryError::transport("bulk endpoint unreachable"));
        }
        self.batches.lock().unwrap().push(updates.to_vec());
        Ok(())
    }
}

/// Recording notifier.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub successes: Arc<Mutex<Vec<String>>>,
    pub errors: Arc<Mutex<Vec<String>>>,
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

pub fn stop(id: u64, city: &str, arrival: &str, departure: &str) -> Stop {
    Stop {
        id,
        city: city.to_string(),
        country: "Portugal".to_string(),
        latitude: None,
        longitude: None,
        arrival_date: arrival.to_string(),
        departure_date: departure.to_string(),
        notes: None,
    }
}

pub fn attraction(id: u64, stop_id: u64, name: &str, order_index: u32) -> Attraction {
    Attraction {
        id,
        stop_id,
        name: name.to_string(),
        description: None,
        latitude: None,
        longitude: None,
        duration: None,
        estimated_cost: None,
        currency: None,
        tag: None,
        priority: None,
        order_index,
        planned_date: None,
        planned_time: None,
    }
}

/// Two stops with three and two attractions respectively.
pub fn sample_snapshot() -> JourneySnapshot {
    let mut attractions_by_stop = HashMap::new();
    attractions_by_stop.insert(
        1,
        vec![
            attraction(10, 1, "Belém Tower", 0),
            attraction(11, 1, "Alfama", 1),
            attraction(12, 1, "Tram 28", 2),
        ],
    );
    attractions_by_stop.insert(
        2,
        vec![
            attraction(20, 2, "Livraria Lello", 0),
            attraction(21, 2, "Ribeira", 1),
        ],
    );

    JourneySnapshot {
        stops: vec![
            stop(1, "Lisbon", "2025-06-01", "2025-06-03"),
            stop(2, "Porto", "2025-06-04", "2025-06-05"),
        ],
        attractions_by_stop,
    }
}

/// Helper function to create a loaded test itinerary around the mocks.
pub async fn create_test_itinerary(
    snapshot: JourneySnapshot,
) -> (
    Itinerary<MemoryLoader, RecordingGateway, RecordingNotifier>,
    MemoryLoader,
    RecordingGateway,
    RecordingNotifier,
) {
    let loader = MemoryLoader::default();
    *loader.snapshot.lock().unwrap() = snapshot;
    let gateway = RecordingGateway::default();
    let notifier = RecordingNotifier::default();

    let itinerary = ItineraryBuilder::new(loader.clone(), gateway.clone(), notifier.clone())
        .build()
        .await
        .expect("Failed to build itinerary");
    (itinerary, loader, gateway, notifier)
}
