//! Core library for the Wayfarer trip planning application.
//!
//! This crate provides the itinerary optimization and day-scheduling
//! engine for multi-stop trips: per-stop attraction lists with dense
//! ordering, calendar-day bucketing, a nearest-neighbour route heuristic,
//! drag-driven reordering, a four-tier priority model, and deferred
//! persistence.
//!
//! # Architecture
//!
//! The engine owns plain records between an initial load and an explicit
//! save. Everything around it is a collaborator behind a trait
//! ([`collab`]): a journey loader supplies snapshots, a bulk-update
//! gateway persists batched deltas, and a notifier surfaces outcomes.
//! Derived views (day buckets, filtered lists) are pure projections
//! recomputed from the owned lists on every read, so a view can never
//! diverge from the state it presents.
//!
//! # Quick Start
//!
//! ```rust
//! use wayfarer_core::{day, models::Stop, schedule::assign_buckets};
//!
//! let stop = Stop {
//!     id: 1,
//!     city: "Lisbon".to_string(),
//!     country: "Portugal".to_string(),
//! #   latitude: None,
//! #   longitude: None,
//!     arrival_date: "2025-06-01".to_string(),
//!     departure_date: "2025-06-03".to_string(),
//! #   notes: None,
//!     // ... other fields
//! };
//!
//! // Wire dates decode to timezone-independent calendar days.
//! let arrival = day::day_key(&stop.arrival_date).unwrap();
//! assert_eq!(day::to_ymd(arrival), "2025-06-01");
//!
//! // A three-day stay yields three day buckets.
//! let buckets = assign_buckets(&stop, &[]);
//! assert_eq!(buckets.days().len(), 3);
//! ```
//!
//! Mutations go through the [`Itinerary`] engine, built with
//! [`ItineraryBuilder`] around the three collaborators:
//!
//! ```rust,ignore
//! let mut itinerary = ItineraryBuilder::new(loader, gateway, notifier)
//!     .build()
//!     .await?;
//!
//! itinerary.move_attraction(&MoveAttraction {
//!     attraction_id: 7,
//!     stop_id: 2,
//!     index: 0,
//! })?;
//! assert!(itinerary.is_dirty());
//!
//! itinerary.save().await?;
//! assert!(!itinerary.is_dirty());
//! ```

pub mod collab;
pub mod day;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod schedule;

// Re-export commonly used types
pub use collab::{BulkUpdateGateway, JourneyLoader, Notifier};
pub use day::DayKey;
pub use display::{DisplayDay, StopSchedule};
pub use error::{ItineraryError, Result};
pub use models::{
    Attraction, AttractionUpdate, JourneySnapshot, Priority, PriorityFilter, Stop, Tag,
};
pub use params::{MoveAttraction, OptimizeStop, SetPlannedDate, SetPriority};
pub use schedule::{assign_buckets, DayBuckets, DragState, Itinerary, ItineraryBuilder};
