//! Data models for stops and attractions.
//!
//! This module contains the core domain models of the itinerary engine:
//! stops (places with an inclusive date range) and attractions (candidate
//! points of interest owned by exactly one stop). Display implementations
//! for these models live in [`crate::display::models`] to keep data
//! structures separate from presentation logic.
//!
//! Two invariants run through everything here:
//!
//! 1. **Dense ordering**: within a stop's attraction list, `order_index`
//!    values always form the permutation `0..n-1` in display order. The
//!    scheduling engine reindexes after every mutation.
//! 2. **Single ownership**: an attraction's `stop_id` names the one list
//!    that holds it. Moving between stops rewrites `stop_id` as part of one
//!    atomic remove/insert operation.
//!
//! Date-valued fields are kept in their wire form (`String`); decoding
//! goes through [`crate::day`] so the local calendar day can never shift
//! with the machine's timezone.

pub mod attraction;
pub mod filters;
pub mod priority;
pub mod requests;
pub mod stop;
pub mod tag;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use attraction::Attraction;
pub use filters::PriorityFilter;
pub use priority::Priority;
pub use requests::{AttractionUpdate, JourneySnapshot};
pub use stop::Stop;
pub use tag::Tag;
