//! Error types for the itinerary library.

use thiserror::Error;

/// Comprehensive error type for all itinerary operations.
#[derive(Error, Debug)]
pub enum ItineraryError {
    /// Stop not found for the given ID
    #[error("Stop with ID {id} not found")]
    StopNotFound { id: u64 },
    /// Attraction not found for the given ID
    #[error("Attraction with ID {id} not found")]
    AttractionNotFound { id: u64 },
    /// A save request is already awaiting its result
    #[error("A save is already in flight")]
    SaveInFlight,
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Collaborator transport errors (journey load or bulk update)
    #[error("Transport error: {message}")]
    Transport { message: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl ItineraryError {
    /// Creates an input validation error for a named field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a transport error from a collaborator failure message.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}

/// Result type alias for itinerary operations
pub type Result<T> = std::result::Result<T, ItineraryError>;
