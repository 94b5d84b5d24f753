//! Category tags for attractions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of attraction categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Beauty,
    Cafe,
    MustSee,
    Accommodation,
    Nature,
    Airport,
    Food,
    Attraction,
    TrainStation,
}

impl FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beauty" => Ok(Tag::Beauty),
            "cafe" => Ok(Tag::Cafe),
            "must_see" => Ok(Tag::MustSee),
            "accommodation" => Ok(Tag::Accommodation),
            "nature" => Ok(Tag::Nature),
            "airport" => Ok(Tag::Airport),
            "food" => Ok(Tag::Food),
            "attraction" => Ok(Tag::Attraction),
            "train_station" => Ok(Tag::TrainStation),
            _ => Err(format!("Invalid tag: {s}")),
        }
    }
}

impl Tag {
    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Beauty => "beauty",
            Tag::Cafe => "cafe",
            Tag::MustSee => "must_see",
            Tag::Accommodation => "accommodation",
            Tag::Nature => "nature",
            Tag::Airport => "airport",
            Tag::Food => "food",
            Tag::Attraction => "attraction",
            Tag::TrainStation => "train_station",
        }
    }

    /// Human-readable label for display contexts.
    pub fn label(&self) -> &'static str {
        match self {
            Tag::Beauty => "Beauty & Spa",
            Tag::Cafe => "Café",
            Tag::MustSee => "Must See",
            Tag::Accommodation => "Accommodation",
            Tag::Nature => "Nature",
            Tag::Airport => "Airport",
            Tag::Food => "Food & Dining",
            Tag::Attraction => "Attraction",
            Tag::TrainStation => "Train Station",
        }
    }

    /// Emoji icon paired with the label in badges.
    pub fn emoji(&self) -> &'static str {
        match self {
            Tag::Beauty => "🧖",
            Tag::Cafe => "☕",
            Tag::MustSee => "📷",
            Tag::Accommodation => "💤",
            Tag::Nature => "🌱",
            Tag::Airport => "✈️",
            Tag::Food => "🍽️",
            Tag::Attraction => "💸",
            Tag::TrainStation => "🚄",
        }
    }
}
