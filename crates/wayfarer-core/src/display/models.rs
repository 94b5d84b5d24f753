//! Display implementations for domain models.
//!
//! Display lives here rather than on the model definitions to keep data
//! structures separate from presentation logic. All output is markdown.

use std::fmt;

use super::day::DisplayDay;
use crate::{
    day,
    models::{Attraction, Priority, Stop, Tag},
};

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "## {}, {}", self.city, self.country)?;
        if let Some(days) = self.day_span() {
            if days > 1 {
                write!(f, " ({days} days)")?;
            }
        }
        writeln!(f)?;
        writeln!(f)?;

        match (self.arrival_day(), self.departure_day()) {
            (Some(arrival), Some(departure)) => {
                writeln!(
                    f,
                    "- Dates: {} - {}",
                    DisplayDay(&arrival),
                    DisplayDay(&departure)
                )?;
            }
            _ => writeln!(f, "- Dates: unknown")?,
        }
        if let Some(notes) = &self.notes {
            writeln!(f, "- Notes: {notes}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Attraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}", self.name)?;
        if let Some(tag) = self.tag {
            write!(f, " [{tag}]")?;
        }
        // The unmarked default tier stays unmarked in output too
        if self.effective_priority() != Priority::Should {
            write!(f, " {}", self.effective_priority().with_icon())?;
        }

        let mut meta = Vec::new();
        if let Some(key) = self.planned_date.as_deref().and_then(day::day_key) {
            meta.push(DisplayDay(&key).to_string());
        }
        if let Some(time) = &self.planned_time {
            meta.push(time.clone());
        }
        if let Some(duration) = &self.duration {
            meta.push(duration.clone());
        }
        if let Some(cost) = self.estimated_cost {
            meta.push(match &self.currency {
                Some(currency) => format!("{cost} {currency}"),
                None => cost.to_string(),
            });
        }
        if !meta.is_empty() {
            write!(f, " ({})", meta.join(", "))?;
        }
        writeln!(f)
    }
}
