//! Event type definitions for the event bus.
//!
//! Events are grouped by category and are cloneable and serializable so
//! a session can be logged or replayed.

use serde::{Deserialize, Serialize};

use crate::data::{Coords, GuideId, Orientation};

/// Root event enum for all application events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    /// Guide collection changes
    Guide(GuideEvent),
    /// Multi-stroke coordinate updates
    Stroke(StrokeEvent),
    /// Installation and removal of symmetry features
    Symmetry(SymmetryEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Guide(_) => EventCategory::Guide,
            AppEvent::Stroke(_) => EventCategory::Stroke,
            AppEvent::Symmetry(_) => EventCategory::Symmetry,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Guide(e) => e.description(),
            AppEvent::Stroke(e) => e.description(),
            AppEvent::Symmetry(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Guide collection events.
    Guide,
    /// Stroke update events.
    Stroke,
    /// Symmetry feature events.
    Symmetry,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Guide => write!(f, "Guide"),
            EventCategory::Stroke => write!(f, "Stroke"),
            EventCategory::Symmetry => write!(f, "Symmetry"),
        }
    }
}

/// Guide collection events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GuideEvent {
    /// A guide was attached to the image.
    Added {
        /// Guide identifier.
        id: GuideId,
        /// Guide orientation.
        orientation: Orientation,
        /// Position in whole pixels.
        position: i32,
    },
    /// A guide was taken out of the image.
    Removed {
        /// Guide identifier.
        id: GuideId,
        /// True when the guide was deleted rather than hidden.
        destructive: bool,
    },
    /// A guide was dragged to a new position.
    Moved {
        /// Guide identifier.
        id: GuideId,
        /// New position in whole pixels.
        position: i32,
    },
}

impl GuideEvent {
    fn description(&self) -> String {
        match self {
            GuideEvent::Added {
                id,
                orientation,
                position,
            } => format!("Guide {} added ({} at {})", id, orientation, position),
            GuideEvent::Removed { id, destructive } => {
                if *destructive {
                    format!("Guide {} deleted", id)
                } else {
                    format!("Guide {} hidden", id)
                }
            }
            GuideEvent::Moved { id, position } => format!("Guide {} moved to {}", id, position),
        }
    }
}

/// Stroke events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StrokeEvent {
    /// The derived stroke list was regenerated.
    StrokesUpdated {
        /// All stroke coordinates, origin first.
        strokes: Vec<Coords>,
    },
}

impl StrokeEvent {
    fn description(&self) -> String {
        match self {
            StrokeEvent::StrokesUpdated { strokes } => {
                let points: Vec<String> = strokes.iter().map(|c| c.to_string()).collect();
                format!("Strokes updated: [{}]", points.join(", "))
            }
        }
    }
}

/// Symmetry feature events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SymmetryEvent {
    /// A feature was installed on the image.
    Installed {
        /// Feature label.
        label: String,
    },
    /// A feature was removed from the image.
    Removed {
        /// Feature label.
        label: String,
    },
}

impl SymmetryEvent {
    fn description(&self) -> String {
        match self {
            SymmetryEvent::Installed { label } => format!("{} installed", label),
            SymmetryEvent::Removed { label } => format!("{} removed", label),
        }
    }
}
