//! # MirrorStroke Core
//!
//! Core types, errors, and utilities for MirrorStroke.
//! Provides the stroke coordinate model, the error taxonomy shared by the
//! other crates, and the synchronous event bus used to observe a painting
//! session.

pub mod data;
pub mod error;
pub mod event_bus;

pub use data::{Coords, Extent, GuideId, Orientation};

pub use error::{Error, GuideError, Result, SymmetryError};

// Re-export event bus for convenience
pub use event_bus::{
    AppEvent, EventBus, EventCategory, EventFilter, GuideEvent, StrokeEvent, SubscriptionId,
    SymmetryEvent,
};
