//! # Event Bus Module
//!
//! Provides a synchronous event bus for decoupled observation of a painting
//! session. The host image publishes guide, stroke and symmetry events; any
//! number of observers (loggers, tests, UI glue) subscribe with a filter.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mirrorstroke_core::event_bus::{EventBus, AppEvent, EventCategory, EventFilter};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Stroke]),
//!     |event| println!("{}", event.description()),
//! );
//!
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
