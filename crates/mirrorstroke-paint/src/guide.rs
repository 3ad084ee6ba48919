//! Guide binding.
//!
//! A mirror axis is backed by at most one guide. The binding creates the
//! guide lazily, hides it without deleting it when the axis is switched off,
//! and only lets go of it when the host deletes the guide or the mirror is
//! torn down. While attached, the binding listens to the guide's removal and
//! position notifications; while hidden, those notifications are ignored.

use mirrorstroke_core::{GuideId, Orientation};

use crate::host::SymmetryHost;

/// Reference to a guide owned by a multi-stroke feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuideHandle {
    /// Guide identifier in the host image
    pub id: GuideId,
    /// Orientation of the guide line
    pub orientation: Orientation,
}

/// Guide slot for one mirror axis
#[derive(Debug, Clone)]
pub struct GuideBinding {
    orientation: Orientation,
    handle: Option<GuideHandle>,
    attached: bool,
}

impl GuideBinding {
    /// Create an empty binding for an axis
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            handle: None,
            attached: false,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The guide handle, hidden or not
    pub fn handle(&self) -> Option<GuideHandle> {
        self.handle
    }

    /// True while the guide is in the host collection and listened to
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// True if notifications for `id` should be handled by this binding
    pub fn is_listening_to(&self, id: GuideId) -> bool {
        self.attached && self.handle.is_some_and(|h| h.id == id)
    }

    /// Show the guide for this axis, creating it on first use
    ///
    /// A new guide is placed at the middle of the drawable and `position` is
    /// updated accordingly; an existing guide is re-attached at `position`.
    /// Attaching an already attached guide does nothing.
    pub fn activate(&mut self, position: &mut f64, host: &mut dyn SymmetryHost) -> GuideHandle {
        let handle = match self.handle {
            Some(handle) => handle,
            None => {
                *position = host.extent().midpoint(self.orientation);
                let handle = GuideHandle {
                    id: host.next_guide_id(),
                    orientation: self.orientation,
                };
                tracing::debug!(
                    "Created {} mirror guide {} at {}",
                    self.orientation,
                    handle.id,
                    position
                );
                self.handle = Some(handle);
                handle
            }
        };

        if !self.attached {
            // The guide collection works in whole pixels.
            host.add_guide(&handle, *position as i32);
            self.attached = true;
        }
        handle
    }

    /// Hide the guide, keeping the handle for reuse
    ///
    /// # Panics
    ///
    /// In debug builds, if the axis never had a guide.
    pub fn deactivate(&mut self, host: &mut dyn SymmetryHost) {
        let Some(handle) = self.handle else {
            debug_assert!(false, "deactivating {} axis without a guide", self.orientation);
            return;
        };

        if self.attached {
            self.attached = false;
            host.remove_guide(&handle, false);
            tracing::debug!("Hid {} mirror guide {}", self.orientation, handle.id);
        }
    }

    /// Forget the guide entirely
    pub fn release(&mut self) -> Option<GuideHandle> {
        self.attached = false;
        self.handle.take()
    }
}
