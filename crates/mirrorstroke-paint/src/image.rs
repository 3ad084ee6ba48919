//! In-memory image host.
//!
//! Keeps the drawable extent, the guide collection and the last derived
//! stroke list, and publishes every change on the event bus.

use std::collections::BTreeMap;
use std::sync::Arc;

use mirrorstroke_core::{
    AppEvent, Coords, EventBus, Extent, GuideError, GuideEvent, GuideId, Orientation,
    StrokeEvent, SymmetryEvent,
};

use crate::guide::GuideHandle;
use crate::host::SymmetryHost;

/// A guide attached to the image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guide {
    pub id: GuideId,
    pub orientation: Orientation,
    /// Position in whole pixels
    pub position: i32,
}

/// Image with a guide collection
#[derive(Debug)]
pub struct Image {
    extent: Extent,
    guides: BTreeMap<GuideId, Guide>,
    next_guide_id: u32,
    strokes: Vec<Coords>,
    multi_stroke: Option<String>,
    events: Arc<EventBus>,
}

impl Image {
    pub fn new(extent: Extent, events: Arc<EventBus>) -> Self {
        Self {
            extent,
            guides: BTreeMap::new(),
            next_guide_id: 0,
            strokes: Vec::new(),
            multi_stroke: None,
            events,
        }
    }

    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    /// Change the drawable size; guides are kept where they are
    pub fn resize(&mut self, extent: Extent) {
        self.extent = extent;
    }

    /// Attached guides, ordered by id
    pub fn guides(&self) -> impl Iterator<Item = &Guide> {
        self.guides.values()
    }

    pub fn guide(&self, id: GuideId) -> Option<&Guide> {
        self.guides.get(&id)
    }

    /// Last stroke list reported by a multi-stroke feature
    pub fn strokes(&self) -> &[Coords] {
        &self.strokes
    }

    /// Label of the installed multi-stroke feature
    pub fn multi_stroke(&self) -> Option<&str> {
        self.multi_stroke.as_deref()
    }

    pub(crate) fn install_multi_stroke(&mut self, label: &str) {
        self.multi_stroke = Some(label.to_string());
        self.publish(AppEvent::Symmetry(SymmetryEvent::Installed {
            label: label.to_string(),
        }));
    }

    /// Attach a guide to the collection
    pub fn attach_guide(&mut self, guide: Guide) -> Result<(), GuideError> {
        if self.guides.contains_key(&guide.id) {
            return Err(GuideError::AlreadyAttached { id: guide.id });
        }

        self.guides.insert(guide.id, guide);
        self.publish(AppEvent::Guide(GuideEvent::Added {
            id: guide.id,
            orientation: guide.orientation,
            position: guide.position,
        }));
        Ok(())
    }

    /// Take a guide out of the collection
    pub fn detach_guide(&mut self, id: GuideId, destructive: bool) -> Result<Guide, GuideError> {
        let guide = self.guides.remove(&id).ok_or(GuideError::NotFound { id })?;
        self.publish(AppEvent::Guide(GuideEvent::Removed { id, destructive }));
        Ok(guide)
    }

    /// Move an attached guide
    pub fn set_guide_position(&mut self, id: GuideId, position: i32) -> Result<(), GuideError> {
        let guide = self.guides.get_mut(&id).ok_or(GuideError::NotFound { id })?;
        guide.position = position;
        self.publish(AppEvent::Guide(GuideEvent::Moved { id, position }));
        Ok(())
    }

    fn publish(&self, event: AppEvent) {
        tracing::trace!("{}", event.description());
        self.events.publish(event);
    }
}

impl SymmetryHost for Image {
    fn extent(&self) -> Extent {
        self.extent
    }

    fn next_guide_id(&mut self) -> GuideId {
        self.next_guide_id += 1;
        GuideId(self.next_guide_id)
    }

    fn add_guide(&mut self, guide: &GuideHandle, position: i32) {
        let guide = Guide {
            id: guide.id,
            orientation: guide.orientation,
            position,
        };
        if let Err(e) = self.attach_guide(guide) {
            tracing::warn!("Failed to add guide: {}", e);
        }
    }

    fn remove_guide(&mut self, guide: &GuideHandle, destructive: bool) {
        if let Err(e) = self.detach_guide(guide.id, destructive) {
            tracing::warn!("Failed to remove guide: {}", e);
        }
    }

    fn move_guide(&mut self, guide: &GuideHandle, position: i32) {
        if let Err(e) = self.set_guide_position(guide.id, position) {
            tracing::warn!("Failed to move guide: {}", e);
        }
    }

    fn strokes_updated(&mut self, strokes: &[Coords]) {
        self.strokes = strokes.to_vec();
        self.publish(AppEvent::Stroke(StrokeEvent::StrokesUpdated {
            strokes: self.strokes.clone(),
        }));
    }

    fn remove_multi_stroke(&mut self, label: &str) {
        if self.multi_stroke.as_deref() == Some(label) {
            self.multi_stroke = None;
        }
        self.publish(AppEvent::Symmetry(SymmetryEvent::Removed {
            label: label.to_string(),
        }));
    }
}
