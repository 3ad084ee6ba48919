//! Document: an image with an optional mirror feature.
//!
//! Routes user actions to the mirror and guide notifications from the image
//! back to it, and uninstalls the mirror when it asks to be removed.

use std::rc::Rc;
use std::sync::Arc;

use mirrorstroke_core::{Coords, Error, EventBus, Extent, GuideError, GuideId, Result};
use mirrorstroke_settings::{MirrorSettings, SettingValue};

use crate::host::SymmetryHost;
use crate::image::Image;
use crate::mirror::{GuideRemoval, Mirror, LABEL};
use crate::multi_stroke::MultiStroke;
use crate::transform::TransformDescriptor;

#[derive(Debug)]
pub struct Document {
    image: Image,
    mirror: Option<Mirror>,
}

impl Document {
    pub fn new(extent: Extent, events: Arc<EventBus>) -> Self {
        Self {
            image: Image::new(extent, events),
            mirror: None,
        }
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn image_mut(&mut self) -> &mut Image {
        &mut self.image
    }

    pub fn mirror(&self) -> Option<&Mirror> {
        self.mirror.as_ref()
    }

    /// Install the mirror feature, or return the installed one
    pub fn install_mirror(&mut self) -> &mut Mirror {
        if self.mirror.is_none() {
            self.image.install_multi_stroke(LABEL);
        }
        self.mirror.get_or_insert_with(Mirror::new)
    }

    /// Tear the mirror down and remove it
    ///
    /// Its guides stay in the image.
    pub fn uninstall_mirror(&mut self) -> Option<Mirror> {
        let mut mirror = self.mirror.take()?;
        mirror.teardown(&mut self.image);
        Some(mirror)
    }

    pub fn mirror_property(&self, name: &str) -> Result<SettingValue> {
        let mirror = self.mirror.as_ref().ok_or_else(no_mirror)?;
        Ok(mirror.get_property(name)?)
    }

    pub fn set_mirror_property(&mut self, name: &str, value: SettingValue) -> Result<()> {
        let mirror = self.mirror.as_mut().ok_or_else(no_mirror)?;
        mirror.set_property(name, value, &mut self.image)?;
        Ok(())
    }

    /// Install the mirror if needed and restore its settings
    ///
    /// Nothing changes if any value is invalid.
    pub fn apply_mirror_settings(&mut self, settings: &MirrorSettings) -> Result<()> {
        settings.validate()?;
        self.install_mirror();
        let mirror = self.mirror.as_mut().ok_or_else(no_mirror)?;
        mirror.apply_settings(settings, &mut self.image)?;
        Ok(())
    }

    /// Start a stroke at `origin` and return every stroke to paint
    pub fn begin_stroke(&mut self, origin: Coords) -> &[Coords] {
        match self.mirror.as_mut() {
            Some(mirror) => mirror.set_origin(origin, &mut self.image),
            None => self.image.strokes_updated(&[origin]),
        }
        self.image.strokes()
    }

    /// Brush transform for stroke `index` of the current stroke
    pub fn transform_for(
        &mut self,
        index: usize,
        paint_width: i32,
        paint_height: i32,
    ) -> Option<Rc<TransformDescriptor>> {
        self.mirror
            .as_mut()
            .and_then(|mirror| mirror.get_transform(index, paint_width, paint_height))
    }

    /// Drag a guide to a new position
    pub fn move_guide(&mut self, id: GuideId, position: i32) -> std::result::Result<(), GuideError> {
        self.image.set_guide_position(id, position)?;
        if let Some(mirror) = self.mirror.as_mut() {
            mirror.on_guide_moved(id, position);
        }
        Ok(())
    }

    /// Delete a guide from the image
    pub fn delete_guide(&mut self, id: GuideId) -> std::result::Result<(), GuideError> {
        self.image.detach_guide(id, true)?;

        let removal = match self.mirror.as_mut() {
            Some(mirror) => mirror.on_guide_removed(id, &mut self.image),
            None => GuideRemoval::Ignored,
        };
        if removal == GuideRemoval::Teardown {
            self.mirror = None;
        }
        Ok(())
    }
}

fn no_mirror() -> Error {
    Error::other("no mirror installed")
}
