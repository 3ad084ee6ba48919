//! Mirror symmetry
//!
//! Paints up to four synchronized strokes: the origin, its reflection across
//! the horizontal guide, its reflection across the vertical guide, and its
//! 180° rotation about the guide intersection.
//!
//! This module is split into submodules:
//! - `state`: symmetry flags, guide positions and activation transitions
//! - `strokes`: stroke derivation
//! - `select`: stroke index to brush transform mapping
//! - `properties`: named property access and settings snapshots

mod properties;
mod select;
mod state;
mod strokes;

pub use select::select_transform;
pub use state::MirrorState;
pub use strokes::derive_strokes;

use std::rc::Rc;

use mirrorstroke_core::{Coords, Extent, GuideId, Orientation, SymmetryError};
use mirrorstroke_settings::{PropertySpec, SettingValue};

use crate::guide::GuideBinding;
use crate::host::SymmetryHost;
use crate::multi_stroke::{MultiStroke, StrokeSet};
use crate::transform::{TransformCache, TransformDescriptor};

/// Display label of the mirror feature
pub const LABEL: &str = "Mirror";

/// Outcome of a guide removal notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideRemoval {
    /// The guide does not belong to this mirror
    Ignored,
    /// The guide of one axis was released; the mirror stays installed
    Released(Orientation),
    /// The last guide was released and the mirror asked to be removed
    Teardown,
}

/// Mirror symmetry multi-stroke feature
#[derive(Debug, Clone)]
pub struct Mirror {
    base: StrokeSet,
    state: MirrorState,
    horizontal_guide: GuideBinding,
    vertical_guide: GuideBinding,
    transforms: TransformCache,
}

impl Default for Mirror {
    fn default() -> Self {
        Self::new()
    }
}

impl Mirror {
    pub fn new() -> Self {
        Self {
            base: StrokeSet::new(),
            state: MirrorState::default(),
            horizontal_guide: GuideBinding::new(Orientation::Horizontal),
            vertical_guide: GuideBinding::new(Orientation::Vertical),
            transforms: TransformCache::new(),
        }
    }

    pub fn state(&self) -> &MirrorState {
        &self.state
    }

    /// Guide binding of an axis
    pub fn guide(&self, orientation: Orientation) -> &GuideBinding {
        match orientation {
            Orientation::Horizontal => &self.horizontal_guide,
            Orientation::Vertical => &self.vertical_guide,
        }
    }

    /// Size the brush transforms were last built for
    pub fn transform_extent(&self) -> Option<Extent> {
        self.transforms.key()
    }

    /// Re-derive the strokes of the last recorded origin
    pub fn reset(&mut self, host: &mut dyn SymmetryHost) {
        if let Some(origin) = self.base.origin() {
            self.set_origin(origin, host);
        }
    }

    /// The host deleted guide `id`
    ///
    /// Releases the axis that owned the guide and clears that axis, its
    /// position and point symmetry. Once neither axis has a guide left the
    /// mirror tears itself down and asks the host to remove it.
    pub fn on_guide_removed(&mut self, id: GuideId, host: &mut dyn SymmetryHost) -> GuideRemoval {
        let orientation = if self.horizontal_guide.is_listening_to(id) {
            Orientation::Horizontal
        } else if self.vertical_guide.is_listening_to(id) {
            Orientation::Vertical
        } else {
            tracing::trace!("Ignoring removal of unrelated guide {}", id);
            return GuideRemoval::Ignored;
        };

        match orientation {
            Orientation::Horizontal => {
                self.horizontal_guide.release();
                self.state.horizontal = false;
                self.state.horizontal_position = 0.0;
            }
            Orientation::Vertical => {
                self.vertical_guide.release();
                self.state.vertical = false;
                self.state.vertical_position = 0.0;
            }
        }
        self.state.point_symmetry = false;
        tracing::debug!("Released {} mirror guide {}", orientation, id);

        if self.horizontal_guide.handle().is_none() && self.vertical_guide.handle().is_none() {
            self.teardown(host);
            GuideRemoval::Teardown
        } else {
            self.reset(host);
            GuideRemoval::Released(orientation)
        }
    }

    /// The host moved guide `id`
    ///
    /// Returns true if the guide belongs to this mirror. Strokes are not
    /// re-derived; the next stroke picks up the new position.
    pub fn on_guide_moved(&mut self, id: GuideId, position: i32) -> bool {
        if self.horizontal_guide.is_listening_to(id) {
            self.state.horizontal_position = f64::from(position);
        } else if self.vertical_guide.is_listening_to(id) {
            self.state.vertical_position = f64::from(position);
        } else {
            return false;
        }
        tracing::trace!("Mirror guide {} moved to {}", id, position);
        true
    }

    /// Drop both guides and all brush transforms, then ask to be removed
    ///
    /// Every symmetry is switched off with the guides, so a torn down mirror
    /// can be configured again from scratch.
    pub fn teardown(&mut self, host: &mut dyn SymmetryHost) {
        self.horizontal_guide.release();
        self.vertical_guide.release();
        self.state.horizontal = false;
        self.state.vertical = false;
        self.state.point_symmetry = false;
        self.transforms.clear();
        tracing::debug!("{} torn down", LABEL);
        host.remove_multi_stroke(LABEL);
    }
}

impl MultiStroke for Mirror {
    fn label(&self) -> &'static str {
        LABEL
    }

    fn stroke_set(&self) -> &StrokeSet {
        &self.base
    }

    fn stroke_set_mut(&mut self) -> &mut StrokeSet {
        &mut self.base
    }

    fn update_strokes(&mut self, origin: Coords, host: &mut dyn SymmetryHost) {
        let strokes = derive_strokes(&origin, &self.state);
        tracing::trace!("{} derived {} strokes from {}", LABEL, strokes.len(), origin);
        self.base.set_strokes(strokes);
        host.strokes_updated(self.base.strokes());
    }

    /// # Panics
    ///
    /// If `stroke` is not an index into the current stroke list.
    fn get_transform(
        &mut self,
        stroke: usize,
        paint_width: i32,
        paint_height: i32,
    ) -> Option<Rc<TransformDescriptor>> {
        assert!(
            stroke < self.base.len(),
            "stroke index {} out of range for {} strokes",
            stroke,
            self.base.len()
        );

        self.transforms.prepare(Extent::new(paint_width, paint_height));
        let kind = select_transform(stroke, paint_width, paint_height, &self.state)?;
        self.transforms.get(kind)
    }

    fn settings(&self) -> Vec<Option<&'static PropertySpec>> {
        properties::user_settings()
    }

    fn persisted_settings(&self) -> Vec<&'static PropertySpec> {
        properties::persisted_settings()
    }

    fn get_property(&self, name: &str) -> Result<SettingValue, SymmetryError> {
        self.property(name)
    }

    fn set_property(
        &mut self,
        name: &str,
        value: SettingValue,
        host: &mut dyn SymmetryHost,
    ) -> Result<(), SymmetryError> {
        self.apply_property(name, value, host)
    }
}

#[cfg(test)]
pub(crate) mod test_host {
    use mirrorstroke_core::{Coords, Extent, GuideId};

    use crate::guide::GuideHandle;
    use crate::host::SymmetryHost;

    /// Host that records every call
    #[derive(Debug, Default)]
    pub struct RecordingHost {
        pub extent: Extent,
        pub next_id: u32,
        pub added: Vec<(GuideId, i32)>,
        pub removed: Vec<(GuideId, bool)>,
        pub moved: Vec<(GuideId, i32)>,
        pub updates: Vec<Vec<Coords>>,
        pub removals: Vec<String>,
    }

    impl RecordingHost {
        pub fn new(width: i32, height: i32) -> Self {
            Self {
                extent: Extent::new(width, height),
                ..Default::default()
            }
        }
    }

    impl SymmetryHost for RecordingHost {
        fn extent(&self) -> Extent {
            self.extent
        }
        fn next_guide_id(&mut self) -> GuideId {
            self.next_id += 1;
            GuideId(self.next_id)
        }
        fn add_guide(&mut self, guide: &GuideHandle, position: i32) {
            self.added.push((guide.id, position));
        }
        fn remove_guide(&mut self, guide: &GuideHandle, destructive: bool) {
            self.removed.push((guide.id, destructive));
        }
        fn move_guide(&mut self, guide: &GuideHandle, position: i32) {
            self.moved.push((guide.id, position));
        }
        fn strokes_updated(&mut self, strokes: &[Coords]) {
            self.updates.push(strokes.to_vec());
        }
        fn remove_multi_stroke(&mut self, label: &str) {
            self.removals.push(label.to_string());
        }
    }
}
