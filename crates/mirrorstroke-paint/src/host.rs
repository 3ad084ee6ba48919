//! Host collaborators of a multi-stroke feature.
//!
//! The feature never owns the image. Everything it needs from it (the
//! drawable extent, the guide collection, stroke notifications and feature
//! removal) goes through this trait, called synchronously.

use mirrorstroke_core::{Coords, Extent, GuideId};

use crate::guide::GuideHandle;

/// Image-side services used by multi-stroke features
pub trait SymmetryHost {
    /// Current drawable extent
    fn extent(&self) -> Extent;

    /// Allocate a fresh guide identifier
    fn next_guide_id(&mut self) -> GuideId;

    /// Attach a guide to the image guide collection
    fn add_guide(&mut self, guide: &GuideHandle, position: i32);

    /// Take a guide out of the image guide collection
    ///
    /// A non-destructive removal only hides the guide; the feature keeps the
    /// handle and may add it again later.
    fn remove_guide(&mut self, guide: &GuideHandle, destructive: bool);

    /// Move an attached guide
    fn move_guide(&mut self, guide: &GuideHandle, position: i32);

    /// The derived stroke list was regenerated
    fn strokes_updated(&mut self, strokes: &[Coords]);

    /// The feature asks to be uninstalled from the image
    fn remove_multi_stroke(&mut self, label: &str);
}
