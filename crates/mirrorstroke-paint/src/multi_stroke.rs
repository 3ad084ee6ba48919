//! Multi-stroke painting.
//!
//! A multi-stroke feature expands every stroke the user paints into a list of
//! synchronized strokes. The painting code records the origin when a stroke
//! starts, asks the feature for the derived list, then paints each copy with
//! the brush transform the feature selects for that index.

use std::rc::Rc;

use mirrorstroke_core::{Coords, SymmetryError};
use mirrorstroke_settings::{PropertySpec, SettingValue};
use smallvec::SmallVec;

use crate::host::SymmetryHost;
use crate::transform::TransformDescriptor;

/// Derived stroke coordinates, origin first
pub type StrokeList = SmallVec<[Coords; 4]>;

/// Origin and derived strokes of the current stroke
#[derive(Debug, Clone, Default)]
pub struct StrokeSet {
    origin: Option<Coords>,
    strokes: StrokeList,
}

impl StrokeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last recorded origin, if a stroke was ever started
    pub fn origin(&self) -> Option<Coords> {
        self.origin
    }

    pub fn strokes(&self) -> &[Coords] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub(crate) fn set_origin(&mut self, origin: Coords) {
        self.origin = Some(origin);
    }

    pub(crate) fn set_strokes(&mut self, strokes: StrokeList) {
        self.strokes = strokes;
    }
}

/// A feature that paints several synchronized strokes
pub trait MultiStroke {
    /// Display label of the feature
    fn label(&self) -> &'static str;

    fn stroke_set(&self) -> &StrokeSet;

    fn stroke_set_mut(&mut self) -> &mut StrokeSet;

    /// Rebuild the stroke list for `origin` and notify the host
    fn update_strokes(&mut self, origin: Coords, host: &mut dyn SymmetryHost);

    /// Brush transform for one derived stroke, `None` for identity
    fn get_transform(
        &mut self,
        stroke: usize,
        paint_width: i32,
        paint_height: i32,
    ) -> Option<Rc<TransformDescriptor>>;

    /// User-facing settings; `None` slots are separators
    fn settings(&self) -> Vec<Option<&'static PropertySpec>>;

    /// Settings stored with a document
    fn persisted_settings(&self) -> Vec<&'static PropertySpec>;

    fn get_property(&self, name: &str) -> Result<SettingValue, SymmetryError>;

    fn set_property(
        &mut self,
        name: &str,
        value: SettingValue,
        host: &mut dyn SymmetryHost,
    ) -> Result<(), SymmetryError>;

    /// Record a new stroke origin and derive its strokes
    fn set_origin(&mut self, origin: Coords, host: &mut dyn SymmetryHost) {
        self.stroke_set_mut().set_origin(origin);
        self.update_strokes(origin, host);
    }

    fn strokes(&self) -> &[Coords] {
        self.stroke_set().strokes()
    }

    fn origin(&self) -> Option<Coords> {
        self.stroke_set().origin()
    }
}
