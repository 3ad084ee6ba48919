//! Brush transform descriptors.
//!
//! Mirrored strokes paint the brush image reflected or rotated so the copy is
//! a true mirror image of the original dab. Descriptors are built for a paint
//! area size and shared by reference; the cache only rebuilds them when the
//! paint area changes, so repeated lookups during a stroke return the very
//! same descriptor.

use std::rc::Rc;

use lyon::math::{point, vector, Angle, Transform};
use mirrorstroke_core::Extent;

/// Geometric operation applied to brush imagery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    /// Reflect across the horizontal line through the paint area centre
    HorizontalReflect,
    /// Reflect across the vertical line through the paint area centre
    VerticalReflect,
    /// Rotate 180° about the paint area centre
    CentralRotate,
}

impl std::fmt::Display for TransformKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HorizontalReflect => write!(f, "horizontal reflect"),
            Self::VerticalReflect => write!(f, "vertical reflect"),
            Self::CentralRotate => write!(f, "central rotate"),
        }
    }
}

/// A reusable transform for a paint area of a given size
#[derive(Debug, Clone, PartialEq)]
pub struct TransformDescriptor {
    kind: TransformKind,
    extent: Extent,
    matrix: Transform,
}

impl TransformDescriptor {
    /// Reflection across `y = height / 2`
    pub fn horizontal_reflect(extent: Extent) -> Self {
        let cy = extent.height as f32 / 2.0;
        let matrix = Transform::translation(0.0, -cy)
            .then_scale(1.0, -1.0)
            .then_translate(vector(0.0, cy));
        Self {
            kind: TransformKind::HorizontalReflect,
            extent,
            matrix,
        }
    }

    /// Reflection across `x = width / 2`
    pub fn vertical_reflect(extent: Extent) -> Self {
        let cx = extent.width as f32 / 2.0;
        let matrix = Transform::translation(-cx, 0.0)
            .then_scale(-1.0, 1.0)
            .then_translate(vector(cx, 0.0));
        Self {
            kind: TransformKind::VerticalReflect,
            extent,
            matrix,
        }
    }

    /// 180° rotation about `(width / 2, height / 2)`
    pub fn central_rotate(extent: Extent) -> Self {
        let cx = extent.width as f32 / 2.0;
        let cy = extent.height as f32 / 2.0;
        let matrix = Transform::translation(-cx, -cy)
            .then_rotate(Angle::degrees(180.0))
            .then_translate(vector(cx, cy));
        Self {
            kind: TransformKind::CentralRotate,
            extent,
            matrix,
        }
    }

    pub fn kind(&self) -> TransformKind {
        self.kind
    }

    /// Paint area size the descriptor was built for
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// The affine matrix, for renderers that consume one directly
    pub fn matrix(&self) -> &Transform {
        &self.matrix
    }

    /// Map a point of the paint area
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let p = self.matrix.transform_point(point(x as f32, y as f32));
        (p.x as f64, p.y as f64)
    }
}

#[derive(Debug, Clone)]
struct TransformSet {
    horizontal: Rc<TransformDescriptor>,
    vertical: Rc<TransformDescriptor>,
    central: Rc<TransformDescriptor>,
}

/// Descriptors for the last requested paint area size
#[derive(Debug, Clone, Default)]
pub struct TransformCache {
    cached: Option<(Extent, TransformSet)>,
}

impl TransformCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the descriptors unless they already match `extent`
    ///
    /// Returns true if the descriptors were rebuilt.
    pub fn prepare(&mut self, extent: Extent) -> bool {
        if self.cached.as_ref().is_some_and(|(key, _)| *key == extent) {
            return false;
        }

        tracing::trace!("Building mirror transforms for {}", extent);
        let set = TransformSet {
            horizontal: Rc::new(TransformDescriptor::horizontal_reflect(extent)),
            vertical: Rc::new(TransformDescriptor::vertical_reflect(extent)),
            central: Rc::new(TransformDescriptor::central_rotate(extent)),
        };
        self.cached = Some((extent, set));
        true
    }

    /// Size the cached descriptors were built for
    pub fn key(&self) -> Option<Extent> {
        self.cached.as_ref().map(|(key, _)| *key)
    }

    /// Shared descriptor of a kind, if prepared
    pub fn get(&self, kind: TransformKind) -> Option<Rc<TransformDescriptor>> {
        self.cached.as_ref().map(|(_, set)| match kind {
            TransformKind::HorizontalReflect => Rc::clone(&set.horizontal),
            TransformKind::VerticalReflect => Rc::clone(&set.vertical),
            TransformKind::CentralRotate => Rc::clone(&set.central),
        })
    }

    /// Drop every descriptor
    pub fn clear(&mut self) {
        self.cached = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-3 && (actual.1 - expected.1).abs() < 1e-3,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_horizontal_reflect() {
        let t = TransformDescriptor::horizontal_reflect(Extent::new(20, 10));
        assert_eq!(t.kind(), TransformKind::HorizontalReflect);
        assert_close(t.apply(3.0, 0.0), (3.0, 10.0));
        assert_close(t.apply(7.0, 5.0), (7.0, 5.0));
        assert_close(t.apply(0.0, 2.0), (0.0, 8.0));
    }

    #[test]
    fn test_vertical_reflect() {
        let t = TransformDescriptor::vertical_reflect(Extent::new(20, 10));
        assert_close(t.apply(0.0, 4.0), (20.0, 4.0));
        assert_close(t.apply(10.0, 1.0), (10.0, 1.0));
        assert_close(t.apply(15.0, 9.0), (5.0, 9.0));
    }

    #[test]
    fn test_central_rotate() {
        let t = TransformDescriptor::central_rotate(Extent::new(20, 10));
        assert_close(t.apply(0.0, 0.0), (20.0, 10.0));
        assert_close(t.apply(10.0, 5.0), (10.0, 5.0));
        assert_close(t.apply(15.0, 2.0), (5.0, 8.0));
    }

    #[test]
    fn test_cache_hit_keeps_identity() {
        let mut cache = TransformCache::new();
        assert!(cache.get(TransformKind::CentralRotate).is_none());

        assert!(cache.prepare(Extent::new(32, 32)));
        let first = cache.get(TransformKind::VerticalReflect).unwrap();

        assert!(!cache.prepare(Extent::new(32, 32)));
        let second = cache.get(TransformKind::VerticalReflect).unwrap();
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_cache_rebuilds_on_resize() {
        let mut cache = TransformCache::new();
        cache.prepare(Extent::new(32, 32));
        let before = cache.get(TransformKind::HorizontalReflect).unwrap();

        assert!(cache.prepare(Extent::new(32, 16)));
        let after = cache.get(TransformKind::HorizontalReflect).unwrap();
        assert!(!Rc::ptr_eq(&before, &after));
        assert_eq!(after.extent(), Extent::new(32, 16));
        assert_eq!(cache.key(), Some(Extent::new(32, 16)));

        cache.clear();
        assert!(cache.key().is_none());
    }
}
