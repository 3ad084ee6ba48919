//! Stroke index to brush transform mapping.
//!
//! The mapping is positional: it relies on `derive_strokes` emitting the
//! origin, the horizontal copy, the vertical copy and the point copy in that
//! order. Both must change together.

use super::MirrorState;
use crate::transform::TransformKind;

/// Brush transform kind for stroke `index`, `None` for identity
pub fn select_transform(
    index: usize,
    paint_width: i32,
    paint_height: i32,
    state: &MirrorState,
) -> Option<TransformKind> {
    if state.disable_transformation || index == 0 || paint_width == 0 || paint_height == 0 {
        return None;
    }

    let kind = if index == 1 && state.horizontal {
        TransformKind::HorizontalReflect
    } else if (index == 2 && state.horizontal && state.vertical)
        || (index == 1 && state.vertical && !state.horizontal)
    {
        TransformKind::VerticalReflect
    } else {
        TransformKind::CentralRotate
    };
    Some(kind)
}
