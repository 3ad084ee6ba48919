//! Stroke derivation.

use mirrorstroke_core::Coords;

use super::MirrorState;
use crate::multi_stroke::StrokeList;

/// Expand one origin into the mirrored stroke list
///
/// The list is the origin, then its reflection across the horizontal guide,
/// its reflection across the vertical guide and its rotation about the guide
/// intersection, each present only when the matching symmetry is active.
/// Coincident copies are kept. Copies keep every device axis of the origin.
pub fn derive_strokes(origin: &Coords, state: &MirrorState) -> StrokeList {
    let mirrored_x = 2.0 * state.vertical_position - origin.x;
    let mirrored_y = 2.0 * state.horizontal_position - origin.y;

    let mut strokes = StrokeList::new();
    strokes.push(*origin);
    if state.horizontal {
        strokes.push(origin.with_position(origin.x, mirrored_y));
    }
    if state.vertical {
        strokes.push(origin.with_position(mirrored_x, origin.y));
    }
    if state.point_symmetry {
        strokes.push(origin.with_position(mirrored_x, mirrored_y));
    }
    strokes
}
