//! # MirrorStroke Paint
//!
//! Mirror symmetry for multi-stroke painting.
//!
//! A [`Mirror`] turns every stroke into up to four synchronized strokes
//! (origin, horizontal reflection, vertical reflection, central rotation),
//! keeps the guides that define the mirror axes in the host image, and hands
//! out the brush transform each mirrored copy must be painted with.
//!
//! The image side is reached through the [`SymmetryHost`] trait. [`Image`]
//! and [`Document`] are an in-memory host that publishes its changes on the
//! core event bus.

pub mod document;
pub mod guide;
pub mod host;
pub mod image;
pub mod mirror;
pub mod multi_stroke;
pub mod transform;

pub use document::Document;
pub use guide::{GuideBinding, GuideHandle};
pub use host::SymmetryHost;
pub use image::{Guide, Image};
pub use mirror::{derive_strokes, select_transform, GuideRemoval, Mirror, MirrorState, LABEL};
pub use multi_stroke::{MultiStroke, StrokeList, StrokeSet};
pub use transform::{TransformCache, TransformDescriptor, TransformKind};
