//! Data models for MirrorStroke
//!
//! Provides the value types that flow between the host image and the
//! multi-stroke features: stroke coordinates, drawable extents, and guide
//! identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default pressure reported by devices without a pressure axis
pub const DEFAULT_PRESSURE: f64 = 1.0;

/// A single stroke sample in image space
///
/// Besides the position, a sample carries the device axes reported by the
/// input device. Mirrored copies only rewrite `x` and `y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    /// X position in image pixels
    pub x: f64,
    /// Y position in image pixels
    pub y: f64,
    /// Stylus pressure in `[0, 1]`
    pub pressure: f64,
    /// Stylus tilt along X in `[-1, 1]`
    pub xtilt: f64,
    /// Stylus tilt along Y in `[-1, 1]`
    pub ytilt: f64,
    /// Airbrush wheel in `[0, 1]`
    pub wheel: f64,
    /// Pointer velocity
    pub velocity: f64,
    /// Pointer direction in turns
    pub direction: f64,
}

impl Coords {
    /// Create a sample at a position with default device axes
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Copy of this sample moved to another position
    pub fn with_position(&self, x: f64, y: f64) -> Self {
        Self { x, y, ..*self }
    }
}

impl Default for Coords {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            pressure: DEFAULT_PRESSURE,
            xtilt: 0.0,
            ytilt: 0.0,
            wheel: 0.0,
            velocity: 0.0,
            direction: 0.0,
        }
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Size of a drawable or paint area in whole pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Extent {
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl Extent {
    /// Create a new extent
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Midpoint along the axis a guide of this orientation measures
    ///
    /// A horizontal guide sits at a Y coordinate, so its midpoint is half the
    /// height; a vertical guide sits at an X coordinate.
    pub fn midpoint(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => f64::from(self.height) / 2.0,
            Orientation::Vertical => f64::from(self.width) / 2.0,
        }
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Orientation of a guide line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// A horizontal line, positioned by Y
    Horizontal,
    /// A vertical line, positioned by X
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Identifier of a guide within an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GuideId(pub u32);

impl fmt::Display for GuideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords_defaults() {
        let c = Coords::new(3.0, 4.0);
        assert_eq!(c.x, 3.0);
        assert_eq!(c.y, 4.0);
        assert_eq!(c.pressure, DEFAULT_PRESSURE);
        assert_eq!(c.velocity, 0.0);
    }

    #[test]
    fn test_with_position_keeps_axes() {
        let c = Coords {
            pressure: 0.3,
            xtilt: -0.5,
            wheel: 0.75,
            ..Coords::new(1.0, 2.0)
        };
        let moved = c.with_position(10.0, 20.0);
        assert_eq!(moved.x, 10.0);
        assert_eq!(moved.y, 20.0);
        assert_eq!(moved.pressure, 0.3);
        assert_eq!(moved.xtilt, -0.5);
        assert_eq!(moved.wheel, 0.75);
    }

    #[test]
    fn test_extent_midpoint() {
        let extent = Extent::new(640, 481);
        assert_eq!(extent.midpoint(Orientation::Vertical), 320.0);
        assert_eq!(extent.midpoint(Orientation::Horizontal), 240.5);
        assert!(!extent.is_empty());
        assert!(Extent::new(0, 10).is_empty());
    }

    #[test]
    fn test_orientation_serialization() {
        let json = serde_json::to_string(&Orientation::Horizontal).expect("Should serialize");
        assert_eq!(json, "\"horizontal\"");
    }
}
