//! Mirror property catalogue
//!
//! Every setting of the mirror feature is a named property with a label for
//! settings dialogs, a value kind and a default. The catalogue is static;
//! features hand out references into it when asked for their settings.

use mirrorstroke_core::SymmetryError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const HORIZONTAL_SYMMETRY: &str = "horizontal-symmetry";
pub const VERTICAL_SYMMETRY: &str = "vertical-symmetry";
pub const POINT_SYMMETRY: &str = "point-symmetry";
pub const DISABLE_TRANSFORMATION: &str = "disable-transformation";
pub const HORIZONTAL_POSITION: &str = "horizontal-position";
pub const VERTICAL_POSITION: &str = "vertical-position";

/// Value kind and domain of a property
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyKind {
    /// A toggle
    Boolean { default: bool },
    /// A floating point value in `[min, max]`
    Double { min: f64, max: f64, default: f64 },
}

/// Static description of one property
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertySpec {
    /// Canonical property name (kebab-case)
    pub name: &'static str,
    /// Human readable label
    pub label: &'static str,
    /// Value kind and domain
    pub kind: PropertyKind,
}

impl PropertySpec {
    /// Default value of the property
    pub fn default_value(&self) -> SettingValue {
        match self.kind {
            PropertyKind::Boolean { default } => SettingValue::Bool(default),
            PropertyKind::Double { default, .. } => SettingValue::Double(default),
        }
    }

    /// Check a value against the kind and domain of this property
    pub fn validate(&self, value: &SettingValue) -> Result<(), SymmetryError> {
        match (self.kind, value) {
            (PropertyKind::Boolean { .. }, SettingValue::Bool(_)) => Ok(()),
            (PropertyKind::Double { min, max, .. }, SettingValue::Double(v)) => {
                if v.is_nan() || *v < min || *v > max {
                    Err(SymmetryError::PositionOutOfRange {
                        name: self.name.to_string(),
                        value: *v,
                    })
                } else {
                    Ok(())
                }
            }
            (PropertyKind::Boolean { .. }, _) => Err(SymmetryError::InvalidValue {
                name: self.name.to_string(),
                expected: "boolean".to_string(),
            }),
            (PropertyKind::Double { .. }, _) => Err(SymmetryError::InvalidValue {
                name: self.name.to_string(),
                expected: "double".to_string(),
            }),
        }
    }
}

/// A property value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Double(f64),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(b) => write!(f, "{}", b),
            SettingValue::Double(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        SettingValue::Double(value)
    }
}

/// All mirror properties, in declaration order
pub static MIRROR_PROPERTIES: [PropertySpec; 6] = [
    PropertySpec {
        name: HORIZONTAL_SYMMETRY,
        label: "Horizontal Mirror",
        kind: PropertyKind::Boolean { default: false },
    },
    PropertySpec {
        name: VERTICAL_SYMMETRY,
        label: "Vertical Mirror",
        kind: PropertyKind::Boolean { default: false },
    },
    PropertySpec {
        name: POINT_SYMMETRY,
        label: "Central Symmetry",
        kind: PropertyKind::Boolean { default: false },
    },
    PropertySpec {
        name: DISABLE_TRANSFORMATION,
        label: "Disable Brush Transformation (faster)",
        kind: PropertyKind::Boolean { default: false },
    },
    PropertySpec {
        name: HORIZONTAL_POSITION,
        label: "Horizontal guide position",
        kind: PropertyKind::Double {
            min: 0.0,
            max: f64::MAX,
            default: 0.0,
        },
    },
    PropertySpec {
        name: VERTICAL_POSITION,
        label: "Vertical guide position",
        kind: PropertyKind::Double {
            min: 0.0,
            max: f64::MAX,
            default: 0.0,
        },
    },
];

/// Look up a property by name
pub fn find_property(name: &str) -> Option<&'static PropertySpec> {
    MIRROR_PROPERTIES.iter().find(|spec| spec.name == name)
}

/// Look up a property by name, failing with `UnknownProperty`
pub fn require_property(name: &str) -> Result<&'static PropertySpec, SymmetryError> {
    find_property(name).ok_or_else(|| SymmetryError::UnknownProperty {
        name: name.to_string(),
    })
}
