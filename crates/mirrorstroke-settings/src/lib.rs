//! MirrorStroke Settings Crate
//!
//! Handles the mirror property catalogue, settings validation, and settings
//! persistence to JSON or TOML files.

pub mod config;
pub mod error;
pub mod persistence;
pub mod properties;

pub use config::MirrorSettings;
pub use error::{FormatError, SettingsError, SettingsResult};
pub use persistence::SettingsPersistence;
pub use properties::{
    find_property, require_property, PropertyKind, PropertySpec, SettingValue,
    DISABLE_TRANSFORMATION, HORIZONTAL_POSITION, HORIZONTAL_SYMMETRY, MIRROR_PROPERTIES,
    POINT_SYMMETRY, VERTICAL_POSITION, VERTICAL_SYMMETRY,
};
