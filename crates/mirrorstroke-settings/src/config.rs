//! Mirror settings
//!
//! A flat snapshot of every mirror property, used to save a mirror
//! configuration with a document and restore it later. Supports JSON and
//! TOML files; keys use the kebab-case property names.

use crate::error::{FormatError, SettingsError, SettingsResult};
use crate::properties::{
    require_property, SettingValue, DISABLE_TRANSFORMATION, HORIZONTAL_POSITION,
    HORIZONTAL_SYMMETRY, POINT_SYMMETRY, VERTICAL_POSITION, VERTICAL_SYMMETRY,
};
use mirrorstroke_core::SymmetryError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Persisted mirror configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct MirrorSettings {
    /// Mirror across the horizontal guide
    pub horizontal_symmetry: bool,
    /// Mirror across the vertical guide
    pub vertical_symmetry: bool,
    /// Rotate 180° about the guide intersection
    pub point_symmetry: bool,
    /// Paint mirrored copies with untransformed brush imagery
    pub disable_transformation: bool,
    /// Y position of the horizontal guide
    pub horizontal_position: f64,
    /// X position of the vertical guide
    pub vertical_position: f64,
}

impl MirrorSettings {
    /// Create new settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let settings: Self = match format {
            Format::Json => serde_json::from_str(&content).map_err(FormatError::from)?,
            Format::Toml => toml::from_str(&content).map_err(FormatError::from)?,
        };

        settings.validate()?;
        tracing::debug!("Loaded mirror settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self).map_err(FormatError::from)?,
            Format::Toml => toml::to_string_pretty(self).map_err(FormatError::from)?,
        };

        std::fs::write(path, content).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Saved mirror settings to {}", path.display());
        Ok(())
    }

    /// Check every value against its property's domain
    pub fn validate(&self) -> Result<(), SymmetryError> {
        for (name, value) in self.persisted_values() {
            require_property(name)?.validate(&value)?;
        }
        Ok(())
    }

    /// Get a value by property name
    pub fn get(&self, name: &str) -> Result<SettingValue, SymmetryError> {
        let value = match name {
            HORIZONTAL_SYMMETRY => self.horizontal_symmetry.into(),
            VERTICAL_SYMMETRY => self.vertical_symmetry.into(),
            POINT_SYMMETRY => self.point_symmetry.into(),
            DISABLE_TRANSFORMATION => self.disable_transformation.into(),
            HORIZONTAL_POSITION => self.horizontal_position.into(),
            VERTICAL_POSITION => self.vertical_position.into(),
            _ => {
                return Err(SymmetryError::UnknownProperty {
                    name: name.to_string(),
                })
            }
        };
        Ok(value)
    }

    /// Set a value by property name
    pub fn set(&mut self, name: &str, value: SettingValue) -> Result<(), SymmetryError> {
        require_property(name)?.validate(&value)?;

        match (name, value) {
            (HORIZONTAL_SYMMETRY, SettingValue::Bool(b)) => self.horizontal_symmetry = b,
            (VERTICAL_SYMMETRY, SettingValue::Bool(b)) => self.vertical_symmetry = b,
            (POINT_SYMMETRY, SettingValue::Bool(b)) => self.point_symmetry = b,
            (DISABLE_TRANSFORMATION, SettingValue::Bool(b)) => self.disable_transformation = b,
            (HORIZONTAL_POSITION, SettingValue::Double(v)) => self.horizontal_position = v,
            (VERTICAL_POSITION, SettingValue::Double(v)) => self.vertical_position = v,
            // validate() already rejected every other combination
            _ => unreachable!("property {} accepted a mismatched value", name),
        }
        Ok(())
    }

    /// All values in the order a document stores them
    ///
    /// Symmetry toggles come before guide positions so that restoring them in
    /// order creates the guides first and then moves them into place.
    pub fn persisted_values(&self) -> Vec<(&'static str, SettingValue)> {
        vec![
            (HORIZONTAL_SYMMETRY, self.horizontal_symmetry.into()),
            (VERTICAL_SYMMETRY, self.vertical_symmetry.into()),
            (POINT_SYMMETRY, self.point_symmetry.into()),
            (HORIZONTAL_POSITION, self.horizontal_position.into()),
            (VERTICAL_POSITION, self.vertical_position.into()),
            (DISABLE_TRANSFORMATION, self.disable_transformation.into()),
        ]
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            _ => Err(SettingsError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = MirrorSettings::new();
        assert!(!settings.horizontal_symmetry);
        assert!(!settings.point_symmetry);
        assert_eq!(settings.horizontal_position, 0.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_get_set_by_name() {
        let mut settings = MirrorSettings::new();
        settings.set(VERTICAL_SYMMETRY, true.into()).unwrap();
        settings.set(VERTICAL_POSITION, 128.0.into()).unwrap();

        assert!(settings.vertical_symmetry);
        assert_eq!(settings.get(VERTICAL_POSITION).unwrap(), SettingValue::Double(128.0));
        assert!(settings.set(VERTICAL_POSITION, (-1.0).into()).is_err());
        assert!(settings.set("bogus", true.into()).is_err());
        assert_eq!(settings.vertical_position, 128.0);
    }

    #[test]
    fn test_persisted_order() {
        let names: Vec<&str> = MirrorSettings::new()
            .persisted_values()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(
            names,
            vec![
                HORIZONTAL_SYMMETRY,
                VERTICAL_SYMMETRY,
                POINT_SYMMETRY,
                HORIZONTAL_POSITION,
                VERTICAL_POSITION,
                DISABLE_TRANSFORMATION,
            ]
        );
    }

    #[test]
    fn test_kebab_case_keys() {
        let settings = MirrorSettings {
            point_symmetry: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"point-symmetry\":true"));
        assert!(json.contains("\"horizontal-position\":0.0"));
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let settings: MirrorSettings = toml::from_str("vertical-symmetry = true\n").unwrap();
        assert!(settings.vertical_symmetry);
        assert!(!settings.horizontal_symmetry);
        assert_eq!(settings.vertical_position, 0.0);
    }

    #[test]
    fn test_validate_rejects_negative_position() {
        let settings = MirrorSettings {
            horizontal_position: -3.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SymmetryError::PositionOutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_infinite_position() {
        let settings: MirrorSettings =
            toml::from_str("horizontal-symmetry = true\nhorizontal-position = inf\n").unwrap();
        assert!(settings.horizontal_position.is_infinite());
        assert!(matches!(
            settings.validate(),
            Err(SymmetryError::PositionOutOfRange { ref name, .. }) if name == HORIZONTAL_POSITION
        ));
    }
}
