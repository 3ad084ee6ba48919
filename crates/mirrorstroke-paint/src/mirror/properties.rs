//! Named property access and settings snapshots for the mirror.

use mirrorstroke_core::SymmetryError;
use mirrorstroke_settings::{
    require_property, MirrorSettings, PropertySpec, SettingValue, DISABLE_TRANSFORMATION,
    HORIZONTAL_POSITION, HORIZONTAL_SYMMETRY, POINT_SYMMETRY, VERTICAL_POSITION,
    VERTICAL_SYMMETRY,
};

use super::Mirror;
use crate::host::SymmetryHost;

fn spec(name: &str) -> &'static PropertySpec {
    match require_property(name) {
        Ok(spec) => spec,
        Err(_) => unreachable!("{} is missing from the property catalogue", name),
    }
}

/// Settings shown to the user; `None` marks a separator
pub(super) fn user_settings() -> Vec<Option<&'static PropertySpec>> {
    vec![
        Some(spec(HORIZONTAL_SYMMETRY)),
        Some(spec(VERTICAL_SYMMETRY)),
        Some(spec(POINT_SYMMETRY)),
        None,
        Some(spec(DISABLE_TRANSFORMATION)),
    ]
}

/// Settings stored with a document, in restore order
pub(super) fn persisted_settings() -> Vec<&'static PropertySpec> {
    vec![
        spec(HORIZONTAL_SYMMETRY),
        spec(VERTICAL_SYMMETRY),
        spec(POINT_SYMMETRY),
        spec(HORIZONTAL_POSITION),
        spec(VERTICAL_POSITION),
        spec(DISABLE_TRANSFORMATION),
    ]
}

impl Mirror {
    pub(super) fn property(&self, name: &str) -> Result<SettingValue, SymmetryError> {
        let state = &self.state;
        let value = match name {
            HORIZONTAL_SYMMETRY => state.horizontal.into(),
            VERTICAL_SYMMETRY => state.vertical.into(),
            POINT_SYMMETRY => state.point_symmetry.into(),
            DISABLE_TRANSFORMATION => state.disable_transformation.into(),
            HORIZONTAL_POSITION => state.horizontal_position.into(),
            VERTICAL_POSITION => state.vertical_position.into(),
            _ => {
                return Err(SymmetryError::UnknownProperty {
                    name: name.to_string(),
                })
            }
        };
        Ok(value)
    }

    pub(super) fn apply_property(
        &mut self,
        name: &str,
        value: SettingValue,
        host: &mut dyn SymmetryHost,
    ) -> Result<(), SymmetryError> {
        require_property(name)?.validate(&value)?;

        match (name, value) {
            (HORIZONTAL_SYMMETRY, SettingValue::Bool(b)) => self.set_horizontal_symmetry(b, host),
            (VERTICAL_SYMMETRY, SettingValue::Bool(b)) => self.set_vertical_symmetry(b, host),
            (POINT_SYMMETRY, SettingValue::Bool(b)) => self.set_point_symmetry(b, host),
            (DISABLE_TRANSFORMATION, SettingValue::Bool(b)) => self.set_disable_transformation(b),
            (HORIZONTAL_POSITION, SettingValue::Double(v)) => {
                self.set_horizontal_position(v, host)?
            }
            (VERTICAL_POSITION, SettingValue::Double(v)) => self.set_vertical_position(v, host)?,
            _ => unreachable!("property {} accepted a mismatched value", name),
        }
        tracing::trace!("{} set to {}", name, value);
        Ok(())
    }

    /// Snapshot of every persisted property
    pub fn to_settings(&self) -> MirrorSettings {
        let state = &self.state;
        MirrorSettings {
            horizontal_symmetry: state.horizontal,
            vertical_symmetry: state.vertical,
            point_symmetry: state.point_symmetry,
            disable_transformation: state.disable_transformation,
            horizontal_position: state.horizontal_position,
            vertical_position: state.vertical_position,
        }
    }

    /// Restore persisted properties
    ///
    /// The whole snapshot is checked first; an invalid value leaves the
    /// mirror unchanged. Toggles are applied before positions, so guides
    /// created by a toggle are moved to their stored place.
    pub fn apply_settings(
        &mut self,
        settings: &MirrorSettings,
        host: &mut dyn SymmetryHost,
    ) -> Result<(), SymmetryError> {
        settings.validate()?;
        for (name, value) in settings.persisted_values() {
            self.apply_property(name, value, host)?;
        }
        tracing::debug!("Applied mirror settings");
        Ok(())
    }
}
