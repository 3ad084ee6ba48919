//! Symmetry flags, guide positions and activation transitions.

use mirrorstroke_core::SymmetryError;
use mirrorstroke_settings::{
    require_property, SettingValue, HORIZONTAL_POSITION, VERTICAL_POSITION,
};

use super::Mirror;
use crate::host::SymmetryHost;

/// Which mirror axes are active and where the guides sit
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MirrorState {
    /// Mirror across the horizontal guide
    pub horizontal: bool,
    /// Mirror across the vertical guide
    pub vertical: bool,
    /// Rotate 180° about the guide intersection
    pub point_symmetry: bool,
    /// Y coordinate of the horizontal guide
    pub horizontal_position: f64,
    /// X coordinate of the vertical guide
    pub vertical_position: f64,
    /// Paint mirrored copies with untransformed brush imagery
    pub disable_transformation: bool,
}

impl MirrorState {
    /// True if any stroke besides the origin is painted
    pub fn is_mirroring(&self) -> bool {
        self.horizontal || self.vertical || self.point_symmetry
    }
}

impl Mirror {
    pub fn set_horizontal_symmetry(&mut self, active: bool, host: &mut dyn SymmetryHost) {
        if active == self.state.horizontal {
            return;
        }

        self.state.horizontal = active;
        if active {
            self.horizontal_guide.activate(&mut self.state.horizontal_position, host);
        } else if !self.state.point_symmetry {
            self.horizontal_guide.deactivate(host);
        }
        tracing::debug!("Horizontal mirror {}", on_off(active));
        self.reset(host);
    }

    pub fn set_vertical_symmetry(&mut self, active: bool, host: &mut dyn SymmetryHost) {
        if active == self.state.vertical {
            return;
        }

        self.state.vertical = active;
        if active {
            self.vertical_guide.activate(&mut self.state.vertical_position, host);
        } else if !self.state.point_symmetry {
            self.vertical_guide.deactivate(host);
        }
        tracing::debug!("Vertical mirror {}", on_off(active));
        self.reset(host);
    }

    /// Toggle central symmetry
    ///
    /// Both guides are shown while central symmetry is on, without touching
    /// the axis flags. Switching it off hides every guide whose own axis is
    /// off.
    pub fn set_point_symmetry(&mut self, active: bool, host: &mut dyn SymmetryHost) {
        if active == self.state.point_symmetry {
            return;
        }

        self.state.point_symmetry = active;
        if active {
            if !self.state.horizontal {
                self.horizontal_guide.activate(&mut self.state.horizontal_position, host);
            }
            if !self.state.vertical {
                self.vertical_guide.activate(&mut self.state.vertical_position, host);
            }
        } else {
            // Unlike the axis setters there is no second guard here: the axis
            // flag alone decides.
            if !self.state.horizontal {
                self.horizontal_guide.deactivate(host);
            }
            if !self.state.vertical {
                self.vertical_guide.deactivate(host);
            }
        }
        tracing::debug!("Central symmetry {}", on_off(active));
        self.reset(host);
    }

    pub fn set_disable_transformation(&mut self, disable: bool) {
        self.state.disable_transformation = disable;
    }

    /// Store the horizontal guide position and move the guide if shown
    pub fn set_horizontal_position(
        &mut self,
        position: f64,
        host: &mut dyn SymmetryHost,
    ) -> Result<(), SymmetryError> {
        require_property(HORIZONTAL_POSITION)?.validate(&SettingValue::Double(position))?;

        self.state.horizontal_position = position;
        if let Some(handle) = self.horizontal_guide.handle() {
            if self.horizontal_guide.is_attached() {
                host.move_guide(&handle, position as i32);
            }
        }
        Ok(())
    }

    /// Store the vertical guide position and move the guide if shown
    pub fn set_vertical_position(
        &mut self,
        position: f64,
        host: &mut dyn SymmetryHost,
    ) -> Result<(), SymmetryError> {
        require_property(VERTICAL_POSITION)?.validate(&SettingValue::Double(position))?;

        self.state.vertical_position = position;
        if let Some(handle) = self.vertical_guide.handle() {
            if self.vertical_guide.is_attached() {
                host.move_guide(&handle, position as i32);
            }
        }
        Ok(())
    }
}

fn on_off(active: bool) -> &'static str {
    if active {
        "on"
    } else {
        "off"
    }
}
