//! Inbound commands to the climate controller.

use serde::{Deserialize, Serialize};

use crate::climate::{ClimateMode, FanSpeed, SwingMode, ThermostatState};

/// Sparse state patch from the host.  Absent fields leave the current
/// state unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateChangeRequest {
    pub mode: Option<ClimateMode>,
    pub target_temperature: Option<f32>,
    pub fan_speed: Option<FanSpeed>,
    pub swing: Option<SwingMode>,
}

impl StateChangeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ClimateMode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn with_target_temperature(mut self, celsius: f32) -> Self {
        self.target_temperature = Some(celsius);
        self
    }

    #[must_use]
    pub fn with_fan_speed(mut self, fan: FanSpeed) -> Self {
        self.fan_speed = Some(fan);
        self
    }

    #[must_use]
    pub fn with_swing(mut self, swing: SwingMode) -> Self {
        self.swing = Some(swing);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.mode.is_none()
            && self.target_temperature.is_none()
            && self.fan_speed.is_none()
            && self.swing.is_none()
    }

    /// Return `state` with every present field overwritten.
    pub fn merged_into(&self, state: ThermostatState) -> ThermostatState {
        ThermostatState {
            mode: self.mode.unwrap_or(state.mode),
            target_temperature: self.target_temperature.unwrap_or(state.target_temperature),
            fan_speed: self.fan_speed.or(state.fan_speed),
            swing: self.swing.unwrap_or(state.swing),
            ..state
        }
    }
}
