//! Climate domain: thermostat state, capabilities and the IR controller.
//!
//! ```text
//!  StateChangeRequest ──▶ ┌──────────────────────┐ ──▶ AcCodec (×2, 120 ms apart)
//!                         │  ClimateController   │
//!  DeviceCapabilities ──▶ │  merge · clamp · gate│ ──▶ EventSink / DiagnosticSink
//!                         └──────────────────────┘
//! ```

pub mod codec;
pub mod controller;
pub mod swing;

use core::fmt;

use serde::{Deserialize, Serialize};

pub use controller::{ClimateController, SentCommand};

/// Lowest set-point the unit accepts (°C).
pub const MIN_TEMPERATURE_C: u8 = 16;
/// Highest set-point the unit accepts (°C).
pub const MAX_TEMPERATURE_C: u8 = 30;
/// Set-point granularity advertised to the host (°C).
pub const TEMPERATURE_STEP_C: f32 = 1.0;

// ---------------------------------------------------------------------------
// Host vocabulary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClimateMode {
    Off,
    Cool,
    Heat,
    Dry,
    FanOnly,
    Auto,
}

impl ClimateMode {
    pub const ALL: [Self; 6] = [
        Self::Off,
        Self::Cool,
        Self::Heat,
        Self::Dry,
        Self::FanOnly,
        Self::Auto,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FanSpeed {
    Auto,
    Low,
    Medium,
    High,
}

impl FanSpeed {
    pub const ALL: [Self; 4] = [Self::Auto, Self::Low, Self::Medium, Self::High];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwingMode {
    Off,
    Vertical,
    Horizontal,
    Both,
}

impl SwingMode {
    /// Whether the up/down axis should oscillate.
    pub fn wants_vertical(self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }

    /// Whether the left/right axis should oscillate.
    pub fn wants_horizontal(self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }
}

impl fmt::Display for ClimateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Off => "OFF",
            Self::Cool => "COOL",
            Self::Heat => "HEAT",
            Self::Dry => "DRY",
            Self::FanOnly => "FAN_ONLY",
            Self::Auto => "AUTO",
        };
        f.write_str(s)
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Auto => "AUTO",
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        };
        f.write_str(s)
    }
}

impl fmt::Display for SwingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Off => "OFF",
            Self::Vertical => "VERTICAL",
            Self::Horizontal => "HORIZONTAL",
            Self::Both => "BOTH",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Desired thermostat state, owned by the controller.
///
/// `target_temperature` keeps the host's requested value; rounding and
/// clamping to the device range happen when the command is assembled.
/// `power` is derived from `mode` on every transmission.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ThermostatState {
    pub power: bool,
    pub mode: ClimateMode,
    pub target_temperature: f32,
    /// `None` is transmitted as [`FanSpeed::Auto`].
    pub fan_speed: Option<FanSpeed>,
    pub swing: SwingMode,
}

impl Default for ThermostatState {
    /// Power-on defaults.
    fn default() -> Self {
        Self {
            power: false,
            mode: ClimateMode::Off,
            target_temperature: 24.0,
            fan_speed: Some(FanSpeed::High),
            swing: SwingMode::Both,
        }
    }
}

/// Temperatures compare by total order so a stored NaN equals itself and
/// change detection stays reflexive.
impl PartialEq for ThermostatState {
    fn eq(&self, other: &Self) -> bool {
        self.power == other.power
            && self.mode == other.mode
            && self.target_temperature.total_cmp(&other.target_temperature).is_eq()
            && self.fan_speed == other.fan_speed
            && self.swing == other.swing
    }
}

/// Which louver axes the installed unit physically has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCapabilities {
    pub supports_vertical_swing: bool,
    pub supports_horizontal_swing: bool,
}

impl Default for DeviceCapabilities {
    fn default() -> Self {
        Self {
            supports_vertical_swing: true,
            supports_horizontal_swing: true,
        }
    }
}

impl From<&crate::config::ControllerConfig> for DeviceCapabilities {
    fn from(config: &crate::config::ControllerConfig) -> Self {
        Self {
            supports_vertical_swing: config.supports_vertical_swing,
            supports_horizontal_swing: config.supports_horizontal_swing,
        }
    }
}

// ---------------------------------------------------------------------------
// Traits descriptor
// ---------------------------------------------------------------------------

/// Static capability set the host uses to build its UI and validate input.
#[derive(Debug, Clone, PartialEq)]
pub struct TraitDescriptor {
    pub min_temperature: u8,
    pub max_temperature: u8,
    pub temperature_step: f32,
    pub supports_current_temperature: bool,
    pub supports_two_point_target_temperature: bool,
    pub modes: heapless::Vec<ClimateMode, 6>,
    pub fan_speeds: heapless::Vec<FanSpeed, 4>,
    pub swing_modes: heapless::Vec<SwingMode, 4>,
}

impl TraitDescriptor {
    /// Build the descriptor for a unit with the given louver axes.
    pub fn for_capabilities(caps: DeviceCapabilities) -> Self {
        let mut swing_modes = heapless::Vec::new();
        let _ = swing_modes.push(SwingMode::Off);
        if caps.supports_vertical_swing {
            let _ = swing_modes.push(SwingMode::Vertical);
        }
        if caps.supports_horizontal_swing {
            let _ = swing_modes.push(SwingMode::Horizontal);
        }
        if caps.supports_vertical_swing && caps.supports_horizontal_swing {
            let _ = swing_modes.push(SwingMode::Both);
        }

        Self {
            min_temperature: MIN_TEMPERATURE_C,
            max_temperature: MAX_TEMPERATURE_C,
            temperature_step: TEMPERATURE_STEP_C,
            supports_current_temperature: false,
            supports_two_point_target_temperature: false,
            modes: heapless::Vec::from_slice(&ClimateMode::ALL).unwrap_or_default(),
            fan_speeds: heapless::Vec::from_slice(&FanSpeed::ALL).unwrap_or_default(),
            swing_modes,
        }
    }

    pub fn supports_swing(&self, swing: SwingMode) -> bool {
        self.swing_modes.contains(&swing)
    }
}

/// Round to the nearest whole degree (halves away from zero) and clamp to
/// the device range.  NaN maps to the minimum.
pub fn clamp_target_temperature(requested: f32) -> u8 {
    // `as` saturates on overflow and maps NaN to 0.
    let rounded = requested.round() as i32;
    rounded.clamp(i32::from(MIN_TEMPERATURE_C), i32::from(MAX_TEMPERATURE_C)) as u8
}
