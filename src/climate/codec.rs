//! Command vocabulary understood by the Samsung IR codec.
//!
//! The discriminants are the values the codec packs into the state bytes.

use super::{ClimateMode, FanSpeed};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecMode {
    Auto = 0,
    Cool = 1,
    Dry = 2,
    Fan = 3,
    Heat = 4,
}

impl CodecMode {
    pub const fn byte(self) -> u8 {
        self as u8
    }
}

impl From<ClimateMode> for CodecMode {
    fn from(mode: ClimateMode) -> Self {
        match mode {
            ClimateMode::Cool => Self::Cool,
            ClimateMode::Heat => Self::Heat,
            ClimateMode::Dry => Self::Dry,
            ClimateMode::FanOnly => Self::Fan,
            ClimateMode::Auto => Self::Auto,
            // Never sent: the controller only sets a mode while powered on.
            ClimateMode::Off => Self::Cool,
        }
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecFan {
    Auto = 0,
    Low = 2,
    Med = 4,
    High = 5,
}

impl CodecFan {
    pub const fn byte(self) -> u8 {
        self as u8
    }
}

impl From<FanSpeed> for CodecFan {
    fn from(fan: FanSpeed) -> Self {
        match fan {
            FanSpeed::Auto => Self::Auto,
            FanSpeed::Low => Self::Low,
            FanSpeed::Medium => Self::Med,
            FanSpeed::High => Self::High,
        }
    }
}

/// What the linked codec build can actuate.  Queried once when the
/// controller is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecCapabilities {
    pub supports_horizontal_swing_actuation: bool,
}
