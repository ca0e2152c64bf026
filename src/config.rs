//! Component configuration parameters
//!
//! Resolved once at boot by the host and immutable afterwards.  Both structs
//! deserialize from JSON; missing keys fall back to [`Default`], and the key
//! names used by the original YAML component schema are accepted as aliases.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::pins;

/// Highest timing tolerance the capture primitive accepts (percent).
pub const MAX_TOLERANCE_PERCENT: u8 = 50;

/// Climate controller configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// GPIO driving the IR LED
    #[serde(alias = "ir_pin")]
    pub tx_pin: u8,
    /// Louvers can oscillate up/down
    #[serde(alias = "supports_swing_vertical")]
    pub supports_vertical_swing: bool,
    /// Louvers can oscillate left/right
    #[serde(alias = "supports_swing_horizontal")]
    pub supports_horizontal_swing: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            tx_pin: pins::IR_TX_GPIO,
            supports_vertical_swing: true,
            supports_horizontal_swing: true,
        }
    }
}

impl ControllerConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tx_pin > pins::MAX_GPIO {
            return Err(ConfigError::ValidationFailed("tx_pin out of range"));
        }
        Ok(())
    }
}

/// Frame sniffer configuration
///
/// Capture overrides use `0` to mean "keep the library default".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnifferConfig {
    // --- Receiver ---
    /// GPIO wired to the IR receiver output
    pub rx_pin: u8,

    // --- Report views ---
    /// Emit the `Code` hex line
    pub dump_hex: bool,
    /// Emit the `uint8_t state[n] = {..};` literal
    #[serde(alias = "dump_state")]
    pub dump_byte_array: bool,
    /// Emit the codec's human-readable description
    #[serde(alias = "dump_desc")]
    pub dump_description: bool,
    /// Emit the codec's raw replay source text
    #[serde(alias = "dump_raw")]
    pub dump_raw_replay: bool,
    /// Minimum spacing between two reports (milliseconds)
    pub rate_limit_ms: u32,

    // --- Capture overrides ---
    /// Capture buffer depth in pulse entries
    #[serde(alias = "buffer_size")]
    pub buffer_depth: u16,
    /// Gap that terminates a frame (milliseconds, clamped to 255)
    #[serde(alias = "timeout_ms")]
    pub idle_timeout_ms: u16,
    /// Pulse timing tolerance (percent)
    #[serde(alias = "tolerance_percent")]
    pub timing_tolerance_percent: u8,
    /// Shortest run of pulses reported as an UNKNOWN frame
    #[serde(alias = "min_unknown_size")]
    pub min_unknown_run_length: u16,
}

impl Default for SnifferConfig {
    fn default() -> Self {
        Self {
            rx_pin: pins::IR_RX_GPIO,

            dump_hex: true,
            dump_byte_array: true,
            dump_description: true,
            dump_raw_replay: true,
            rate_limit_ms: 500,

            buffer_depth: 0,
            idle_timeout_ms: 0,
            timing_tolerance_percent: 0,
            min_unknown_run_length: 0,
        }
    }
}

impl SnifferConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Range checks.  `idle_timeout_ms` is deliberately not checked here:
    /// values above 255 are clamped when the capture channel is configured.
    pub fn validate(&self) -> Result<()> {
        if self.rx_pin > pins::MAX_GPIO {
            return Err(ConfigError::ValidationFailed("rx_pin out of range"));
        }
        if self.timing_tolerance_percent > MAX_TOLERANCE_PERCENT {
            return Err(ConfigError::ValidationFailed(
                "timing_tolerance_percent must be 0..=50",
            ));
        }
        Ok(())
    }
}
