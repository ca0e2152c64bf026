//! GPIO pin assignments for the IR transmitter / receiver board.
//!
//! Single source of truth for the default pins.  Both can be overridden in
//! [`ControllerConfig`](crate::config::ControllerConfig) and
//! [`SnifferConfig`](crate::config::SnifferConfig).

// ---------------------------------------------------------------------------
// IR transmitter (IR LED through an NPN driver)
// ---------------------------------------------------------------------------

/// RMT-driven output for the 38 kHz IR LED.
pub const IR_TX_GPIO: u8 = 4;

// ---------------------------------------------------------------------------
// IR receiver (TSOP-style demodulating receiver, active LOW)
// ---------------------------------------------------------------------------

/// Demodulated receiver output used by the sniffer.
pub const IR_RX_GPIO: u8 = 21;

/// Highest GPIO number on the ESP32 family (ESP32-S3 exposes 0–48).
pub const MAX_GPIO: u8 = 48;
