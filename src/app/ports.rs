//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ClimateController / Sniffer (domain)
//! ```
//!
//! The IR codec (bit timing, carrier modulation, protocol decoding) lives on
//! the far side of these traits.  The controller and sniffer each own one
//! codec handle exclusively; nothing here is shared between them.
//!
//! The blocking settle delay uses [`embedded_hal::delay::DelayNs`] directly
//! rather than a dedicated port.

use log::Level;

use crate::climate::codec::{CodecCapabilities, CodecFan, CodecMode};
use crate::sniffer::{CaptureParams, DecodedFrame};

// ───────────────────────────────────────────────────────────────
// Transmit codec (driven adapter: domain → IR LED)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the controller assembles one command with the setters
/// and emits it with [`send`](AcCodec::send).  Setters only update the
/// pending command; nothing leaves the LED until `send`.
pub trait AcCodec {
    /// Capability descriptor for this codec build.
    fn capabilities(&self) -> CodecCapabilities;

    /// Prepare the transmitter (pin mux, carrier).  Called once at setup.
    fn begin(&mut self);

    fn set_power(&mut self, on: bool);
    fn set_mode(&mut self, mode: CodecMode);
    /// Set-point in whole degrees, already clamped to 16–30.
    fn set_temperature(&mut self, celsius: u8);
    fn set_fan(&mut self, fan: CodecFan);
    fn set_vertical_swing(&mut self, on: bool);
    /// Only called when [`CodecCapabilities::supports_horizontal_swing_actuation`]
    /// is set.
    fn set_horizontal_swing(&mut self, on: bool);

    /// Modulate and transmit the pending command once.
    fn send(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Capture channel (driven adapter: IR receiver → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port for the sniffer.
///
/// # Buffer contract
///
/// Every frame returned by [`try_decode`](CaptureChannel::try_decode) holds
/// the capture buffer until [`resume`](CaptureChannel::resume) is called.
/// A channel that is never resumed stops producing frames.
pub trait CaptureChannel {
    /// Allocate the capture buffer and start listening.
    fn start(&mut self, rx_pin: u8, params: &CaptureParams);

    /// Non-blocking: decode the completed capture, if there is one.
    fn try_decode(&mut self) -> Option<DecodedFrame>;

    /// Release the capture buffer for the next frame.
    fn resume(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Clock (driven adapter: system timer → domain)
// ───────────────────────────────────────────────────────────────

pub trait Clock {
    /// Milliseconds since boot (monotonic).
    fn now_ms(&self) -> u64;
}

// ───────────────────────────────────────────────────────────────
// Diagnostic sink (driven adapter: domain → serial log)
// ───────────────────────────────────────────────────────────────

/// Line-oriented diagnostics.  Each component owns one sink, so the log
/// tag is a property of the adapter rather than a global.
pub trait DiagnosticSink {
    fn report(&mut self, level: Level, message: &str);
}

// ───────────────────────────────────────────────────────────────
// Event sink (driven adapter: domain → host framework)
// ───────────────────────────────────────────────────────────────

/// The controller emits structured [`ClimateEvent`](super::events::ClimateEvent)s
/// through this port.  The host adapter forwards published state to its
/// entity model (Home Assistant, MQTT, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::ClimateEvent);
}
