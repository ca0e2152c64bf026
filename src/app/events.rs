//! Outbound application events.
//!
//! The [`ClimateController`](crate::climate::ClimateController) emits these
//! through the [`EventSink`](super::ports::EventSink) port.

use crate::climate::ThermostatState;

/// Structured events emitted by the climate controller.
#[derive(Debug, Clone, PartialEq)]
pub enum ClimateEvent {
    /// The controller finished setup on the given transmitter pin.
    Started { tx_pin: u8 },

    /// New thermostat state for the host to mirror.
    StatePublished(ThermostatState),
}
