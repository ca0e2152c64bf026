//! Application boundary: port traits, inbound requests, outbound events.
//!
//! The climate controller and the frame sniffer never touch hardware
//! directly.  All interaction happens through the **port traits** defined
//! in [`ports`], keeping both fully testable without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
