//! Samsung AC infrared firmware library.
//!
//! Two independent components for an ESP32 IR bridge:
//!
//! - [`climate::ClimateController`] turns a requested thermostat state into a
//!   clamped, capability-gated Samsung AC command and transmits it twice.
//! - [`sniffer::Sniffer`] passively decodes received IR bursts and logs them
//!   for reverse-engineering unknown remotes.
//!
//! The IR codec is consumed through the port traits in [`app::ports`].
//! ESP-IDF-specific adapters are guarded by the `espidf` feature.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod climate;
pub mod config;
pub mod error;
pub mod pins;
pub mod sniffer;

pub use app::commands::StateChangeRequest;
pub use climate::{ClimateController, ThermostatState, TraitDescriptor};
pub use config::{ControllerConfig, SnifferConfig};
pub use error::ConfigError;
pub use sniffer::{DecodedFrame, Sniffer};
