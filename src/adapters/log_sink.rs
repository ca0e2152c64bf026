//! Log-based sink adapters.
//!
//! Implement [`DiagnosticSink`] and [`EventSink`] on top of the `log`
//! facade, which the ESP-IDF logger routes to UART / USB-CDC in
//! production.  Each component gets its own sink with its own log target.

use log::{Level, info, log};

use crate::app::events::ClimateEvent;
use crate::app::ports::{DiagnosticSink, EventSink};

/// Log target used by the climate controller.
pub const CONTROLLER_TARGET: &str = "samsung_ac";
/// Log target used by the frame sniffer.
pub const SNIFFER_TARGET: &str = "samsung_sniffer";

/// Forwards every diagnostic line to `log` under a fixed target.
#[derive(Debug, Clone, Copy)]
pub struct LogDiagnosticSink {
    target: &'static str,
}

impl LogDiagnosticSink {
    pub fn new(target: &'static str) -> Self {
        Self { target }
    }

    pub fn controller() -> Self {
        Self::new(CONTROLLER_TARGET)
    }

    pub fn sniffer() -> Self {
        Self::new(SNIFFER_TARGET)
    }

    pub fn target(&self) -> &'static str {
        self.target
    }
}

impl DiagnosticSink for LogDiagnosticSink {
    fn report(&mut self, level: Level, message: &str) {
        log!(target: self.target, level, "{}", message);
    }
}

/// Adapter that logs every [`ClimateEvent`] to the serial console.
/// A host bridge (MQTT, Home Assistant API) would implement the same trait.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &ClimateEvent) {
        match event {
            ClimateEvent::Started { tx_pin } => {
                info!(target: CONTROLLER_TARGET, "START | tx_pin=GPIO{}", tx_pin);
            }
            ClimateEvent::StatePublished(s) => {
                info!(
                    target: CONTROLLER_TARGET,
                    "STATE | power={} mode={} target={:.1}\u{00b0}C fan={} swing={}",
                    if s.power { "on" } else { "off" },
                    s.mode,
                    s.target_temperature,
                    s.fan_speed.map_or("AUTO".to_owned(), |f| f.to_string()),
                    s.swing,
                );
            }
        }
    }
}
