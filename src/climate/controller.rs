//! Climate controller: thermostat state to IR command translator.
//!
//! [`ClimateController`] owns the desired [`ThermostatState`] and an
//! exclusive handle to the transmit codec.  A state change is merged,
//! clamped, gated against the unit's louver axes, and then transmitted
//! twice with a fixed settle delay, because a single burst is often missed
//! by the indoor unit.
//!
//! ```text
//!  apply(req) ─▶ merge ─▶ changed? ─no─▶ (nothing)
//!                           │
//!                          yes
//!                           ▼
//!   power · mode · temp · fan · swing ─▶ send ─▶ 120 ms ─▶ send ─▶ publish
//! ```

use core::fmt;

use embedded_hal::delay::DelayNs;
use log::Level;

use crate::app::commands::StateChangeRequest;
use crate::app::events::ClimateEvent;
use crate::app::ports::{AcCodec, DiagnosticSink, EventSink};
use crate::config::ControllerConfig;

use super::codec::{CodecCapabilities, CodecMode};
use super::swing;
use super::{
    ClimateMode, DeviceCapabilities, FanSpeed, SwingMode, ThermostatState, TraitDescriptor,
    clamp_target_temperature,
};

/// Pause between the two identical bursts.
pub const SETTLE_DELAY_MS: u32 = 120;

/// What actually went out on the last transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentCommand {
    pub power: bool,
    pub mode: ClimateMode,
    /// Rounded and clamped set-point.
    pub temperature: u8,
    pub fan: FanSpeed,
    pub swing: SwingMode,
}

impl fmt::Display for SentCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "power={} mode={} temp={} fan={} swing={}",
            if self.power { "on" } else { "off" },
            self.mode,
            self.temperature,
            self.fan,
            self.swing,
        )
    }
}

// ───────────────────────────────────────────────────────────────
// ClimateController
// ───────────────────────────────────────────────────────────────

pub struct ClimateController<C, D, S> {
    codec: C,
    delay: D,
    diag: S,
    tx_pin: u8,
    device: DeviceCapabilities,
    /// Queried once from the codec at construction.
    codec_caps: CodecCapabilities,
    state: ThermostatState,
    last_command: Option<SentCommand>,
}

impl<C, D, S> ClimateController<C, D, S>
where
    C: AcCodec,
    D: DelayNs,
    S: DiagnosticSink,
{
    /// Construct with power-on defaults.  Call [`setup`](Self::setup) next.
    pub fn new(config: &ControllerConfig, codec: C, delay: D, diag: S) -> Self {
        let codec_caps = codec.capabilities();
        Self {
            codec,
            delay,
            diag,
            tx_pin: config.tx_pin,
            device: DeviceCapabilities::from(config),
            codec_caps,
            state: ThermostatState::default(),
            last_command: None,
        }
    }

    /// Replace the initial state (e.g. restored by the host framework).
    #[must_use]
    pub fn with_state(mut self, state: ThermostatState) -> Self {
        self.state = state;
        self
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Bring up the transmitter and publish the initial state.
    /// Nothing is transmitted.
    pub fn setup(&mut self, events: &mut impl EventSink) {
        self.codec.begin();
        self.report(Level::Info, &format!("Initialized on GPIO{}", self.tx_pin));
        events.emit(&ClimateEvent::Started { tx_pin: self.tx_pin });
        events.emit(&ClimateEvent::StatePublished(self.state));
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn traits(&self) -> TraitDescriptor {
        TraitDescriptor::for_capabilities(self.device)
    }

    pub fn state(&self) -> &ThermostatState {
        &self.state
    }

    /// Power flag of the current state.
    pub fn power_on(&self) -> bool {
        self.state.power
    }

    pub fn last_command(&self) -> Option<&SentCommand> {
        self.last_command.as_ref()
    }

    // ── Control ───────────────────────────────────────────────

    /// Merge `request` into the current state.  Transmits and publishes
    /// only when the merged state differs from the current one.
    ///
    /// Blocks for two transmissions plus [`SETTLE_DELAY_MS`].
    pub fn apply(&mut self, request: &StateChangeRequest, events: &mut impl EventSink) {
        let merged = request.merged_into(self.state);
        if merged == self.state {
            return;
        }
        self.state = merged;

        self.send_ir();
        events.emit(&ClimateEvent::StatePublished(self.state));
    }

    // ── Internal ──────────────────────────────────────────────

    fn send_ir(&mut self) {
        // Power
        let power = self.state.mode != ClimateMode::Off;
        self.state.power = power;
        self.codec.set_power(power);

        // Mode (the unit keeps its last mode while off)
        if power {
            self.codec.set_mode(CodecMode::from(self.state.mode));
        }

        // Temperature
        let temperature = clamp_target_temperature(self.state.target_temperature);
        self.codec.set_temperature(temperature);

        // Fan
        let fan = self.state.fan_speed.unwrap_or(FanSpeed::Auto);
        self.codec.set_fan(fan.into());

        // Swing
        self.apply_swing();

        self.codec.send();
        self.delay.delay_ms(SETTLE_DELAY_MS);
        self.codec.send();

        let sent = SentCommand {
            power,
            mode: self.state.mode,
            temperature,
            fan,
            swing: self.state.swing,
        };
        self.report(Level::Info, &format!("Send IR: {sent}"));
        self.last_command = Some(sent);
    }

    fn apply_swing(&mut self) {
        let plan = swing::plan(self.state.swing, self.device, self.codec_caps);

        if let Some(on) = plan.vertical {
            self.codec.set_vertical_swing(on);
        }
        if let Some(on) = plan.horizontal {
            self.codec.set_horizontal_swing(on);
        }
        if plan.horizontal_unavailable {
            self.report(
                Level::Warn,
                "Swing horizontal requested but this codec build cannot actuate horizontal swing",
            );
        }
    }

    fn report(&mut self, level: Level, message: &str) {
        self.diag.report(level, message);
    }
}
