//! Passive IR frame sniffer for reverse-engineering remotes.
//!
//! Listens on the receiver pin, decodes every completed burst through the
//! [`CaptureChannel`] port and reports it as a handful of log lines.
//!
//! ```text
//!                configure()
//!  Uninitialized ───────────▶ Listening ──┐
//!                                 ▲       │ poll(): decode ─▶ rate limit ─▶ report
//!                                 └───────┘          └──────── resume ◀────────┘
//! ```
//!
//! Reports are rate-limited; captures never are.  The capture buffer is
//! released after every decoded frame whether or not it was reported.

pub mod frame;
pub mod report;

use log::Level;

use crate::app::ports::{CaptureChannel, Clock, DiagnosticSink};
use crate::config::SnifferConfig;

pub use frame::{DecodedFrame, STATE_SIZE_MAX};
pub use report::ReportViews;

// ---------------------------------------------------------------------------
// Capture parameters
// ---------------------------------------------------------------------------

/// Library default capture buffer depth (pulse entries).
pub const DEFAULT_BUFFER_DEPTH: u16 = 1024;
/// Library default end-of-frame gap (milliseconds).
pub const DEFAULT_IDLE_TIMEOUT_MS: u8 = 50;
/// Library default pulse timing tolerance (percent).
pub const DEFAULT_TOLERANCE_PERCENT: u8 = 25;
/// Library default shortest reportable UNKNOWN run.
pub const DEFAULT_MIN_UNKNOWN_RUN_LENGTH: u16 = 6;

/// Capture overrides as configured.  `0` keeps the library default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureConfig {
    pub buffer_depth: u16,
    pub idle_timeout_ms: u16,
    pub timing_tolerance_percent: u8,
    pub min_unknown_run_length: u16,
}

impl From<&SnifferConfig> for CaptureConfig {
    fn from(config: &SnifferConfig) -> Self {
        Self {
            buffer_depth: config.buffer_depth,
            idle_timeout_ms: config.idle_timeout_ms,
            timing_tolerance_percent: config.timing_tolerance_percent,
            min_unknown_run_length: config.min_unknown_run_length,
        }
    }
}

/// Fully resolved parameters handed to the capture channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureParams {
    pub buffer_depth: u16,
    /// The capture primitive stores the timeout in a byte.
    pub idle_timeout_ms: u8,
    pub timing_tolerance_percent: u8,
    pub min_unknown_run_length: u16,
}

impl CaptureParams {
    pub fn resolve(config: &CaptureConfig) -> Self {
        let idle_timeout_ms = match config.idle_timeout_ms {
            0 => DEFAULT_IDLE_TIMEOUT_MS,
            ms => ms.min(u16::from(u8::MAX)) as u8,
        };
        Self {
            buffer_depth: nonzero_or(config.buffer_depth, DEFAULT_BUFFER_DEPTH),
            idle_timeout_ms,
            timing_tolerance_percent: nonzero_or(
                config.timing_tolerance_percent,
                DEFAULT_TOLERANCE_PERCENT,
            ),
            min_unknown_run_length: nonzero_or(
                config.min_unknown_run_length,
                DEFAULT_MIN_UNKNOWN_RUN_LENGTH,
            ),
        }
    }
}

fn nonzero_or<T: PartialEq + Default>(value: T, default: T) -> T {
    if value == T::default() { default } else { value }
}

// ---------------------------------------------------------------------------
// Report policy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPolicy {
    pub rate_limit_ms: u32,
    /// Unset until the first report rather than zero at boot, so a capture
    /// inside the first `rate_limit_ms` of uptime is still reported.
    pub last_report_ms: Option<u64>,
    pub views: ReportViews,
}

impl ReportPolicy {
    pub fn from_config(config: &SnifferConfig) -> Self {
        Self {
            rate_limit_ms: config.rate_limit_ms,
            last_report_ms: None,
            views: ReportViews {
                hex: config.dump_hex,
                byte_array: config.dump_byte_array,
                description: config.dump_description,
                raw_replay: config.dump_raw_replay,
            },
        }
    }

    /// Whether a report at `now_ms` clears the rate limit.
    pub fn window_open(&self, now_ms: u64) -> bool {
        match self.last_report_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= u64::from(self.rate_limit_ms),
        }
    }
}

// ---------------------------------------------------------------------------
// Sniffer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnifferState {
    Uninitialized,
    Listening,
}

/// Result of one [`Sniffer::poll`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    NotListening,
    NoCapture,
    Reported,
    /// Decoded and released, but inside the rate-limit window.
    Suppressed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnifferStats {
    pub captures: u32,
    pub reports: u32,
    pub suppressed: u32,
}

pub struct Sniffer<C, K, S> {
    channel: C,
    clock: K,
    diag: S,
    rx_pin: u8,
    state: SnifferState,
    params: Option<CaptureParams>,
    policy: ReportPolicy,
    stats: SnifferStats,
}

impl<C, K, S> Sniffer<C, K, S>
where
    C: CaptureChannel,
    K: Clock,
    S: DiagnosticSink,
{
    pub fn new(config: &SnifferConfig, channel: C, clock: K, diag: S) -> Self {
        Self {
            channel,
            clock,
            diag,
            rx_pin: config.rx_pin,
            state: SnifferState::Uninitialized,
            params: None,
            policy: ReportPolicy::from_config(config),
            stats: SnifferStats::default(),
        }
    }

    /// Resolve the capture parameters and start listening.
    ///
    /// Meant to be called once at boot; later calls leave the running
    /// channel untouched.
    pub fn configure(&mut self, capture: &CaptureConfig) {
        if self.state == SnifferState::Listening {
            self.diag
                .report(Level::Debug, "configure() ignored: already listening");
            return;
        }

        let params = CaptureParams::resolve(capture);
        self.channel.start(self.rx_pin, &params);
        self.params = Some(params);
        self.state = SnifferState::Listening;

        self.diag.report(
            Level::Info,
            &format!("IR sniffer listening on GPIO{}", self.rx_pin),
        );
        self.diag.report(
            Level::Debug,
            &format!(
                "capture: buffer={} timeout={}ms tolerance={}% min_unknown={}",
                params.buffer_depth,
                params.idle_timeout_ms,
                params.timing_tolerance_percent,
                params.min_unknown_run_length,
            ),
        );
    }

    /// One non-blocking capture check.
    pub fn poll(&mut self) -> PollOutcome {
        if self.state != SnifferState::Listening {
            return PollOutcome::NotListening;
        }

        let Some(frame) = self.channel.try_decode() else {
            return PollOutcome::NoCapture;
        };
        self.stats.captures = self.stats.captures.wrapping_add(1);

        let now = self.clock.now_ms();
        let outcome = if self.policy.window_open(now) {
            for line in self.render_report(&frame) {
                self.diag.report(Level::Info, &line);
            }
            self.policy.last_report_ms = Some(now);
            self.stats.reports = self.stats.reports.wrapping_add(1);
            PollOutcome::Reported
        } else {
            self.stats.suppressed = self.stats.suppressed.wrapping_add(1);
            PollOutcome::Suppressed
        };

        self.channel.resume();
        outcome
    }

    /// Report lines for `frame` under this sniffer's view flags.
    pub fn render_report(&self, frame: &DecodedFrame) -> Vec<String> {
        report::render(frame, self.policy.views)
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> SnifferState {
        self.state
    }

    /// Resolved parameters, once listening.
    pub fn capture_params(&self) -> Option<&CaptureParams> {
        self.params.as_ref()
    }

    pub fn policy(&self) -> &ReportPolicy {
        &self.policy
    }

    pub fn stats(&self) -> SnifferStats {
        self.stats
    }
}
