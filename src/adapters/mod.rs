//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements       | Connects to                 |
//! |------------|------------------|-----------------------------|
//! | `delay`    | DelayNs          | FreeRTOS delay / thread sleep |
//! | `log_sink` | DiagnosticSink   | Serial log output           |
//! |            | EventSink        |                             |
//! | `time`     | Clock            | ESP32 system timer          |
//!
//! The IR codec itself ([`AcCodec`](crate::app::ports::AcCodec) and
//! [`CaptureChannel`](crate::app::ports::CaptureChannel)) is provided by
//! the host firmware that links this crate.

pub mod delay;
pub mod log_sink;
pub mod time;
