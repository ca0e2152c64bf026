//! Text views of a decoded frame.
//!
//! The line formats are stable: log-scraping tools match on the fixed-width
//! prefixes.
//!
//! ```text
//! Protocol  : SAMSUNG_AC
//! Code      : 0x0292... (112 Bits)
//! uint8_t state[14] = {0x02, 0x92, ...};
//! Mesg Desc.: Model: 1, Power: On, Mode: 1 (Cool), ...
//! ```

use core::fmt::Write;

use super::frame::{DecodedFrame, STATE_SIZE_MAX};

/// Capacity of the hex view: two characters per byte.
pub const HEX_CAPACITY: usize = STATE_SIZE_MAX * 2;
/// Capacity of the array literal view, sized for a full 21-byte state.
pub const ARRAY_CAPACITY: usize = 160;

pub type HexString = heapless::String<HEX_CAPACITY>;
pub type ArrayLiteral = heapless::String<ARRAY_CAPACITY>;

/// Which optional views to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportViews {
    pub hex: bool,
    pub byte_array: bool,
    pub description: bool,
    pub raw_replay: bool,
}

impl Default for ReportViews {
    fn default() -> Self {
        Self {
            hex: true,
            byte_array: true,
            description: true,
            raw_replay: true,
        }
    }
}

/// Bytes needed to hold `bit_count` bits, capped at [`STATE_SIZE_MAX`].
pub fn state_byte_len(bit_count: u16) -> usize {
    usize::from(bit_count).div_ceil(8).min(STATE_SIZE_MAX)
}

/// Uppercase hex of the first `nbytes` state bytes, no prefix.
pub fn format_state_hex(frame: &DecodedFrame, nbytes: usize) -> HexString {
    let mut hex = HexString::new();
    for i in 0..nbytes.min(STATE_SIZE_MAX) {
        let _ = write!(hex, "{:02X}", frame.state_byte(i));
    }
    hex
}

/// `uint8_t state[n] = {0x.., 0x..};`
pub fn format_state_array(frame: &DecodedFrame, nbytes: usize) -> ArrayLiteral {
    let nbytes = nbytes.min(STATE_SIZE_MAX);
    let mut out = ArrayLiteral::new();
    let _ = write!(out, "uint8_t state[{nbytes}] = {{");
    for i in 0..nbytes {
        if i > 0 {
            let _ = out.push_str(", ");
        }
        let _ = write!(out, "0x{:02X}", frame.state_byte(i));
    }
    let _ = out.push_str("};");
    out
}

pub fn protocol_line(frame: &DecodedFrame) -> String {
    if frame.repeat {
        format!("Protocol  : {}, Repeat", frame.protocol_name)
    } else {
        format!("Protocol  : {}", frame.protocol_name)
    }
}

/// Render every enabled view, one entry per log line.  Empty optional
/// views are skipped.
pub fn render(frame: &DecodedFrame, views: ReportViews) -> Vec<String> {
    let mut lines = Vec::with_capacity(5);
    lines.push(protocol_line(frame));

    if frame.bit_count > 0 {
        let nbytes = state_byte_len(frame.bit_count);
        if views.hex {
            let hex = format_state_hex(frame, nbytes);
            lines.push(format!("Code      : 0x{} ({} Bits)", hex, frame.bit_count));
        }
        if views.byte_array {
            lines.push(format_state_array(frame, nbytes).as_str().to_owned());
        }
    }

    if views.description {
        if let Some(desc) = frame.description.as_deref().filter(|d| !d.is_empty()) {
            lines.push(format!("Mesg Desc.: {desc}"));
        }
    }

    if views.raw_replay {
        if let Some(raw) = frame.raw_replay_text.as_deref().filter(|r| !r.is_empty()) {
            lines.push(raw.to_owned());
        }
    }

    lines
}
