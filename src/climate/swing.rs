//! Swing capability gate.
//!
//! Decides, per transmission, which louver axes are written to the codec.
//! An axis the unit does not have is left untouched; an axis the unit has is
//! always written, so "off" is sent explicitly.

use super::codec::CodecCapabilities;
use super::{DeviceCapabilities, SwingMode};

/// Per-axis actuation plan.  `None` means "do not touch this axis".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwingActuation {
    pub vertical: Option<bool>,
    pub horizontal: Option<bool>,
    /// Horizontal swing was requested on a unit that has it, but the codec
    /// build cannot actuate it.
    pub horizontal_unavailable: bool,
}

pub fn plan(swing: SwingMode, device: DeviceCapabilities, codec: CodecCapabilities) -> SwingActuation {
    let want_v = swing.wants_vertical();
    let want_h = swing.wants_horizontal();

    let vertical = device.supports_vertical_swing.then_some(want_v);

    let (horizontal, horizontal_unavailable) = if !device.supports_horizontal_swing {
        (None, false)
    } else if codec.supports_horizontal_swing_actuation {
        (Some(want_h), false)
    } else {
        (None, want_h)
    };

    SwingActuation {
        vertical,
        horizontal,
        horizontal_unavailable,
    }
}
