//! One decoded capture, copied out of the codec per poll.

/// Largest device state any supported protocol encodes (bytes).
pub const STATE_SIZE_MAX: usize = 21;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFrame {
    /// Protocol name as the codec spells it (`SAMSUNG_AC`, `UNKNOWN`, ...).
    pub protocol_name: String,
    /// Frame is a repeat code rather than a fresh command.
    pub repeat: bool,
    pub bit_count: u16,
    pub state_bytes: heapless::Vec<u8, STATE_SIZE_MAX>,
    /// Human-readable summary, when the codec understands the protocol.
    pub description: Option<String>,
    /// Replayable source text for the raw timings.
    pub raw_replay_text: Option<String>,
}

impl DecodedFrame {
    pub fn new(protocol_name: impl Into<String>, bit_count: u16) -> Self {
        Self {
            protocol_name: protocol_name.into(),
            repeat: false,
            bit_count,
            state_bytes: heapless::Vec::new(),
            description: None,
            raw_replay_text: None,
        }
    }

    /// Copy in the state bytes; anything past [`STATE_SIZE_MAX`] is dropped.
    #[must_use]
    pub fn with_state(mut self, bytes: &[u8]) -> Self {
        let n = bytes.len().min(STATE_SIZE_MAX);
        self.state_bytes.clear();
        let _ = self.state_bytes.extend_from_slice(&bytes[..n]);
        self
    }

    #[must_use]
    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_raw_replay(mut self, text: impl Into<String>) -> Self {
        self.raw_replay_text = Some(text.into());
        self
    }

    /// State byte at `index`; bytes the codec did not fill read as zero.
    pub fn state_byte(&self, index: usize) -> u8 {
        self.state_bytes.get(index).copied().unwrap_or(0)
    }
}
