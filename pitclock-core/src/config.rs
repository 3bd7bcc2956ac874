//! Node configuration
//!
//! These are build-time constants in spirit: the node has no UI of its own,
//! so the firmware constructs one of these at boot and never changes it.

/// Configuration for a timer display node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerConfig {
    /// Full match length in seconds; the value shown at reset
    pub timer_length_s: u32,
    /// Blink the colon off on odd seconds
    pub blink: bool,
    /// Broadcast the legacy one-byte time report each local tick
    pub broadcast_time: bool,
}

impl TimerConfig {
    /// Standard 3-minute match, blinking colon, no legacy broadcast
    pub const fn new() -> Self {
        Self {
            timer_length_s: 180,
            blink: true,
            broadcast_time: false,
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::new()
    }
}
