//! Arena controller status packet.
//!
//! The controller is an ESP32 broadcasting this C struct over ESP-NOW:
//!
//! ```text
//! typedef struct struct_message {
//!   int systemState; // match state, low byte significant
//!   int systemTime;  // remaining time in milliseconds
//! } struct_message;
//! ```
//!
//! On the wire that is 8 bytes: byte 0 carries the match state, bytes 1-3
//! are the unused high bytes of the state word, and bytes 4-7 carry the
//! millisecond count as a little-endian u32. The time word is rebuilt by
//! explicit shifts from index 7 down to index 4; the shift order is part of
//! the contract with the sender's struct layout, not an implementation
//! detail.

/// Fixed status payload length in bytes
pub const STATUS_PACKET_LEN: usize = 8;

/// Radio frame kind: co-processor forwards a controller status payload
pub const MSG_STATUS: u8 = 0x01;

/// Radio frame kind: node broadcasts a legacy time report
pub const MSG_TIME_REPORT: u8 = 0x02;

/// Match phase broadcast by the arena controller.
///
/// Wire values 0-11 map to the first twelve variants; anything else (and a
/// missing packet) is `NoSignal`. The timer holds its last run/pause state
/// on `NoSignal` rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MatchState {
    Idle,
    LoadIn,
    ReadyForBattle,
    Countdown,
    Match,
    OneMinuteWarning,
    TenSecondWarning,
    MatchEnd,
    KoConfirm,
    KoTapOut,
    EStop,
    Pause,
    /// Unrecognized state byte or no packet received
    NoSignal,
}

impl MatchState {
    /// Map a raw wire byte to a match state
    pub fn from_wire(byte: u8) -> Self {
        match byte {
            0 => MatchState::Idle,
            1 => MatchState::LoadIn,
            2 => MatchState::ReadyForBattle,
            3 => MatchState::Countdown,
            4 => MatchState::Match,
            5 => MatchState::OneMinuteWarning,
            6 => MatchState::TenSecondWarning,
            7 => MatchState::MatchEnd,
            8 => MatchState::KoConfirm,
            9 => MatchState::KoTapOut,
            10 => MatchState::EStop,
            11 => MatchState::Pause,
            _ => MatchState::NoSignal,
        }
    }
}

/// A decoded controller status packet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusPacket {
    /// Broadcast match phase
    pub state: MatchState,
    /// Remaining match time in milliseconds
    pub remaining_ms: u32,
}

/// Outcome of polling the radio link for a status packet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeResult {
    /// Nothing received since the last poll; expected steady state
    NoData,
    /// Payload too short; discard and keep the previous timer state
    Malformed,
    /// A well-formed status packet
    Decoded(StatusPacket),
}

impl DecodeResult {
    /// Decode the result of a non-blocking link poll
    pub fn from_poll(raw: Option<&[u8]>) -> Self {
        match raw {
            None => DecodeResult::NoData,
            Some(bytes) => StatusPacket::decode(bytes),
        }
    }
}

impl StatusPacket {
    /// Decode a raw status payload
    ///
    /// Extra trailing bytes are tolerated (the sender pads its struct);
    /// anything shorter than [`STATUS_PACKET_LEN`] is `Malformed`.
    pub fn decode(raw: &[u8]) -> DecodeResult {
        if raw.len() < STATUS_PACKET_LEN {
            return DecodeResult::Malformed;
        }

        let remaining_ms = (raw[7] as u32) << 24
            | (raw[6] as u32) << 16
            | (raw[5] as u32) << 8
            | raw[4] as u32;

        DecodeResult::Decoded(StatusPacket {
            state: MatchState::from_wire(raw[0]),
            remaining_ms,
        })
    }

    /// Remaining whole seconds, rounded to nearest
    ///
    /// Integer arithmetic only, so the result is bit-exact on every target:
    /// 499 ms -> 0, 500 ms -> 1, 1499 ms -> 1, 1500 ms -> 2.
    pub fn remaining_seconds(&self) -> u32 {
        ((self.remaining_ms as u64 + 500) / 1000) as u32
    }
}

/// Encode the legacy outbound time report.
///
/// The historical controller protocol put the remaining whole seconds in a
/// single byte at index 4, zero elsewhere. It is not symmetric with the
/// inbound millisecond layout; the shape is inherited and kept only for
/// peers that still listen for it. Values above 255 s saturate.
pub fn encode_time_report(remaining_s: u32) -> [u8; STATUS_PACKET_LEN] {
    let mut out = [0u8; STATUS_PACKET_LEN];
    out[4] = remaining_s.min(u8::MAX as u32) as u8;
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn decode_match_packet() {
        // state = 4 (Match), time = 2000 ms little-endian at bytes 4-7
        let raw = [4, 0, 0, 0, 0xD0, 0x07, 0x00, 0x00];
        let DecodeResult::Decoded(pkt) = StatusPacket::decode(&raw) else {
            panic!("expected a decoded packet");
        };

        assert_eq!(pkt.state, MatchState::Match);
        assert_eq!(pkt.remaining_ms, 2000);
        assert_eq!(pkt.remaining_seconds(), 2);
    }

    #[test]
    fn rounding_boundaries() {
        for (ms, s) in [
            (0u32, 0u32),
            (499, 0),
            (500, 1),
            (999, 1),
            (1000, 1),
            (1499, 1),
            (1500, 2),
        ] {
            let pkt = StatusPacket {
                state: MatchState::Match,
                remaining_ms: ms,
            };
            assert_eq!(pkt.remaining_seconds(), s, "{} ms", ms);
        }
    }

    #[test]
    fn rounding_never_overflows() {
        let pkt = StatusPacket {
            state: MatchState::Match,
            remaining_ms: u32::MAX,
        };
        // (2^32 - 1 + 500) / 1000, computed in u64 so the +500 cannot wrap
        assert_eq!(pkt.remaining_seconds(), 4_294_967);
    }

    #[test]
    fn short_payload_is_malformed() {
        assert_eq!(StatusPacket::decode(&[]), DecodeResult::Malformed);
        assert_eq!(StatusPacket::decode(&[4, 0, 0, 0, 0xD0, 0x07, 0x00]), DecodeResult::Malformed);
    }

    #[test]
    fn missing_poll_is_no_data() {
        assert_eq!(DecodeResult::from_poll(None), DecodeResult::NoData);
    }

    #[test]
    fn unknown_state_byte_maps_to_no_signal() {
        let raw = [12, 0, 0, 0, 0, 0, 0, 0];
        let DecodeResult::Decoded(pkt) = StatusPacket::decode(&raw) else {
            panic!("expected a decoded packet");
        };
        assert_eq!(pkt.state, MatchState::NoSignal);

        assert_eq!(MatchState::from_wire(0xFF), MatchState::NoSignal);
    }

    #[test]
    fn all_known_states_map() {
        use MatchState::*;
        let expect = [
            Idle, LoadIn, ReadyForBattle, Countdown, Match, OneMinuteWarning,
            TenSecondWarning, MatchEnd, KoConfirm, KoTapOut, EStop, Pause,
        ];
        for (byte, state) in expect.iter().enumerate() {
            assert_eq!(MatchState::from_wire(byte as u8), *state);
        }
    }

    #[test]
    fn legacy_report_shape() {
        assert_eq!(encode_time_report(42), [0, 0, 0, 0, 42, 0, 0, 0]);
        // Saturates rather than wrapping
        assert_eq!(encode_time_report(1000)[4], 255);
    }

    proptest! {
        /// Byte-shift reconstruction round-trips every 32-bit time value
        #[test]
        fn time_word_roundtrip(ms: u32) {
            let le = ms.to_le_bytes();
            let raw = [4, 0, 0, 0, le[0], le[1], le[2], le[3]];
            let DecodeResult::Decoded(pkt) = StatusPacket::decode(&raw) else {
                panic!("expected a decoded packet");
            };
            prop_assert_eq!(pkt.remaining_ms, ms);
        }
    }
}
