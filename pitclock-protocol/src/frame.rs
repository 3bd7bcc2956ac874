//! Link framing shared by the radio and panel UARTs.
//!
//! A frame is `START | LENGTH | KIND | PAYLOAD | CHECKSUM` where the
//! checksum is the XOR of LENGTH, KIND, and every payload byte. The reader
//! resynchronizes on the next START byte after garbage or a failed
//! checksum, so a hot-plugged or glitching link recovers on its own.

use heapless::Vec;

/// Frame synchronization byte
pub const FRAME_START: u8 = 0xC3;

/// Maximum payload length in bytes
///
/// Both links carry short messages only (the largest is a panel text
/// command), so the cap is deliberately tight.
pub const MAX_PAYLOAD_LEN: usize = 32;

/// Maximum encoded frame size (START + LENGTH + KIND + payload + CHECKSUM)
pub const MAX_FRAME_LEN: usize = 4 + MAX_PAYLOAD_LEN;

/// Errors raised while encoding or reading frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// Payload exceeds [`MAX_PAYLOAD_LEN`]
    Oversize,
    /// Checksum did not match the frame contents
    BadChecksum,
    /// Declared length exceeds [`MAX_PAYLOAD_LEN`]
    BadLength,
    /// Destination buffer too small for the encoded frame
    BufferTooSmall,
    /// Frame payload has the wrong shape for its KIND
    Malformed,
}

/// A complete link frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkFrame {
    /// Message kind identifier
    pub kind: u8,
    /// Message payload
    pub payload: Vec<u8, MAX_PAYLOAD_LEN>,
}

impl LinkFrame {
    /// Build a frame from a kind and payload slice
    pub fn new(kind: u8, payload: &[u8]) -> Result<Self, LinkError> {
        let mut buf = Vec::new();
        buf.extend_from_slice(payload)
            .map_err(|_| LinkError::Oversize)?;
        Ok(Self { kind, payload: buf })
    }

    /// Build a payload-less frame
    pub fn bare(kind: u8) -> Self {
        Self {
            kind,
            payload: Vec::new(),
        }
    }

    fn checksum(length: u8, kind: u8, payload: &[u8]) -> u8 {
        payload.iter().fold(length ^ kind, |acc, b| acc ^ b)
    }

    /// Encode into `out`, returning the number of bytes written
    pub fn encode(&self, out: &mut [u8]) -> Result<usize, LinkError> {
        let total = 4 + self.payload.len();
        if out.len() < total {
            return Err(LinkError::BufferTooSmall);
        }

        let length = self.payload.len() as u8;
        out[0] = FRAME_START;
        out[1] = length;
        out[2] = self.kind;
        out[3..3 + self.payload.len()].copy_from_slice(&self.payload);
        out[total - 1] = Self::checksum(length, self.kind, &self.payload);

        Ok(total)
    }

    /// Encode into an owned buffer
    pub fn encode_vec(&self) -> Result<Vec<u8, MAX_FRAME_LEN>, LinkError> {
        let mut buf = [0u8; MAX_FRAME_LEN];
        let n = self.encode(&mut buf)?;
        let mut out = Vec::new();
        out.extend_from_slice(&buf[..n])
            .map_err(|_| LinkError::BufferTooSmall)?;
        Ok(out)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadState {
    Sync,
    Length,
    Kind,
    Payload,
    Checksum,
}

/// Incremental frame reader
///
/// Feed bytes as they arrive; a complete, checksum-valid frame is returned
/// from the call that consumed its final byte.
#[derive(Debug, Clone)]
pub struct FrameReader {
    state: ReadState,
    kind: u8,
    expected: u8,
    payload: Vec<u8, MAX_PAYLOAD_LEN>,
}

impl FrameReader {
    pub fn new() -> Self {
        Self {
            state: ReadState::Sync,
            kind: 0,
            expected: 0,
            payload: Vec::new(),
        }
    }

    /// Drop any partial frame and hunt for the next START byte
    pub fn resync(&mut self) {
        self.state = ReadState::Sync;
        self.kind = 0;
        self.expected = 0;
        self.payload.clear();
    }

    /// Consume one byte
    pub fn feed(&mut self, byte: u8) -> Result<Option<LinkFrame>, LinkError> {
        match self.state {
            ReadState::Sync => {
                // Non-START bytes are inter-frame noise; skip silently
                if byte == FRAME_START {
                    self.state = ReadState::Length;
                }
                Ok(None)
            }
            ReadState::Length => {
                if byte as usize > MAX_PAYLOAD_LEN {
                    self.resync();
                    return Err(LinkError::BadLength);
                }
                self.expected = byte;
                self.state = ReadState::Kind;
                Ok(None)
            }
            ReadState::Kind => {
                self.kind = byte;
                self.payload.clear();
                self.state = if self.expected == 0 {
                    ReadState::Checksum
                } else {
                    ReadState::Payload
                };
                Ok(None)
            }
            ReadState::Payload => {
                // Push cannot fail: expected <= MAX_PAYLOAD_LEN
                let _ = self.payload.push(byte);
                if self.payload.len() == self.expected as usize {
                    self.state = ReadState::Checksum;
                }
                Ok(None)
            }
            ReadState::Checksum => {
                let want = LinkFrame::checksum(self.expected, self.kind, &self.payload);
                if byte != want {
                    self.resync();
                    return Err(LinkError::BadChecksum);
                }
                let frame = LinkFrame {
                    kind: self.kind,
                    payload: self.payload.clone(),
                };
                self.resync();
                Ok(Some(frame))
            }
        }
    }

    /// Consume a slice, returning the first complete frame found
    pub fn feed_slice(&mut self, bytes: &[u8]) -> Result<Option<LinkFrame>, LinkError> {
        for &byte in bytes {
            if let Some(frame) = self.feed(byte)? {
                return Ok(Some(frame));
            }
        }
        Ok(None)
    }
}

impl Default for FrameReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_bare_frame() {
        let frame = LinkFrame::bare(0x20);
        let mut buf = [0u8; 8];
        let n = frame.encode(&mut buf).unwrap();

        assert_eq!(n, 4);
        assert_eq!(buf[0], FRAME_START);
        assert_eq!(buf[1], 0);
        assert_eq!(buf[2], 0x20);
        assert_eq!(buf[3], 0x20); // 0 ^ 0x20
    }

    #[test]
    fn roundtrip_through_reader() {
        let original = LinkFrame::new(0x01, &[4, 0, 0, 0, 0xD0, 0x07, 0, 0]).unwrap();
        let encoded = original.encode_vec().unwrap();

        let mut reader = FrameReader::new();
        let parsed = reader.feed_slice(&encoded).unwrap().unwrap();

        assert_eq!(parsed, original);
    }

    #[test]
    fn reader_rejects_bad_checksum() {
        let frame = LinkFrame::new(0x01, &[1, 2, 3]).unwrap();
        let mut encoded = frame.encode_vec().unwrap();
        let last = encoded.len() - 1;
        encoded[last] ^= 0x55;

        let mut reader = FrameReader::new();
        assert_eq!(reader.feed_slice(&encoded), Err(LinkError::BadChecksum));

        // Reader recovers: the same frame sent again parses cleanly
        let resent = frame.encode_vec().unwrap();
        let parsed = reader.feed_slice(&resent).unwrap().unwrap();
        assert_eq!(parsed, frame);
    }

    #[test]
    fn reader_skips_leading_noise() {
        let frame = LinkFrame::bare(0x22);
        let mut stream = Vec::<u8, 16>::new();
        stream.extend_from_slice(&[0x00, 0x7F, 0xFF]).unwrap();
        stream.extend_from_slice(&frame.encode_vec().unwrap()).unwrap();

        let mut reader = FrameReader::new();
        let parsed = reader.feed_slice(&stream).unwrap().unwrap();
        assert_eq!(parsed.kind, 0x22);
    }

    #[test]
    fn reader_rejects_oversize_length() {
        let mut reader = FrameReader::new();
        reader.feed(FRAME_START).unwrap();
        assert_eq!(
            reader.feed(MAX_PAYLOAD_LEN as u8 + 1),
            Err(LinkError::BadLength)
        );
    }

    #[test]
    fn oversize_payload_refused_at_build() {
        let too_big = [0u8; MAX_PAYLOAD_LEN + 1];
        assert_eq!(LinkFrame::new(0x01, &too_big), Err(LinkError::Oversize));
    }
}
