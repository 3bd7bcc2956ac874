//! Panel link messages.
//!
//! The RGB matrix driver board is a dumb peripheral: it owns the pixel
//! buffer, the bitmap font, and horizontal centering (glyph widths vary by
//! font, so only the board can center text). The node just tells it what to
//! show and in which color.

use crate::frame::{LinkError, LinkFrame};
use heapless::String;

// Message kind IDs: node -> panel
pub const MSG_CLEAR: u8 = 0x20;
pub const MSG_TEXT: u8 = 0x21;
pub const MSG_COLOR: u8 = 0x22;

/// Longest text the panel accepts ("MM:SS" plus headroom)
pub const MAX_TEXT_LEN: usize = 8;

/// Commands sent to the matrix driver board
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelMessage {
    /// Blank the panel
    Clear,
    /// Replace the displayed text (panel recenters on every change)
    Text(String<MAX_TEXT_LEN>),
    /// Set the text color as RGB888
    Color([u8; 3]),
}

impl PanelMessage {
    /// Build a text command, truncating to [`MAX_TEXT_LEN`]
    pub fn text(text: &str) -> Self {
        let mut buf = String::new();
        // Push per char so truncation always lands on a UTF-8 boundary
        for c in text.chars() {
            if buf.push(c).is_err() {
                break;
            }
        }
        PanelMessage::Text(buf)
    }

    /// Encode this command into a link frame
    pub fn to_frame(&self) -> Result<LinkFrame, LinkError> {
        match self {
            PanelMessage::Clear => Ok(LinkFrame::bare(MSG_CLEAR)),
            PanelMessage::Text(text) => LinkFrame::new(MSG_TEXT, text.as_bytes()),
            PanelMessage::Color(rgb) => LinkFrame::new(MSG_COLOR, rgb),
        }
    }

    /// Parse a command from a link frame (panel side, and tests)
    pub fn from_frame(frame: &LinkFrame) -> Result<Self, LinkError> {
        match frame.kind {
            MSG_CLEAR => Ok(PanelMessage::Clear),
            MSG_TEXT => {
                let text =
                    core::str::from_utf8(&frame.payload).map_err(|_| LinkError::Malformed)?;
                if text.len() > MAX_TEXT_LEN {
                    return Err(LinkError::Malformed);
                }
                Ok(PanelMessage::text(text))
            }
            MSG_COLOR => {
                let rgb: [u8; 3] = frame
                    .payload
                    .as_slice()
                    .try_into()
                    .map_err(|_| LinkError::Malformed)?;
                Ok(PanelMessage::Color(rgb))
            }
            _ => Err(LinkError::Malformed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_is_bare_frame() {
        let frame = PanelMessage::Clear.to_frame().unwrap();
        assert_eq!(frame.kind, MSG_CLEAR);
        assert!(frame.payload.is_empty());
    }

    #[test]
    fn text_roundtrip() {
        let msg = PanelMessage::text("02:59");
        let frame = msg.to_frame().unwrap();
        assert_eq!(frame.kind, MSG_TEXT);
        assert_eq!(frame.payload.as_slice(), b"02:59");
        assert_eq!(PanelMessage::from_frame(&frame).unwrap(), msg);
    }

    #[test]
    fn color_roundtrip() {
        let msg = PanelMessage::Color([0xFF, 0x8C, 0x00]);
        let frame = msg.to_frame().unwrap();
        assert_eq!(PanelMessage::from_frame(&frame).unwrap(), msg);
    }

    #[test]
    fn text_truncates_to_capacity() {
        let PanelMessage::Text(text) = PanelMessage::text("00:00 OVER") else {
            panic!("expected a text command");
        };
        assert_eq!(text.as_str(), "00:00 OV");
    }

    #[test]
    fn text_truncates_on_char_boundary() {
        // Three euro signs are 9 bytes; only two fit, and the cut must not
        // split the third one
        let PanelMessage::Text(text) = PanelMessage::text("€€€") else {
            panic!("expected a text command");
        };
        assert_eq!(text.as_str(), "€€");
    }

    #[test]
    fn bad_color_payload_rejected() {
        let frame = LinkFrame::new(MSG_COLOR, &[1, 2]).unwrap();
        assert_eq!(PanelMessage::from_frame(&frame), Err(LinkError::Malformed));
    }

    #[test]
    fn unknown_kind_rejected() {
        let frame = LinkFrame::bare(0x7E);
        assert_eq!(PanelMessage::from_frame(&frame), Err(LinkError::Malformed));
    }
}
