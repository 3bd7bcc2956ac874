//! Wire formats for the Pitclock match timer node
//!
//! The timer node sits between two serial links:
//!
//! - **Radio link** (UART0): an ESP-NOW co-processor forwards each received
//!   arena-controller payload to the node, and optionally broadcasts a legacy
//!   time report back out.
//! - **Panel link** (UART1): the node drives a dumb RGB matrix driver board
//!   that only knows how to clear, set a text color, and draw centered text.
//!
//! Both links carry the same byte-oriented framing:
//! ```text
//! ┌───────┬────────┬──────┬─────────────┬──────────┐
//! │ START │ LENGTH │ KIND │ PAYLOAD     │ CHECKSUM │
//! │ 1B    │ 1B     │ 1B   │ 0–32B       │ 1B       │
//! └───────┴────────┴──────┴─────────────┴──────────┘
//! ```
//!
//! Inside a radio frame, the arena controller's 8-byte status payload keeps
//! the exact layout of the sender's C struct (see [`packet`]).

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod frame;
pub mod packet;
pub mod panel;

pub use frame::{FrameReader, LinkError, LinkFrame, FRAME_START, MAX_PAYLOAD_LEN};
pub use packet::{DecodeResult, MatchState, StatusPacket, STATUS_PACKET_LEN};
pub use panel::PanelMessage;
