//! Inter-task communication channels
//!
//! All three signals are latest-wins: the controller broadcasts faster than
//! the node consumes, the panel only ever shows the newest frame, and a
//! stale time report is worthless. No queueing anywhere.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use heapless::Vec;

use pitclock_core::render::TimeFrame;
use pitclock_protocol::frame::MAX_PAYLOAD_LEN;

/// Latest raw status payload forwarded by the radio co-processor.
///
/// The timer task polls this with `try_take`, which reproduces the
/// "read the last received packet, or nothing" radio semantics.
pub static STATUS_PAYLOAD: Signal<CriticalSectionRawMutex, Vec<u8, MAX_PAYLOAD_LEN>> =
    Signal::new();

/// Latest frame to draw on the matrix panel
pub static PANEL_FRAME: Signal<CriticalSectionRawMutex, TimeFrame> = Signal::new();

/// Remaining seconds to broadcast as a legacy time report
pub static TIME_REPORT: Signal<CriticalSectionRawMutex, u32> = Signal::new();
