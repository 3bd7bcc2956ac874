//! Radio UART receive task
//!
//! The ESP-NOW co-processor forwards every controller payload it hears as a
//! status frame. Only complete, checksum-valid frames reach the timer task.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use pitclock_protocol::frame::FrameReader;
use pitclock_protocol::packet::MSG_STATUS;

use crate::channels::STATUS_PAYLOAD;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Radio RX task - receives and reframes co-processor traffic
#[embassy_executor::task]
pub async fn radio_rx_task(mut rx: BufferedUartRx) {
    info!("Radio RX task started");

    let mut reader = FrameReader::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("Radio RX: {} bytes", n);

                for &byte in &buf[..n] {
                    match reader.feed(byte) {
                        Ok(Some(frame)) if frame.kind == MSG_STATUS => {
                            // Latest packet wins; the timer task polls it
                            STATUS_PAYLOAD.signal(frame.payload);
                        }
                        Ok(Some(frame)) => {
                            warn!("Unexpected radio frame kind {=u8:#x}", frame.kind);
                        }
                        Ok(None) => {
                            // Need more bytes
                        }
                        Err(e) => {
                            // Reader resyncs on its own; nothing to recover
                            warn!("Radio frame error: {:?}", e);
                        }
                    }
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("Radio UART read error: {:?}", e);
            }
        }
    }
}
