//! Radio UART transmit task
//!
//! Broadcasts the legacy one-byte time report through the co-processor.
//! Off by default (`TimerConfig::broadcast_time`); the inherited protocol
//! is asymmetric with the inbound millisecond layout and only kept for
//! peers that still listen for it.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use pitclock_protocol::frame::LinkFrame;
use pitclock_protocol::packet::{encode_time_report, MSG_TIME_REPORT};

use crate::channels::TIME_REPORT;

/// Radio TX task - sends time reports when the timer task asks
#[embassy_executor::task]
pub async fn radio_tx_task(mut tx: BufferedUartTx) {
    info!("Radio TX task started");

    loop {
        let remaining_s = TIME_REPORT.wait().await;
        let report = encode_time_report(remaining_s);

        match LinkFrame::new(MSG_TIME_REPORT, &report).and_then(|f| f.encode_vec()) {
            Ok(encoded) => {
                if let Err(e) = tx.write_all(&encoded).await {
                    warn!("Failed to send time report: {:?}", e);
                } else {
                    trace!("Time report sent: {=u32}s", remaining_s);
                }
            }
            Err(e) => warn!("Failed to build time report frame: {:?}", e),
        }
    }
}
