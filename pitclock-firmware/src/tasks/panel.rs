//! Panel UART transmit task
//!
//! Applies each render frame to the matrix driver board: a color command
//! when the severity band changes, then the text. The board holds no
//! history; it just mutates to the latest instruction.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use pitclock_core::render::Severity;
use pitclock_protocol::panel::PanelMessage;

use crate::channels::PANEL_FRAME;

/// Panel task - forwards render frames to the matrix driver
#[embassy_executor::task]
pub async fn panel_task(mut tx: BufferedUartTx) {
    info!("Panel task started");

    let mut shown_severity: Option<Severity> = None;

    loop {
        let frame = PANEL_FRAME.wait().await;

        if shown_severity != Some(frame.severity) {
            shown_severity = Some(frame.severity);
            send(&mut tx, &PanelMessage::Color(frame.severity.rgb())).await;
        }

        send(&mut tx, &PanelMessage::text(frame.text.as_str())).await;
        trace!("Panel updated: {}", frame.text.as_str());
    }
}

/// Encode and write one panel command
async fn send(tx: &mut BufferedUartTx, msg: &PanelMessage) {
    match msg.to_frame().and_then(|f| f.encode_vec()) {
        Ok(encoded) => {
            if let Err(e) = tx.write_all(&encoded).await {
                warn!("Panel write failed: {:?}", e);
            }
        }
        Err(e) => warn!("Panel encode failed: {:?}", e),
    }
}
