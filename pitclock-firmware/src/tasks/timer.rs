//! Timer controller task
//!
//! The single owner of all timer state. One cooperative loop: poll the
//! radio signal, apply a decoded packet, or let the 1 s fallback tick fire
//! when the link is quiet. A packet re-arms the tick deadline, so exactly
//! one of packet or tick advances the countdown in any given second.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use pitclock_core::{MatchTimer, TimerConfig};
use pitclock_protocol::packet::DecodeResult;

use crate::channels::{PANEL_FRAME, STATUS_PAYLOAD, TIME_REPORT};

/// Radio poll cadence
const POLL_INTERVAL_MS: u64 = 100;

/// Fallback tick period
const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Timer task - drives the match timer state machine
#[embassy_executor::task]
pub async fn timer_task(config: TimerConfig) {
    info!(
        "Timer task started: {=u32}s match, blink={}",
        config.timer_length_s, config.blink
    );

    let mut timer = MatchTimer::new(&config);

    // Boot splash: show the full countdown before any packet arrives
    PANEL_FRAME.signal(timer.render());

    let mut poll = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));
    let mut tick_due = Instant::now() + TICK_PERIOD;

    loop {
        poll.next().await;

        let payload = STATUS_PAYLOAD.try_take();
        match DecodeResult::from_poll(payload.as_deref()) {
            DecodeResult::Decoded(packet) => {
                debug!("Packet: {:?} {=u32}ms", packet.state, packet.remaining_ms);

                let frame = timer.on_packet(packet);
                PANEL_FRAME.signal(frame);

                // Packet time satisfies this second's fallback tick
                tick_due = Instant::now() + TICK_PERIOD;

                if config.broadcast_time {
                    TIME_REPORT.signal(timer.remaining_seconds());
                }
            }
            DecodeResult::Malformed => {
                // Discard; previous state stands and the fallback keeps counting
                warn!("Malformed status payload dropped");
            }
            DecodeResult::NoData => {
                if Instant::now() >= tick_due {
                    tick_due += TICK_PERIOD;

                    if let Some(frame) = timer.on_local_tick() {
                        PANEL_FRAME.signal(frame);

                        if config.broadcast_time {
                            TIME_REPORT.signal(timer.remaining_seconds());
                        }
                    }
                }
            }
        }
    }
}
