//! Pitclock - Wireless Match Timer Display Node
//!
//! Receiver-side node of a two-device combat-robot match timer. The arena
//! controller broadcasts match state and remaining time over ESP-NOW; this
//! node derives the countdown and renders mm:ss with color-coded urgency.
//!
//! Hardware: an RP2040 between two UARTs. UART0 talks to the ESP-NOW radio
//! co-processor, UART1 to the RGB matrix driver board. All timer logic
//! lives in `pitclock-core` and runs unchanged on the host.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::{UART0, UART1};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use pitclock_core::TimerConfig;

mod channels;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    UART1_IRQ => BufferedInterruptHandler<UART1>;
});

// Static cells for UART buffers (must live forever)
static RADIO_TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RADIO_RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static PANEL_TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static PANEL_RX_BUF: StaticCell<[u8; 16]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Pitclock node starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Node configuration: 3-minute match, blinking colon, no legacy broadcast
    let config = TimerConfig::new();

    // UART0: ESP-NOW radio co-processor link
    let radio_uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, UartConfig::default());
    let radio_uart = radio_uart.into_buffered(
        Irqs,
        RADIO_TX_BUF.init([0u8; 64]),
        RADIO_RX_BUF.init([0u8; 64]),
    );
    let (radio_tx, radio_rx) = radio_uart.split();

    // UART1: RGB matrix driver board link
    let panel_uart = Uart::new_blocking(p.UART1, p.PIN_4, p.PIN_5, UartConfig::default());
    let panel_uart = panel_uart.into_buffered(
        Irqs,
        PANEL_TX_BUF.init([0u8; 64]),
        PANEL_RX_BUF.init([0u8; 16]),
    );
    let (panel_tx, _panel_rx) = panel_uart.split();

    info!("UART links initialized");

    spawner.spawn(tasks::radio_rx_task(radio_rx)).unwrap();
    spawner.spawn(tasks::radio_tx_task(radio_tx)).unwrap();
    spawner.spawn(tasks::panel_task(panel_tx)).unwrap();
    spawner.spawn(tasks::timer_task(config)).unwrap();

    info!("All tasks spawned, node running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
