//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod panel;
pub mod radio_rx;
pub mod radio_tx;
pub mod timer;

pub use panel::panel_task;
pub use radio_rx::radio_rx_task;
pub use radio_tx::radio_tx_task;
pub use timer::timer_task;
