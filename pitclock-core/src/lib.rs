//! Board-agnostic logic for the Pitclock match timer node
//!
//! Everything here runs identically on the host and on the target:
//!
//! - The match timer state machine (run/pause/reset driven by broadcast
//!   match states, with a once-per-second local fallback tick)
//! - The render policy mapping remaining time to display text and urgency
//! - The node configuration type
//!
//! Hardware stays outside: the firmware crate feeds decoded packets and
//! ticks in, and carries the returned frames to the panel link. The arena
//! controller is the authority on match progression; this node only mirrors
//! run/pause and lets time flow accordingly.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod render;
pub mod timer;

pub use config::TimerConfig;
pub use render::{Severity, TimeFrame};
pub use timer::MatchTimer;
