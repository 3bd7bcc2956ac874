//! Match timer state machine.
//!
//! The timer mirrors the arena controller: every received packet replaces
//! the countdown value outright (the controller is the source of truth) and
//! drives the run/pause flag through an exhaustive per-state policy. The
//! local tick is a fallback that keeps the display counting during radio
//! gaps; exactly one of packet or tick advances the countdown in any given
//! second, which the firmware loop enforces by re-arming the tick deadline
//! whenever a packet lands.

use crate::config::TimerConfig;
use crate::render::TimeFrame;
use pitclock_protocol::packet::{MatchState, StatusPacket};

/// Countdown timer driven by broadcast match states
#[derive(Debug, Clone)]
pub struct MatchTimer {
    match_state: MatchState,
    timer_running: bool,
    remaining_s: u32,
    timer_length_s: u32,
    blink: bool,
}

impl MatchTimer {
    /// A fresh timer: no signal yet, paused, showing the full match length
    pub fn new(config: &TimerConfig) -> Self {
        Self {
            match_state: MatchState::NoSignal,
            timer_running: false,
            remaining_s: config.timer_length_s,
            timer_length_s: config.timer_length_s,
            blink: config.blink,
        }
    }

    /// Last applied match state
    pub fn match_state(&self) -> MatchState {
        self.match_state
    }

    /// Whether the countdown is advancing
    pub fn is_running(&self) -> bool {
        self.timer_running
    }

    /// Current countdown value in whole seconds
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_s
    }

    /// Apply a decoded controller packet.
    ///
    /// The packet's time replaces the running total (clamped to the timer
    /// length, so `remaining_s` stays in `[0, timer_length_s]`), then the
    /// state policy updates the run flag. Returns the frame to display.
    pub fn on_packet(&mut self, packet: StatusPacket) -> TimeFrame {
        self.match_state = packet.state;
        self.remaining_s = packet.remaining_seconds().min(self.timer_length_s);
        self.apply_state(packet.state);
        self.render()
    }

    /// Advance the fallback countdown by one second.
    ///
    /// Returns `None` while paused; the caller must not redraw in that
    /// case. A decrement from zero wraps back to the full length, which is
    /// how the node free-runs as a demo clock when no controller exists.
    pub fn on_local_tick(&mut self) -> Option<TimeFrame> {
        if !self.timer_running {
            return None;
        }
        self.remaining_s = match self.remaining_s.checked_sub(1) {
            Some(s) => s,
            None => self.timer_length_s,
        };
        Some(self.render())
    }

    /// Force the timer back to a paused, full-length countdown
    pub fn reset(&mut self) -> TimeFrame {
        self.timer_running = false;
        self.remaining_s = self.timer_length_s;
        self.render()
    }

    /// Frame for the current countdown value
    pub fn render(&self) -> TimeFrame {
        TimeFrame::compose(self.remaining_s, self.blink)
    }

    /// Run/pause policy, keyed purely on the incoming state.
    ///
    /// No history beyond the single run flag: the controller owns match
    /// progression, so states this node does not act on pass through
    /// without touching the flag.
    fn apply_state(&mut self, state: MatchState) {
        use MatchState::*;
        match state {
            Idle => {
                self.timer_running = false;
                self.remaining_s = self.timer_length_s;
            }
            Match => self.timer_running = true,
            MatchEnd | KoTapOut | EStop | Pause => self.timer_running = false,
            // Pre-match phases, in-match warnings, KO confirmation, and a
            // lost signal all hold the last run/pause state
            LoadIn | ReadyForBattle | Countdown | OneMinuteWarning | TenSecondWarning
            | KoConfirm | NoSignal => {}
        }
    }
}
