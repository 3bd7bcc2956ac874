//! Render policy: remaining time -> display text and urgency color.

use heapless::String;
use pitclock_protocol::panel::MAX_TEXT_LEN;

/// Urgency classification driving the display color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Severity {
    /// More than a minute remaining
    Normal,
    /// Final minute
    Warning,
    /// Final ten seconds
    Critical,
}

impl Severity {
    /// Classify a remaining-seconds value.
    ///
    /// Band edges are inclusive on the low side: 10 s is Critical, 60 s is
    /// Warning, 61 s is Normal.
    pub fn for_remaining(remaining_s: u32) -> Self {
        if remaining_s <= 10 {
            Severity::Critical
        } else if remaining_s <= 60 {
            Severity::Warning
        } else {
            Severity::Normal
        }
    }

    /// RGB888 panel color for this severity
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Severity::Normal => [0x3D, 0xEB, 0x34],   // green
            Severity::Warning => [0xFF, 0x8C, 0x00],  // orange
            Severity::Critical => [0xFF, 0x00, 0x00], // red
        }
    }
}

/// One display update: what to show and how urgently
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeFrame {
    /// "MM:SS", with the colon blanked on odd seconds when blinking
    pub text: String<MAX_TEXT_LEN>,
    pub severity: Severity,
}

impl TimeFrame {
    /// Compose the frame for a remaining-seconds value.
    ///
    /// The blanked colon keeps its column (a space in a fixed-width layout)
    /// so the digits never shift while blinking.
    pub fn compose(remaining_s: u32, blink: bool) -> Self {
        let minutes = remaining_s / 60;
        let seconds = remaining_s % 60;
        let colon = if !blink || remaining_s % 2 == 0 {
            ':'
        } else {
            ' '
        };

        let mut text = String::new();
        let _ = write_to(&mut text, format_args!("{minutes:02}{colon}{seconds:02}"));

        Self {
            text,
            severity: Severity::for_remaining(remaining_s),
        }
    }
}

fn write_to(s: &mut String<MAX_TEXT_LEN>, args: core::fmt::Arguments<'_>) -> core::fmt::Result {
    use core::fmt::Write;
    s.write_fmt(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_band_edges() {
        assert_eq!(Severity::for_remaining(0), Severity::Critical);
        assert_eq!(Severity::for_remaining(10), Severity::Critical);
        assert_eq!(Severity::for_remaining(11), Severity::Warning);
        assert_eq!(Severity::for_remaining(60), Severity::Warning);
        assert_eq!(Severity::for_remaining(61), Severity::Normal);
        assert_eq!(Severity::for_remaining(180), Severity::Normal);
    }

    #[test]
    fn formats_minutes_and_seconds() {
        let frame = TimeFrame::compose(65, false);
        assert_eq!(frame.text.as_str(), "01:05");
        assert_eq!(frame.severity, Severity::Normal);
    }

    #[test]
    fn blink_blanks_colon_on_odd_seconds() {
        // 65 is odd: colon off, column preserved
        assert_eq!(TimeFrame::compose(65, true).text.as_str(), "01 05");
        // 64 is even: colon on
        assert_eq!(TimeFrame::compose(64, true).text.as_str(), "01:04");
    }

    #[test]
    fn final_seconds_are_critical() {
        let frame = TimeFrame::compose(5, false);
        assert_eq!(frame.text.as_str(), "00:05");
        assert_eq!(frame.severity, Severity::Critical);
    }

    #[test]
    fn full_match_length() {
        assert_eq!(TimeFrame::compose(180, false).text.as_str(), "03:00");
    }

    #[test]
    fn palette_matches_panel_colors() {
        assert_eq!(Severity::Critical.rgb(), [0xFF, 0x00, 0x00]);
        assert_eq!(Severity::Warning.rgb(), [0xFF, 0x8C, 0x00]);
        assert_eq!(Severity::Normal.rgb(), [0x3D, 0xEB, 0x34]);
    }
}
