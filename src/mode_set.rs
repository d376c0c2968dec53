//! [`ModeSet`]: the packed set of ANSI/DEC terminal modes, plus the two
//! small enums that describe mouse reporting when `MOUSE_TRACKING` family
//! bits are on.
//!
//! Packed as one `bitflags!` word the same way the teacher packs
//! `termwiz`'s `LineBits`/`CellAttributes` flag sets, rather than one bool
//! field per mode.

use bitflags::bitflags;

bitflags! {
    pub struct ModeSet: u32 {
        /// LNM: received linefeed also returns to column 0.
        const LINEFEED_NEWLINE     = 1 << 0;
        /// IRM: drawing inserts rather than overwrites.
        const INSERT               = 1 << 1;
        /// DECAWM: cursor wraps at the right margin.
        const AUTOWRAP             = 1 << 2;
        /// DECTCEM: cursor is painted at all.
        const CURSOR_VISIBLE       = 1 << 3;
        /// DECARM: keyboard auto-repeat (tracked for completeness; has no
        /// effect on the screen model itself).
        const AUTO_REPEAT          = 1 << 4;
        /// DECOM: cursor addressing and bounds are relative to the
        /// scrolling margins rather than the whole screen.
        const ORIGIN               = 1 << 5;
        /// DECSCNM: foreground/background are swapped for display.
        const REVERSE_VIDEO        = 1 << 6;
        /// DECCKM: cursor keys send application- rather than normal-mode
        /// sequences (reported via mode queries; key encoding itself is
        /// out of scope).
        const APPLICATION_CURSOR   = 1 << 7;
        /// DECCOLM: 132-column mode is selected.
        const COLUMN_132           = 1 << 8;
        const BRACKETED_PASTE      = 1 << 9;
        const EXTENDED_KEYBOARD    = 1 << 10;
        const FOCUS_TRACKING       = 1 << 11;
    }
}

impl Default for ModeSet {
    fn default() -> Self {
        ModeSet::AUTOWRAP | ModeSet::CURSOR_VISIBLE | ModeSet::AUTO_REPEAT
    }
}

/// Which mouse events are reported, independent of the wire protocol used
/// to report them (`MouseTrackingProtocol`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseTrackingMode {
    Off,
    /// Report button press/release only.
    Button,
    /// Also report motion while a button is held.
    Motion,
    /// Report all motion, button held or not.
    Any,
}

impl Default for MouseTrackingMode {
    fn default() -> Self {
        MouseTrackingMode::Off
    }
}

/// Wire encoding used for mouse reports, selected independently of
/// `MouseTrackingMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseTrackingProtocol {
    Normal,
    Utf8,
    Sgr,
    Urxvt,
}

impl Default for MouseTrackingProtocol {
    fn default() -> Self {
        MouseTrackingProtocol::Normal
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_match_power_on_state() {
        let modes = ModeSet::default();
        assert!(modes.contains(ModeSet::AUTOWRAP));
        assert!(modes.contains(ModeSet::CURSOR_VISIBLE));
        assert!(!modes.contains(ModeSet::ORIGIN));
        assert!(!modes.contains(ModeSet::INSERT));
    }

    #[test]
    fn mouse_mode_and_protocol_are_independent() {
        let mode = MouseTrackingMode::Any;
        let proto = MouseTrackingProtocol::Sgr;
        assert_eq!(mode, MouseTrackingMode::Any);
        assert_eq!(proto, MouseTrackingProtocol::Sgr);
    }
}
