//! Mode setting (§4.7): `set_mode`/`reset_mode` and the DECRPM status
//! query they share a code space with (`reports.rs`).
//!
//! Grounded on `terminalstate/mod.rs`'s `perform_csi_mode` dispatch
//! (`match` over DEC private mode numbers). The data model specifies most
//! effects by name only, not by wire number; the numbers used here are the
//! real xterm/DEC assignments (DECTCEM=25, DECOM=6, DECSTBM-adjacent
//! DECCOLM=3, the 1000-series mouse modes, 2004 bracketed paste, 1049 for
//! the alternate screen) plus one invented slot (2017) for
//! `EXTENDED_KEYBOARD`, which has no single historical assignment; these
//! choices are recorded in the design notes.

use super::Screen;
use crate::mode_set::{ModeSet, MouseTrackingMode, MouseTrackingProtocol};

/// Fold a DEC private mode number into the same key space a public (ANSI)
/// mode number lives in, the way the parser collaborator is specified to
/// route them (§4.7: "private modes are multiplied by 32").
pub(super) fn mode_key(code: u16, private: bool) -> u32 {
    if private {
        (code as u32) << 5
    } else {
        code as u32
    }
}

impl Screen {
    pub fn set_mode(&mut self, code: u16, private: bool) {
        self.apply_mode(code, private, true);
    }

    pub fn reset_mode(&mut self, code: u16, private: bool) {
        self.apply_mode(code, private, false);
    }

    fn apply_mode(&mut self, code: u16, private: bool, enable: bool) {
        let key = mode_key(code, private);
        match key {
            k if private && k == mode_key(25, true) => {
                self.modes.set(ModeSet::CURSOR_VISIBLE, enable);
                self.cursor_changed = true;
            }
            k if private && k == mode_key(5, true) => {
                self.modes.set(ModeSet::REVERSE_VIDEO, enable);
                self.is_dirty = true;
            }
            k if private && k == mode_key(6, true) => {
                self.modes.set(ModeSet::ORIGIN, enable);
                self.cursor.x = 0;
                self.cursor.y = self.margin_top;
                self.ensure_bounds(true);
                self.cursor_changed = true;
            }
            k if private && k == mode_key(3, true) => {
                self.modes.set(ModeSet::COLUMN_132, enable);
                self.erase_in_display(2, false);
                self.cursor.x = 0;
                self.cursor.y = 0;
                self.cursor_changed = true;
            }
            k if private && k == mode_key(7, true) => self.modes.set(ModeSet::AUTOWRAP, enable),
            k if private && k == mode_key(8, true) => self.modes.set(ModeSet::AUTO_REPEAT, enable),
            k if private && k == mode_key(1, true) => {
                self.modes.set(ModeSet::APPLICATION_CURSOR, enable)
            }
            k if private && k == mode_key(2004, true) => {
                self.modes.set(ModeSet::BRACKETED_PASTE, enable)
            }
            k if private && k == mode_key(2017, true) => {
                self.modes.set(ModeSet::EXTENDED_KEYBOARD, enable)
            }
            k if private && k == mode_key(1004, true) => {
                self.modes.set(ModeSet::FOCUS_TRACKING, enable)
            }
            k if private && k == mode_key(12, true) => {
                self.cursor.blink = enable;
                self.cursor_changed = true;
            }
            k if private
                && (k == mode_key(47, true)
                    || k == mode_key(1047, true)
                    || k == mode_key(1049, true)) =>
            {
                self.set_alt_screen(enable);
            }
            k if private && (k == mode_key(9, true) || k == mode_key(1000, true)) => {
                self.mouse_tracking_mode = if enable {
                    MouseTrackingMode::Button
                } else {
                    MouseTrackingMode::Off
                };
            }
            k if private && k == mode_key(1002, true) => {
                self.mouse_tracking_mode = if enable {
                    MouseTrackingMode::Motion
                } else {
                    MouseTrackingMode::Off
                };
            }
            k if private && k == mode_key(1003, true) => {
                self.mouse_tracking_mode = if enable {
                    MouseTrackingMode::Any
                } else {
                    MouseTrackingMode::Off
                };
            }
            k if private && k == mode_key(1005, true) && enable => {
                self.mouse_tracking_protocol = MouseTrackingProtocol::Utf8;
            }
            k if private && k == mode_key(1006, true) && enable => {
                self.mouse_tracking_protocol = MouseTrackingProtocol::Sgr;
            }
            k if private && k == mode_key(1015, true) && enable => {
                self.mouse_tracking_protocol = MouseTrackingProtocol::Urxvt;
            }
            // DECSCLM (smooth scroll) and DECNRCM (national replacement
            // charsets): accepted as no-ops per the data model.
            k if private && (k == mode_key(4, true) || k == mode_key(42, true)) => {}
            k if !private && k == mode_key(20, false) => {
                self.modes.set(ModeSet::LINEFEED_NEWLINE, enable)
            }
            k if !private && k == mode_key(4, false) => self.modes.set(ModeSet::INSERT, enable),
            _ => {
                log::warn!(
                    "unsupported {} mode {} ({})",
                    if enable { "set" } else { "reset" },
                    code,
                    if private { "private" } else { "public" }
                );
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::callbacks::NopCallbacks;

    fn screen() -> Screen {
        Screen::new(4, 10, 10, Box::new(NopCallbacks))
    }

    #[test]
    fn dectcem_toggles_cursor_visibility() {
        let mut s = screen();
        s.reset_mode(25, true);
        assert!(!s.modes().contains(ModeSet::CURSOR_VISIBLE));
        s.set_mode(25, true);
        assert!(s.modes().contains(ModeSet::CURSOR_VISIBLE));
    }

    #[test]
    fn decom_homes_cursor_to_margin_top() {
        let mut s = screen();
        s.set_margins(2, 3);
        s.set_mode(6, true);
        assert_eq!(s.cursor().y, 1);
        assert!(s.modes().contains(ModeSet::ORIGIN));
    }

    #[test]
    fn alternate_screen_mode_matches_set_alt_screen() {
        let mut s = screen();
        s.set_mode(1049, true);
        assert!(s.is_alt_screen());
        s.reset_mode(1049, true);
        assert!(!s.is_alt_screen());
    }

    #[test]
    fn unknown_public_mode_does_not_panic() {
        let mut s = screen();
        s.set_mode(9999, false);
    }
}
