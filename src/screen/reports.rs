//! Device attribute/status/mode reports (§4.8). These are the only
//! operations that write bytes back out, via `write_to_child`.
//!
//! Grounded on `term/src/lib.rs`'s `CSIAction::ReportCursorPosition` /
//! `RequestDeviceAttributes` answerback construction.

use super::modes::mode_key;
use super::Screen;
use crate::mode_set::ModeSet;

/// Placeholder primary/secondary version numbers reported by DA2; a real
/// host application would substitute its own build identifiers.
const PRIMARY_VERSION: u32 = 0;
const SECONDARY_VERSION: u32 = 0;

impl Screen {
    /// `start_modifier` is `'>'` for DA2 (secondary attributes) and
    /// anything else for DA1 (primary attributes); only `mode == 0` is
    /// answered, matching the CSI form `CSI [ > ] c`.
    pub fn report_device_attributes(&mut self, mode: u16, start_modifier: char) {
        if mode != 0 {
            return;
        }
        let response = if start_modifier == '>' {
            format!("\x1b[>1;{};{}c", PRIMARY_VERSION, SECONDARY_VERSION)
        } else {
            "\x1b[?62;c".to_string()
        };
        self.callbacks.write_to_child(response.as_bytes());
    }

    /// `which == 5` is a generic device-status query; `which == 6` is a
    /// cursor position report.
    pub fn report_device_status(&mut self, which: u16, private: bool) {
        match which {
            5 => self.callbacks.write_to_child(b"\x1b[0n"),
            6 => {
                let mut y = self.cursor.y;
                let mut x = self.cursor.x;
                if x >= self.columns {
                    if y + 1 < self.lines {
                        y += 1;
                    }
                    x = 0;
                }
                if self.modes.contains(ModeSet::ORIGIN) {
                    y = y.saturating_sub(self.margin_top);
                }
                let marker = if private { "?" } else { "" };
                let response = format!("\x1b[{}{};{}R", marker, y + 1, x + 1);
                self.callbacks.write_to_child(response.as_bytes());
            }
            other => log::warn!("unsupported device status report {}", other),
        }
    }

    /// DECRPM: reply with whether `which` is currently set/reset, in the
    /// wire form the data model gives literally (§4.8): no `$` separator,
    /// capital `Y` terminator. Modes this crate doesn't model report `0`
    /// ("not recognized").
    pub fn report_mode_status(&mut self, which: u16, private: bool) {
        let key = mode_key(which, private);
        let status = self.mode_status(key, private);
        let marker = if private { "?" } else { "" };
        let response = format!("\x1b[{}{};{}Y", marker, which, status);
        self.callbacks.write_to_child(response.as_bytes());
    }

    fn mode_status(&self, key: u32, private: bool) -> u8 {
        let set = match (private, key) {
            (true, k) if k == mode_key(25, true) => Some(self.modes.contains(ModeSet::CURSOR_VISIBLE)),
            (true, k) if k == mode_key(5, true) => Some(self.modes.contains(ModeSet::REVERSE_VIDEO)),
            (true, k) if k == mode_key(6, true) => Some(self.modes.contains(ModeSet::ORIGIN)),
            (true, k) if k == mode_key(7, true) => Some(self.modes.contains(ModeSet::AUTOWRAP)),
            (true, k) if k == mode_key(1, true) => Some(self.modes.contains(ModeSet::APPLICATION_CURSOR)),
            (true, k) if k == mode_key(2004, true) => Some(self.modes.contains(ModeSet::BRACKETED_PASTE)),
            (false, 20) => Some(self.modes.contains(ModeSet::LINEFEED_NEWLINE)),
            (false, 4) => Some(self.modes.contains(ModeSet::INSERT)),
            _ => None,
        };
        match set {
            Some(true) => 1,
            Some(false) => 2,
            None => 0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::callbacks::ScreenCallbacks;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingCallbacks(Rc<RefCell<Vec<u8>>>);

    impl ScreenCallbacks for RecordingCallbacks {
        fn write_to_child(&mut self, bytes: &[u8]) {
            self.0.borrow_mut().extend_from_slice(bytes);
        }
    }

    #[test]
    fn cursor_position_report_is_one_based() {
        let sink = Rc::new(RefCell::new(Vec::new()));
        let mut s = Screen::new(5, 5, 10, Box::new(RecordingCallbacks(sink.clone())));
        s.cursor_position(3, 2);
        s.report_device_status(6, false);
        assert_eq!(&*sink.borrow(), b"\x1b[3;2R");
    }

    #[test]
    fn mode_status_reports_set_and_reset() {
        let mut s = Screen::new(5, 5, 10, Box::new(crate::callbacks::NopCallbacks));
        s.set_mode(25, true);
        assert_eq!(s.mode_status(mode_key(25, true), true), 1);
        s.reset_mode(25, true);
        assert_eq!(s.mode_status(mode_key(25, true), true), 2);
    }
}
