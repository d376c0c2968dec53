//! Outward notifications the `Screen` raises for its host to act on.
//!
//! Grounded on the teacher's `TerminalHost` trait (`term/src/terminal.rs`):
//! one method per event the screen model can't itself act on because doing
//! so would require I/O, a window system, or a clipboard — all out of
//! scope here. `Screen` owns its sink as a `Box<dyn ScreenCallbacks>`
//! rather than borrowing one, so it stays an independently ownable value
//! with no lifetime tied to its host.

/// Sink for events the screen model raises but cannot act on itself.
pub trait ScreenCallbacks {
    /// The active buffer changed between main and alternate.
    fn buf_toggled(&mut self, is_main: bool) {
        let _ = is_main;
    }

    /// BEL was received.
    fn bell(&mut self) {}

    /// The screen wants to send bytes back to the child (an answerback
    /// response to a status/attribute query).
    fn write_to_child(&mut self, bytes: &[u8]) {
        let _ = bytes;
    }

    /// UTF-8 decoding was toggled.
    fn use_utf8(&mut self, enabled: bool) {
        let _ = enabled;
    }

    fn title_changed(&mut self, title: String) {
        let _ = title;
    }

    fn icon_changed(&mut self, icon: String) {
        let _ = icon;
    }

    /// OSC dynamic color set/query (cursor color, selection color, ...).
    fn set_dynamic_color(&mut self, code: u32, value: String) {
        let _ = (code, value);
    }

    /// OSC 4 palette color table entry set/query.
    fn set_color_table_color(&mut self, code: u32, value: String) {
        let _ = (code, value);
    }

    /// DA/DECRQSS-style capability query the screen can't answer itself.
    fn request_capabilities(&mut self, query: &str) {
        let _ = query;
    }
}

/// A `ScreenCallbacks` that drops every event; useful for tests and for
/// callers that only want the screen's own state changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct NopCallbacks;

impl ScreenCallbacks for NopCallbacks {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn nop_callbacks_accepts_every_event() {
        let mut cb = NopCallbacks;
        cb.buf_toggled(true);
        cb.bell();
        cb.write_to_child(b"\x1b[0n");
        cb.use_utf8(false);
        cb.title_changed("x".into());
        cb.icon_changed("x".into());
        cb.set_dynamic_color(10, "rgb:00/00/00".into());
        cb.set_color_table_color(4, "rgb:ff/ff/ff".into());
        cb.request_capabilities("TN");
    }
}
