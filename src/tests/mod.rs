//! Integration-style tests driving [`crate::Screen`]'s public command
//! surface directly, one file per concern — mirroring the teacher's
//! `term/src/test/` layout, minus the byte-level escape feeding, since the
//! parser that would produce these calls is out of scope here.

mod drawing;
mod save_restore;
mod scrolling;

use crate::{NopCallbacks, Screen};

fn new_screen(lines: usize, columns: usize, scrollback: usize) -> Screen {
    Screen::new(lines, columns, scrollback, Box::new(NopCallbacks))
}

fn draw_str(screen: &mut Screen, s: &str) {
    for c in s.chars() {
        match c {
            '\n' => {
                screen.carriage_return();
                screen.linefeed();
            }
            c => screen.draw(c),
        }
    }
}
