use super::{draw_str, new_screen};
use crate::mode_set::ModeSet;

#[test]
fn wrap_scenario() {
    let mut s = new_screen(4, 4, 10);
    draw_str(&mut s, "ABCDE");
    assert_eq!(s.line(0).unwrap().as_str(), "ABCD");
    assert!(s.line(0).unwrap().continued);
    assert_eq!(s.line(1).unwrap().as_str(), "E   ");
    assert!(!s.line(1).unwrap().continued);
    assert_eq!((s.cursor().x, s.cursor().y), (1, 1));
}

#[test]
fn no_wrap_scenario() {
    let mut s = new_screen(4, 4, 10);
    s.reset_mode(7, true); // DECAWM off
    assert!(!s.modes().contains(ModeSet::AUTOWRAP));
    draw_str(&mut s, "ABCDE");
    assert_eq!(s.line(0).unwrap().as_str(), "ABCE");
    assert_eq!(s.cursor().x, 3);
}

#[test]
fn wide_glyph_wraps_instead_of_splitting() {
    let mut s = new_screen(2, 2, 10);
    s.draw('A');
    s.draw('\u{6c49}'); // wide glyph; only one column free on row 0
    assert_eq!(s.line(0).unwrap().as_str().trim_end(), "A");
    assert!(s.line(0).unwrap().continued);
    assert_eq!(s.line(1).unwrap().cell(0).codepoint, '\u{6c49}');
}

#[test]
fn rendition_reset_returns_to_default_pen() {
    let mut s = new_screen(2, 4, 10);
    s.select_graphic_rendition(&[1, 3, 4, 7]);
    assert!(s.cursor().pen.bold());
    s.select_graphic_rendition(&[0]);
    assert_eq!(s.cursor().pen, Default::default());
}

#[test]
fn insert_mode_shifts_existing_text_right() {
    let mut s = new_screen(1, 5, 10);
    draw_str(&mut s, "ABC");
    s.set_mode(4, false); // IRM
    s.cursor_back(3);
    s.draw('X');
    assert_eq!(s.line(0).unwrap().as_str(), "XABC ");
}
