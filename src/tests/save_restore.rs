use super::{draw_str, new_screen};
use crate::mode_set::ModeSet;

#[test]
fn alt_screen_preserves_main_content() {
    let mut s = new_screen(3, 3, 10);
    draw_str(&mut s, "X");
    let pre_toggle_cursor = (s.cursor().x, s.cursor().y);

    s.set_alt_screen(true);
    draw_str(&mut s, "Y");
    s.set_alt_screen(false);

    assert_eq!(s.line(0).unwrap().as_str(), "X  ");
    assert_eq!((s.cursor().x, s.cursor().y), pre_toggle_cursor);
}

#[test]
fn save_restore_round_trips_cursor_and_modes() {
    let mut s = new_screen(4, 6, 10);
    s.set_mode(6, true); // DECOM (homes the cursor as a side effect)
    s.reset_mode(7, true); // DECAWM off
    s.set_mode(5, true); // DECSCNM
    s.cursor_position(2, 3);

    s.save_cursor();

    // mutate everything the savepoint captured
    s.cursor_position(1, 1);
    s.reset_mode(6, true);
    s.set_mode(7, true);
    s.reset_mode(5, true);

    s.restore_cursor();

    assert_eq!((s.cursor().x, s.cursor().y), (2, 1));
    assert!(s.modes().contains(ModeSet::ORIGIN));
    assert!(!s.modes().contains(ModeSet::AUTOWRAP));
    assert!(s.modes().contains(ModeSet::REVERSE_VIDEO));
}

#[test]
fn restore_with_empty_stack_goes_home_and_resets_origin() {
    let mut s = new_screen(4, 6, 10);
    s.set_mode(6, true);
    s.cursor_position(3, 3);
    s.restore_cursor();
    assert_eq!((s.cursor().x, s.cursor().y), (0, 0));
    assert!(!s.modes().contains(ModeSet::ORIGIN));
}
