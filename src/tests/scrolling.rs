use super::{draw_str, new_screen};

#[test]
fn scroll_with_history_scenario() {
    let mut s = new_screen(2, 2, 5);
    draw_str(&mut s, "AB\nCD\nEF\nGH");
    assert_eq!(s.line(0).unwrap().as_str(), "EF");
    assert_eq!(s.line(1).unwrap().as_str(), "GH");
    assert_eq!(s.history_len(), 2);
    assert_eq!(s.history_line(0).unwrap().as_str(), "AB");
    assert_eq!(s.history_line(1).unwrap().as_str(), "CD");
    assert_eq!(s.history_line_added_count(), 2);
}

#[test]
fn index_on_full_height_region_feeds_history_exactly_once() {
    let mut s = new_screen(3, 2, 10);
    s.draw('A');
    s.index();
    assert_eq!(s.history_line_added_count(), 0); // cursor row 0 -> just moves down
    s.cursor_position(3, 1);
    s.index(); // now at bottom margin, this one scrolls
    assert_eq!(s.history_line_added_count(), 1);
    assert_eq!(s.history_line(0).unwrap().as_str(), "A ");
}

#[test]
fn scroll_region_reverse_index_never_touches_history() {
    let mut s = new_screen(2, 2, 10);
    draw_str(&mut s, "AB\nCD");
    s.cursor_position(1, 1);
    s.reverse_index();
    assert_eq!(s.history_len(), 0);
}

#[test]
fn alt_screen_scroll_never_grows_history() {
    let mut s = new_screen(2, 2, 10);
    s.set_alt_screen(true);
    draw_str(&mut s, "AB\nCD\nEF");
    assert_eq!(s.history_len(), 0);
}
