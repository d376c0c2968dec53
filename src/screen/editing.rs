//! Line and character editing operations (§4.5): insert/delete lines,
//! insert/delete/erase characters, erase-in-line/display, DECALN.
//!
//! Grounded on `term/src/screen.rs`'s region-scrolling arithmetic (reused
//! here for insert/delete lines) and `line.rs`'s cell-range helpers for the
//! character-level operations.

use super::Screen;
use crate::cell::{Cell, CellAttrs};

impl Screen {
    pub fn insert_lines(&mut self, n: usize) {
        if self.cursor.y < self.margin_top || self.cursor.y > self.margin_bottom {
            return;
        }
        let y = self.cursor.y;
        let bottom = self.margin_bottom;
        self.active_linebuf_mut().insert_lines(n, y, bottom);
        self.carriage_return();
        self.is_dirty = true;
    }

    pub fn delete_lines(&mut self, n: usize) {
        if self.cursor.y < self.margin_top || self.cursor.y > self.margin_bottom {
            return;
        }
        let y = self.cursor.y;
        let bottom = self.margin_bottom;
        self.active_linebuf_mut().delete_lines(n, y, bottom);
        self.carriage_return();
        self.is_dirty = true;
    }

    pub fn insert_characters(&mut self, n: usize) {
        let x = self.cursor.x;
        let y = self.cursor.y;
        let amount = n.min(self.columns.saturating_sub(x));
        let pen = self.cursor.pen;
        self.active_linebuf_mut().row_mut(y).shift_right(x, amount, pen);
        self.is_dirty = true;
    }

    pub fn delete_characters(&mut self, n: usize) {
        let x = self.cursor.x;
        let y = self.cursor.y;
        let amount = n.min(self.columns.saturating_sub(x));
        let pen = self.cursor.pen;
        self.active_linebuf_mut().row_mut(y).shift_left(x, amount, pen);
        self.is_dirty = true;
    }

    pub fn erase_characters(&mut self, n: usize) {
        let x = self.cursor.x;
        let y = self.cursor.y;
        let amount = n.min(self.columns.saturating_sub(x));
        let pen = self.cursor.pen;
        self.active_linebuf_mut()
            .row_mut(y)
            .fill_range(x, x + amount, pen);
        self.is_dirty = true;
    }

    /// `how`: 0 = cursor to end, 1 = start to cursor (inclusive), 2 = whole
    /// row. Anything else is a silent no-op per the data model. `private`
    /// preserves each cell's existing rendition instead of stamping the
    /// pen's.
    pub fn erase_in_line(&mut self, how: u16, private: bool) {
        let x = self.cursor.x;
        let y = self.cursor.y;
        let cols = self.columns;
        let (from, to) = match how {
            0 => (x, cols),
            1 => (0, (x + 1).min(cols)),
            2 => (0, cols),
            _ => return,
        };
        let pen = self.cursor.pen;
        let row = self.active_linebuf_mut().row_mut(y);
        if private {
            row.erase_text_range(from, to);
        } else {
            row.fill_range(from, to, pen);
        }
        self.is_dirty = true;
    }

    /// `how`: 0 = cursor to end of display, 1 = start to cursor, 2 = whole
    /// display.
    pub fn erase_in_display(&mut self, how: u16, private: bool) {
        let y = self.cursor.y;
        let lines = self.lines;
        let (from_row, to_row) = match how {
            0 => (y + 1, lines),
            1 => (0, y),
            2 => (0, lines),
            _ => return,
        };
        let pen = self.cursor.pen;
        for row_idx in from_row..to_row {
            let row = self.active_linebuf_mut().row_mut(row_idx);
            if private {
                let cols = row.columns();
                row.erase_text_range(0, cols);
            } else {
                row.clear_with_attrs(pen);
            }
        }
        if how != 2 {
            self.erase_in_line(how, private);
        }
        self.is_dirty = true;
    }

    /// DECALN: fill the whole screen with 'E', reset margins to the full
    /// screen and home the cursor.
    pub fn alignment_display(&mut self) {
        let cols = self.columns;
        let lines = self.lines;
        for y in 0..lines {
            let row = self.active_linebuf_mut().row_mut(y);
            for x in 0..cols {
                row.set_cell(x, Cell::new('E', CellAttrs::default()));
            }
            row.continued = false;
        }
        self.margin_top = 0;
        self.margin_bottom = lines - 1;
        self.cursor.x = 0;
        self.cursor.y = 0;
        self.is_dirty = true;
        self.cursor_changed = true;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::callbacks::NopCallbacks;

    fn screen(lines: usize, columns: usize) -> Screen {
        Screen::new(lines, columns, 10, Box::new(NopCallbacks))
    }

    #[test]
    fn insert_then_delete_characters_is_identity_on_sparse_row() {
        let mut s = screen(1, 6);
        s.draw('A');
        let before = s.line(0).unwrap().clone();
        s.cursor.x = 0;
        s.insert_characters(2);
        s.delete_characters(2);
        assert_eq!(*s.line(0).unwrap(), before);
    }

    #[test]
    fn erase_in_display_whole_screen_clears_everything() {
        let mut s = screen(2, 4);
        s.draw('A');
        s.cursor.y = 1;
        s.draw('B');
        s.erase_in_display(2, false);
        assert_eq!(s.line(0).unwrap().as_str(), "    ");
        assert_eq!(s.line(1).unwrap().as_str(), "    ");
    }

    #[test]
    fn alignment_display_fills_with_e_and_resets_margins() {
        let mut s = screen(3, 3);
        s.set_margins(1, 2);
        assert_eq!(s.margin_bottom, 1);
        s.alignment_display();
        assert_eq!(s.line(0).unwrap().as_str(), "EEE");
        assert_eq!(s.line(2).unwrap().as_str(), "EEE");
        assert_eq!(s.margin_bottom, 2);
    }
}
