//! [`LineBuf`]: the fixed-size `lines x columns` grid that backs one of the
//! two screen buffers.
//!
//! Rows are plain `Vec<Line>` storage with region-scoped rotation, the same
//! technique the teacher's `Screen::scroll_up`/`scroll_down` use
//! (`Vec::remove`/`Vec::insert` within the scrolling margins) rather than a
//! literal ring buffer, since the region being rotated is rarely the whole
//! buffer.

use crate::history::HistoryBuf;
use crate::line::Line;

/// A `lines x columns` grid of rows.
#[derive(Debug, Clone)]
pub struct LineBuf {
    rows: Vec<Line>,
    columns: usize,
}

impl LineBuf {
    pub fn new(lines: usize, columns: usize) -> LineBuf {
        LineBuf {
            rows: vec![Line::blank(columns); lines],
            columns,
        }
    }

    pub fn lines(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn row(&self, y: usize) -> &Line {
        &self.rows[y]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut Line {
        &mut self.rows[y]
    }

    pub fn rows(&self) -> &[Line] {
        &self.rows
    }

    pub fn clear_line(&mut self, y: usize) {
        self.rows[y].clear();
    }

    /// Scroll the `[top, bottom]` region up by one row: row `top` leaves the
    /// region, every other row shifts up, and a fresh blank row appears at
    /// `bottom`. Returns the row that departed, so the caller (the main
    /// screen) can push it onto history; the alt screen just drops it.
    pub fn index(&mut self, top: usize, bottom: usize) -> Line {
        let departed = self.rows.remove(top);
        self.rows.insert(bottom, Line::blank(self.columns));
        departed
    }

    /// Scroll the `[top, bottom]` region down by one row: row `bottom`
    /// leaves the region (always discarded, never goes to history), every
    /// other row shifts down, and a fresh blank row appears at `top`.
    pub fn reverse_index(&mut self, top: usize, bottom: usize) {
        self.rows.remove(bottom);
        self.rows.insert(top, Line::blank(self.columns));
    }

    /// Insert `n` blank rows at `y`, pushing `[y, bottom]` down and
    /// discarding whatever falls off `bottom`. `n` is clamped to the size of
    /// the `[y, bottom]` region.
    pub fn insert_lines(&mut self, n: usize, y: usize, bottom: usize) {
        if y > bottom || bottom >= self.rows.len() {
            return;
        }
        let n = n.min(bottom - y + 1);
        for _ in 0..n {
            self.rows.remove(bottom);
            self.rows.insert(y, Line::blank(self.columns));
        }
    }

    /// Delete `n` rows at `y`, pulling `[y, bottom]` up and filling the
    /// exposed rows at `bottom` with blanks. `n` is clamped to the size of
    /// the `[y, bottom]` region.
    pub fn delete_lines(&mut self, n: usize, y: usize, bottom: usize) {
        if y > bottom || bottom >= self.rows.len() {
            return;
        }
        let n = n.min(bottom - y + 1);
        for _ in 0..n {
            self.rows.remove(y);
            self.rows.insert(bottom, Line::blank(self.columns));
        }
    }

    /// Rebuild this buffer at `new_rows x new_columns`, reflowing text
    /// across the new width.
    ///
    /// Chains of `continued` rows are joined back into one logical line,
    /// then re-broken at `new_columns` (mirrors the teacher's
    /// `rewrap_lines`: join-then-rebreak rather than a cell-by-cell
    /// resize). If the reflowed content no longer fits in `new_rows`, the
    /// oldest rows are pushed into `history` (when given — only the main
    /// screen keeps history) and the cursor row is adjusted to track its
    /// original content. Returns the new buffer and the cursor's new
    /// `(x, y)`.
    pub fn rewrap(
        self,
        new_rows: usize,
        new_columns: usize,
        cursor: (usize, usize),
        mut history: Option<&mut HistoryBuf>,
    ) -> (LineBuf, usize, usize) {
        let (cursor_x, cursor_y) = cursor;
        let mut flat: Vec<Line> = Vec::new();
        let mut pending: Option<Line> = None;
        let mut cursor_logical_offset: Option<usize> = None;
        let mut new_cursor_x = cursor_x.min(new_columns.saturating_sub(1));
        let mut new_cursor_y = 0usize;

        for (phys_idx, line) in self.rows.into_iter().enumerate() {
            let was_continued = line.continued;
            let is_cursor_row = phys_idx == cursor_y;
            let joined = match pending.take() {
                None => {
                    if is_cursor_row {
                        cursor_logical_offset = Some(cursor_x);
                    }
                    line
                }
                Some(mut prior) => {
                    let prior_len = prior.columns();
                    if is_cursor_row {
                        cursor_logical_offset = Some(prior_len + cursor_x);
                    }
                    prior.append(line);
                    prior
                }
            };
            if was_continued {
                pending = Some(joined);
                continue;
            }
            Self::flush_logical_line(joined, new_columns, &mut flat, &mut cursor_logical_offset, &mut new_cursor_x, &mut new_cursor_y);
        }
        if let Some(joined) = pending {
            Self::flush_logical_line(joined, new_columns, &mut flat, &mut cursor_logical_offset, &mut new_cursor_x, &mut new_cursor_y);
        }

        while flat.len() > new_rows {
            let departed = flat.remove(0);
            if let Some(h) = history.as_deref_mut() {
                h.push(departed);
            }
            new_cursor_y = new_cursor_y.saturating_sub(1);
        }
        while flat.len() < new_rows {
            flat.push(Line::blank(new_columns));
        }

        (
            LineBuf {
                rows: flat,
                columns: new_columns,
            },
            new_cursor_x,
            new_cursor_y.min(new_rows.saturating_sub(1)),
        )
    }

    fn flush_logical_line(
        joined: Line,
        new_columns: usize,
        flat: &mut Vec<Line>,
        cursor_logical_offset: &mut Option<usize>,
        new_cursor_x: &mut usize,
        new_cursor_y: &mut usize,
    ) {
        if let Some(offset) = cursor_logical_offset.take() {
            *new_cursor_y = flat.len() + offset / new_columns;
            *new_cursor_x = offset % new_columns;
        }
        for segment in joined.wrap(new_columns) {
            flat.push(segment);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cell::{Cell, CellAttrs};

    #[test]
    fn index_moves_top_row_to_history_position() {
        let mut buf = LineBuf::new(3, 4);
        buf.row_mut(0).set_cell(0, Cell::new('A', CellAttrs::default()));
        let departed = buf.index(0, 2);
        assert_eq!(departed.as_str().trim_end(), "A");
        assert_eq!(buf.row(2).as_str(), "    ");
    }

    #[test]
    fn insert_lines_pushes_region_down() {
        let mut buf = LineBuf::new(4, 4);
        buf.row_mut(1).set_cell(0, Cell::new('X', CellAttrs::default()));
        buf.insert_lines(1, 0, 3);
        assert_eq!(buf.row(2).as_str().trim_end(), "X");
        assert!(buf.row(0).as_str().trim().is_empty());
    }

    #[test]
    fn rewrap_joins_continued_rows_at_new_width() {
        let mut buf = LineBuf::new(2, 4);
        for (i, c) in "AB".chars().enumerate() {
            buf.row_mut(0).set_cell(i, Cell::new(c, CellAttrs::default()));
        }
        buf.row_mut(0).continued = true;
        for (i, c) in "CD".chars().enumerate() {
            buf.row_mut(1).set_cell(i, Cell::new(c, CellAttrs::default()));
        }
        let (rewrapped, _, _) = buf.rewrap(1, 8, (0, 0), None);
        assert_eq!(rewrapped.row(0).as_str().trim_end(), "ABCD");
    }
}
