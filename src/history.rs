//! [`HistoryBuf`]: fixed-capacity scrollback ring, attached only to the main
//! screen buffer (§3 data model: "History associated only with main
//! screen").
//!
//! Grounded on the teacher's `Screen` combining visible rows and scrollback
//! into one `VecDeque<Line>` and evicting from the front once a capacity is
//! exceeded; this crate keeps scrollback as its own ring so `LineBuf` stays
//! free of history bookkeeping.

use std::collections::VecDeque;

use crate::line::Line;

/// A fixed-capacity ring of scrollback lines, oldest-first.
#[derive(Debug, Clone)]
pub struct HistoryBuf {
    lines: VecDeque<Line>,
    capacity: usize,
    /// Running count of lines ever evicted by overflow, exposed so
    /// `Screen::history_line_added_count` can report scrollback growth
    /// without callers needing to diff snapshots.
    added_count: usize,
}

impl HistoryBuf {
    pub fn new(capacity: usize) -> HistoryBuf {
        HistoryBuf {
            lines: VecDeque::with_capacity(capacity.min(4096)),
            capacity,
            added_count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of lines ever pushed, including ones since evicted.
    pub fn added_count(&self) -> usize {
        self.added_count
    }

    /// Push a line that scrolled off the top of the main screen. If the
    /// buffer is already at capacity, the oldest line is dropped to make
    /// room (capacity 0 means history is disabled and every push is a
    /// no-op).
    pub fn push(&mut self, line: Line) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
        self.added_count += 1;
    }

    /// `0` is the oldest retained line, `len() - 1` the most recently
    /// scrolled-off line.
    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Rebuild scrollback at a new column width, using the same
    /// join-then-rebreak algorithm as `LineBuf::rewrap`. Capacity is
    /// preserved; if reflowing produces more lines than fit, the oldest are
    /// dropped (scrollback has no further history of its own to spill
    /// into).
    pub fn rewrap(&mut self, new_columns: usize) {
        let mut flat: Vec<Line> = Vec::new();
        let mut pending: Option<Line> = None;
        for line in self.lines.drain(..) {
            let was_continued = line.continued;
            let joined = match pending.take() {
                None => line,
                Some(mut prior) => {
                    prior.append(line);
                    prior
                }
            };
            if was_continued {
                pending = Some(joined);
                continue;
            }
            flat.extend(joined.wrap(new_columns));
        }
        if let Some(joined) = pending {
            flat.extend(joined.wrap(new_columns));
        }
        let overflow = flat.len().saturating_sub(self.capacity);
        self.lines = flat.into_iter().skip(overflow).collect();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cell::{Cell, CellAttrs};

    #[test]
    fn evicts_oldest_past_capacity() {
        let mut hist = HistoryBuf::new(2);
        hist.push(Line::blank(4));
        hist.push(Line::blank(4));
        hist.push(Line::blank(4));
        assert_eq!(hist.len(), 2);
        assert_eq!(hist.added_count(), 3);
    }

    #[test]
    fn zero_capacity_disables_history() {
        let mut hist = HistoryBuf::new(0);
        hist.push(Line::blank(4));
        assert_eq!(hist.len(), 0);
        assert_eq!(hist.added_count(), 0);
    }

    #[test]
    fn rewrap_preserves_text_across_width_change() {
        let mut hist = HistoryBuf::new(10);
        let mut line = Line::blank(4);
        line.set_cell(0, Cell::new('H', CellAttrs::default()));
        line.set_cell(1, Cell::new('I', CellAttrs::default()));
        hist.push(line);
        hist.rewrap(2);
        assert_eq!(hist.line(0).unwrap().as_str(), "HI");
    }
}
