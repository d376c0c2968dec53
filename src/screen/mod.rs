//! [`Screen`]: the top-level aggregate tying the grid, scrollback, cursor
//! and modal state together, and the command surface a parser collaborator
//! drives.
//!
//! Grounded on `terminalstate/mod.rs`'s `TerminalState` struct (the same
//! grouping of two `LineBuf`-equivalents, a cursor, mode bits and
//! save-stacks behind one object) and `term/src/lib.rs`'s `draw`/`print`
//! wrap handling. Split across files the way `terminalstate/` splits
//! `mod.rs` (struct + core state machine) from `performer.rs` (one concern
//! per file, same module tree so private fields stay reachable).

mod editing;
mod modes;
mod reports;
mod sgr;

use unicode_width::UnicodeWidthChar;

use crate::callbacks::ScreenCallbacks;
use crate::cell::{Cell, CellAttrs};
use crate::charset::CharsetState;
use crate::cursor::Cursor;
use crate::error::ScreenError;
use crate::history::HistoryBuf;
use crate::line::Line;
use crate::linebuf::LineBuf;
use crate::mode_set::{ModeSet, MouseTrackingMode, MouseTrackingProtocol};
use crate::savepoint::{Savepoint, SavepointStack};

/// The spacing between automatically-primed tab stops (§3 lifecycle: "preset
/// every 8 columns starting at column 8").
const TAB_STOP_INTERVAL: usize = 8;

pub struct Screen {
    main: LineBuf,
    alt: LineBuf,
    history: HistoryBuf,
    using_alt: bool,
    tabstops_main: Vec<bool>,
    tabstops_alt: Vec<bool>,
    cursor: Cursor,
    modes: ModeSet,
    mouse_tracking_mode: MouseTrackingMode,
    mouse_tracking_protocol: MouseTrackingProtocol,
    savepoints_main: SavepointStack,
    savepoints_alt: SavepointStack,
    charsets: CharsetState,
    margin_top: usize,
    margin_bottom: usize,
    is_dirty: bool,
    cursor_changed: bool,
    history_line_added_count: usize,
    callbacks: Box<dyn ScreenCallbacks>,
    lines: usize,
    columns: usize,
    scrollback_capacity: usize,
}

impl Screen {
    pub fn new(
        lines: usize,
        columns: usize,
        scrollback_capacity: usize,
        callbacks: Box<dyn ScreenCallbacks>,
    ) -> Screen {
        let lines = lines.max(1);
        let columns = columns.max(1);
        Screen {
            main: LineBuf::new(lines, columns),
            alt: LineBuf::new(lines, columns),
            history: HistoryBuf::new(scrollback_capacity),
            using_alt: false,
            tabstops_main: init_tabstops(columns),
            tabstops_alt: init_tabstops(columns),
            cursor: Cursor::new(),
            modes: ModeSet::default(),
            mouse_tracking_mode: MouseTrackingMode::default(),
            mouse_tracking_protocol: MouseTrackingProtocol::default(),
            savepoints_main: SavepointStack::new(),
            savepoints_alt: SavepointStack::new(),
            charsets: CharsetState::new(),
            margin_top: 0,
            margin_bottom: lines - 1,
            is_dirty: false,
            cursor_changed: false,
            history_line_added_count: 0,
            callbacks,
            lines,
            columns,
            scrollback_capacity,
        }
    }

    /// Return to power-on defaults, preserving size, scrollback capacity
    /// and the callback sink.
    pub fn reset(&mut self) {
        self.main = LineBuf::new(self.lines, self.columns);
        self.alt = LineBuf::new(self.lines, self.columns);
        self.history = HistoryBuf::new(self.scrollback_capacity);
        self.using_alt = false;
        self.tabstops_main = init_tabstops(self.columns);
        self.tabstops_alt = init_tabstops(self.columns);
        self.cursor = Cursor::new();
        self.modes = ModeSet::default();
        self.mouse_tracking_mode = MouseTrackingMode::default();
        self.mouse_tracking_protocol = MouseTrackingProtocol::default();
        self.savepoints_main = SavepointStack::new();
        self.savepoints_alt = SavepointStack::new();
        self.charsets = CharsetState::new();
        self.margin_top = 0;
        self.margin_bottom = self.lines - 1;
        self.history_line_added_count = 0;
        self.is_dirty = true;
        self.cursor_changed = true;
    }

    /// Rewrap both buffers and history at the new size.
    pub fn resize(&mut self, new_lines: usize, new_columns: usize) -> Result<(), ScreenError> {
        if new_lines == 0 || new_columns == 0 {
            return Err(ScreenError::AllocationFailure {
                rows: new_lines,
                cols: new_columns,
                reason: "screen dimensions must be non-zero".to_string(),
            });
        }

        let old_cursor = (self.cursor.x, self.cursor.y);
        let taken_main = std::mem::replace(&mut self.main, LineBuf::new(1, 1));
        let (new_main, cx, cy) =
            taken_main.rewrap(new_lines, new_columns, old_cursor, Some(&mut self.history));
        self.main = new_main;

        let taken_alt = std::mem::replace(&mut self.alt, LineBuf::new(1, 1));
        let (new_alt, _, _) = taken_alt.rewrap(new_lines, new_columns, (0, 0), None);
        self.alt = new_alt;

        self.history.rewrap(new_columns);

        self.tabstops_main = init_tabstops(new_columns);
        self.tabstops_alt = init_tabstops(new_columns);
        self.lines = new_lines;
        self.columns = new_columns;
        self.margin_top = 0;
        self.margin_bottom = new_lines - 1;
        self.cursor.x = cx;
        self.cursor.y = cy;
        self.ensure_bounds(false);

        if !self.using_alt {
            let overruns = self.main.row(self.cursor.y).continued || self.cursor.x >= new_columns;
            if overruns {
                self.index();
            }
        }

        self.is_dirty = true;
        self.cursor_changed = true;
        Ok(())
    }

    fn active_linebuf(&self) -> &LineBuf {
        if self.using_alt {
            &self.alt
        } else {
            &self.main
        }
    }

    fn active_linebuf_mut(&mut self) -> &mut LineBuf {
        if self.using_alt {
            &mut self.alt
        } else {
            &mut self.main
        }
    }

    fn active_tabstops(&self) -> &[bool] {
        if self.using_alt {
            &self.tabstops_alt
        } else {
            &self.tabstops_main
        }
    }

    fn active_tabstops_mut(&mut self) -> &mut Vec<bool> {
        if self.using_alt {
            &mut self.tabstops_alt
        } else {
            &mut self.tabstops_main
        }
    }

    fn active_savepoints_mut(&mut self) -> &mut SavepointStack {
        if self.using_alt {
            &mut self.savepoints_alt
        } else {
            &mut self.savepoints_main
        }
    }

    // ---- drawing (§4.1) ----------------------------------------------

    pub fn draw(&mut self, codepoint: char) {
        if is_ignored_control(codepoint) {
            return;
        }
        let translated = if (codepoint as u32) < 256 {
            self.charsets.translate(codepoint)
        } else {
            codepoint
        };
        let w = safe_wcwidth(translated);

        if w > 0 && self.columns.saturating_sub(self.cursor.x) < w {
            if self.modes.contains(ModeSet::AUTOWRAP) {
                let wrapped_from = self.cursor.y;
                self.carriage_return();
                self.linefeed();
                self.active_linebuf_mut().row_mut(wrapped_from).continued = true;
            } else {
                self.cursor.x = self.columns - w;
            }
        }

        if w > 0 {
            let x = self.cursor.x;
            let y = self.cursor.y;
            if self.modes.contains(ModeSet::INSERT) {
                let pen = self.cursor.pen;
                self.active_linebuf_mut().row_mut(y).shift_right(x, w, pen);
            }
            let cell = drawn_cell(translated, w, self.cursor.pen);
            self.active_linebuf_mut().row_mut(y).set_cell(x, cell);
            self.cursor.x += w;
            self.is_dirty = true;
            self.cursor_changed = true;
        } else {
            let (px, py) = self.preceding_cell_position();
            self.active_linebuf_mut()
                .row_mut(py)
                .cell_mut(px)
                .add_combining(translated);
            self.is_dirty = true;
        }
    }

    fn preceding_cell_position(&self) -> (usize, usize) {
        if self.cursor.x == 0 {
            if self.cursor.y == 0 {
                (0, 0)
            } else {
                (self.columns.saturating_sub(1), self.cursor.y - 1)
            }
        } else {
            (self.cursor.x - 1, self.cursor.y)
        }
    }

    // ---- cursor motion and bounds (§4.2) ------------------------------

    pub fn ensure_bounds(&mut self, force_margins: bool) {
        self.cursor.x = self.cursor.x.min(self.columns.saturating_sub(1));
        let (top, bottom) = if force_margins || self.modes.contains(ModeSet::ORIGIN) {
            (self.margin_top, self.margin_bottom)
        } else {
            (0, self.lines.saturating_sub(1))
        };
        self.cursor.y = self.cursor.y.clamp(top, bottom);
    }

    /// 1-based `(line, col)`, per DECCUP/HVP.
    pub fn cursor_position(&mut self, line: usize, col: usize) {
        let mut y = line.saturating_sub(1);
        let x = col.saturating_sub(1);
        if self.modes.contains(ModeSet::ORIGIN) {
            y = (self.margin_top + y).min(self.margin_bottom);
        }
        self.cursor.x = x;
        self.cursor.y = y;
        self.ensure_bounds(false);
        self.cursor_changed = true;
    }

    pub fn cursor_back(&mut self, n: usize) {
        self.cursor.x = self.cursor.x.saturating_sub(n);
        self.cursor_changed = true;
    }

    pub fn cursor_forward(&mut self, n: usize) {
        self.cursor.x = (self.cursor.x + n).min(self.columns.saturating_sub(1));
        self.cursor_changed = true;
    }

    pub fn cursor_up(&mut self, n: usize, carriage_return: bool) {
        self.cursor.y = self.cursor.y.saturating_sub(n);
        if carriage_return {
            self.cursor.x = 0;
        }
        self.ensure_bounds(false);
        self.cursor_changed = true;
    }

    pub fn cursor_down(&mut self, n: usize, carriage_return: bool) {
        self.cursor.y = (self.cursor.y + n).min(self.lines.saturating_sub(1));
        if carriage_return {
            self.cursor.x = 0;
        }
        self.ensure_bounds(false);
        self.cursor_changed = true;
    }

    pub fn tab(&mut self) {
        let tabstops = self.active_tabstops();
        let mut target = self.columns.saturating_sub(1);
        for i in self.cursor.x + 1..self.columns {
            if tabstops[i] {
                target = i;
                break;
            }
        }
        self.cursor.x = target;
        self.cursor_changed = true;
    }

    pub fn backtab(&mut self, n: usize) {
        for _ in 0..n {
            let mut target = 0;
            if self.cursor.x > 0 {
                let tabstops = self.active_tabstops();
                for j in (0..self.cursor.x).rev() {
                    if tabstops[j] {
                        target = j;
                        break;
                    }
                }
            }
            self.cursor.x = target;
        }
        self.cursor_changed = true;
    }

    pub fn set_tab_stop(&mut self) {
        let x = self.cursor.x;
        self.active_tabstops_mut()[x] = true;
    }

    pub fn clear_tab_stop(&mut self, how: u16) {
        match how {
            0 => {
                let x = self.cursor.x;
                self.active_tabstops_mut()[x] = false;
            }
            3 => {
                let tabstops = self.active_tabstops_mut();
                for stop in tabstops.iter_mut() {
                    *stop = false;
                }
            }
            2 => {}
            other => {
                log::warn!("unsupported clear-tabstop mode {}", other);
            }
        }
    }

    // ---- scrolling (§4.3) ---------------------------------------------

    pub fn index(&mut self) {
        if self.cursor.y == self.margin_bottom {
            self.index_up();
        } else {
            self.cursor.y += 1;
        }
        self.cursor_changed = true;
    }

    fn index_up(&mut self) {
        let top = self.margin_top;
        let bottom = self.margin_bottom;
        let is_main = !self.using_alt;
        let no_bottom_margin = bottom == self.lines.saturating_sub(1);
        let departed = self.active_linebuf_mut().index(top, bottom);
        if is_main && no_bottom_margin {
            self.history.push(departed);
            self.history_line_added_count += 1;
        }
        self.is_dirty = true;
    }

    pub fn scroll(&mut self, n: usize) {
        for _ in 0..n.min(self.lines) {
            self.index_up();
        }
        self.cursor_changed = true;
    }

    pub fn reverse_index(&mut self) {
        if self.cursor.y == self.margin_top {
            let top = self.margin_top;
            let bottom = self.margin_bottom;
            self.active_linebuf_mut().reverse_index(top, bottom);
            self.is_dirty = true;
        } else {
            self.cursor.y -= 1;
        }
        self.cursor_changed = true;
    }

    pub fn linefeed(&mut self) {
        self.index();
        if self.modes.contains(ModeSet::LINEFEED_NEWLINE) {
            self.carriage_return();
        }
        self.ensure_bounds(false);
    }

    pub fn carriage_return(&mut self) {
        self.cursor.x = 0;
        self.cursor_changed = true;
    }

    // ---- alt buffer + save/restore (§4.4) ------------------------------

    pub fn set_alt_screen(&mut self, want_alt: bool) {
        if want_alt == self.using_alt {
            return;
        }
        if want_alt {
            self.enter_alt_screen();
        } else {
            self.leave_alt_screen();
        }
    }

    pub fn is_alt_screen(&self) -> bool {
        self.using_alt
    }

    fn enter_alt_screen(&mut self) {
        self.alt = LineBuf::new(self.lines, self.columns);
        let point = self.make_savepoint();
        self.savepoints_main.push(point);
        self.using_alt = true;
        self.cursor = Cursor::new();
        self.callbacks.buf_toggled(false);
        self.is_dirty = true;
        self.cursor_changed = true;
    }

    fn leave_alt_screen(&mut self) {
        self.using_alt = false;
        if let Some(point) = self.savepoints_main.pop() {
            self.restore_from_savepoint(point);
        }
        self.callbacks.buf_toggled(true);
        self.is_dirty = true;
        self.cursor_changed = true;
    }

    fn make_savepoint(&self) -> Savepoint {
        Savepoint {
            cursor: self.cursor,
            origin_mode: self.modes.contains(ModeSet::ORIGIN),
            autowrap: self.modes.contains(ModeSet::AUTOWRAP),
            reverse_video: self.modes.contains(ModeSet::REVERSE_VIDEO),
            charsets: self.charsets,
        }
    }

    fn restore_from_savepoint(&mut self, point: Savepoint) {
        self.cursor = point.cursor;
        self.modes.set(ModeSet::ORIGIN, point.origin_mode);
        self.modes.set(ModeSet::AUTOWRAP, point.autowrap);
        self.modes.set(ModeSet::REVERSE_VIDEO, point.reverse_video);
        self.charsets = point.charsets;
    }

    pub fn save_cursor(&mut self) {
        let point = self.make_savepoint();
        self.active_savepoints_mut().push(point);
    }

    pub fn restore_cursor(&mut self) {
        match self.active_savepoints_mut().pop() {
            Some(point) => self.restore_from_savepoint(point),
            None => {
                self.cursor.x = 0;
                self.cursor.y = 0;
                self.modes.remove(ModeSet::ORIGIN);
                self.modes.remove(ModeSet::REVERSE_VIDEO);
                self.charsets = CharsetState::default();
            }
        }
        self.ensure_bounds(false);
        self.cursor_changed = true;
    }

    // ---- margins and charsets (§4.9, §4.10) ----------------------------

    /// 1-based `(top, bottom)`; `0` means "end" on either side.
    pub fn set_margins(&mut self, top: usize, bottom: usize) {
        let top0 = top.saturating_sub(1);
        let bottom0 = if bottom == 0 {
            self.lines - 1
        } else {
            bottom - 1
        };
        if bottom0 > top0 {
            self.margin_top = top0;
            self.margin_bottom = bottom0;
        }
        self.cursor.x = 0;
        self.cursor.y = 0;
        self.ensure_bounds(false);
        self.cursor_changed = true;
    }

    /// `CharsetState::active()` re-reads `g0`/`g1` on every call rather than
    /// caching a pointer into one of them, so rebinding the slot the active
    /// pointer currently selects takes effect immediately with no separate
    /// step to "move the pointer along".
    pub fn designate_charset(&mut self, which: u8, table: crate::charset::CharsetTable) {
        match which {
            0 => self.charsets.g0 = table,
            1 => self.charsets.g1 = table,
            other => log::warn!("unsupported charset slot {}", other),
        }
    }

    pub fn change_charset(&mut self, which: u8) {
        match which {
            0 => self.charsets.shift_in(),
            1 => self.charsets.shift_out(),
            other => log::warn!("unsupported charset slot {}", other),
        }
    }

    pub fn use_latin1(&mut self, on: bool) {
        self.charsets.utf8 = !on;
        self.callbacks.use_utf8(!on);
    }

    // ---- dirty accounting (§5) ------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn cursor_changed(&self) -> bool {
        self.cursor_changed
    }

    pub fn reset_dirty(&mut self) {
        self.is_dirty = false;
        self.cursor_changed = false;
        self.history_line_added_count = 0;
    }

    pub fn history_line_added_count(&self) -> usize {
        self.history_line_added_count
    }

    // ---- plain accessors -------------------------------------------------

    pub fn lines_count(&self) -> usize {
        self.lines
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn modes(&self) -> ModeSet {
        self.modes
    }

    pub fn mouse_tracking_mode(&self) -> MouseTrackingMode {
        self.mouse_tracking_mode
    }

    pub fn mouse_tracking_protocol(&self) -> MouseTrackingProtocol {
        self.mouse_tracking_protocol
    }

    pub fn line(&self, y: usize) -> Result<&Line, ScreenError> {
        if y >= self.lines {
            return Err(ScreenError::BoundsViolation {
                index: y,
                limit: self.lines,
            });
        }
        Ok(self.active_linebuf().row(y))
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_line(&self, index: usize) -> Option<&Line> {
        self.history.line(index)
    }
}

fn init_tabstops(columns: usize) -> Vec<bool> {
    let mut stops = vec![false; columns];
    let mut i = TAB_STOP_INTERVAL;
    while i < columns {
        stops[i] = true;
        i += TAB_STOP_INTERVAL;
    }
    stops
}

fn is_ignored_control(c: char) -> bool {
    matches!(c as u32, 0x00..=0x1f | 0x7f..=0x9f)
}

/// Clamp a codepoint's display width into `[0, 2]`; codepoints the
/// `unicode-width` table has no opinion on (mostly other C0/C1 controls
/// that slipped through) default to 1 rather than being treated as
/// negative, per the data model.
fn safe_wcwidth(c: char) -> usize {
    match UnicodeWidthChar::width(c) {
        Some(w) => w.min(2),
        None => 1,
    }
}

fn drawn_cell(codepoint: char, width: usize, pen: CellAttrs) -> Cell {
    let mut cell = Cell::new(codepoint, pen);
    if width == 2 {
        cell.width = crate::cell::WidthClass::WideLeader;
    }
    cell
}
