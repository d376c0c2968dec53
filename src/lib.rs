//! The in-memory VT screen model: grid, scrollback, cursor and the modal
//! state machine driven by a parser collaborator's typed command calls.
//!
//! This crate does not parse escape sequences, talk to a PTY, or render
//! anything — see the module docs on [`screen::Screen`] for the command
//! surface a parser is expected to drive.

pub mod callbacks;
pub mod cell;
pub mod charset;
pub mod color;
pub mod cursor;
pub mod error;
pub mod history;
pub mod line;
pub mod linebuf;
pub mod mode_set;
pub mod savepoint;
pub mod screen;

#[cfg(test)]
mod tests;

pub use callbacks::{NopCallbacks, ScreenCallbacks};
pub use cell::{Cell, CellAttrs, Decoration, WidthClass};
pub use charset::{CharsetState, CharsetTable};
pub use color::{AnsiColor, ColorSpec};
pub use cursor::{Cursor, CursorShape};
pub use error::ScreenError;
pub use history::HistoryBuf;
pub use line::Line;
pub use linebuf::LineBuf;
pub use mode_set::{ModeSet, MouseTrackingMode, MouseTrackingProtocol};
pub use savepoint::{Savepoint, SavepointStack};
pub use screen::Screen;
