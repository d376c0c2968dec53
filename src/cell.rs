//! The single grid position: [`Cell`] and its style bits, [`CellAttrs`].

use crate::color::ColorSpec;
use bitflags::bitflags;

/// Maximum number of combining codepoints retained per cell. Additional
/// combining marks beyond this are silently dropped (§3 Cell).
pub const MAX_COMBINING: usize = 2;

/// Width class of a cell, per the data model in §3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthClass {
    /// The zero-width continuation cell that trails a wide leader.
    ZeroWidth,
    /// An ordinary single-column cell.
    Normal,
    /// The leading cell of a double-width glyph; the following cell holds
    /// `WidthClass::ZeroWidth` with `codepoint == 0`.
    WideLeader,
}

impl WidthClass {
    #[inline]
    pub fn as_cols(self) -> usize {
        match self {
            WidthClass::ZeroWidth => 0,
            WidthClass::Normal => 1,
            WidthClass::WideLeader => 2,
        }
    }
}

/// Underline/decoration style applied to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    None,
    Underline,
    CurlyUnderline,
}

bitflags! {
    /// Boolean style bits, packed the way the teacher crate packs
    /// `CellAttributes`'s intensity/underline/italic/... fields into a
    /// single bitfield rather than one bool per struct field.
    #[derive(Default)]
    pub struct CellAttrFlags: u8 {
        const BOLD      = 1 << 0;
        const ITALIC    = 1 << 1;
        const REVERSE   = 1 << 2;
        const STRIKE    = 1 << 3;
    }
}

/// Graphic rendition carried by a [`Cell`] (and by the cursor's "pen" while
/// it awaits the next draw).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellAttrs {
    pub foreground: ColorSpec,
    pub background: ColorSpec,
    pub decoration_fg: ColorSpec,
    pub flags: CellAttrFlags,
    pub decoration: Decoration,
}

impl Default for CellAttrs {
    fn default() -> Self {
        CellAttrs {
            foreground: ColorSpec::Default,
            background: ColorSpec::Default,
            decoration_fg: ColorSpec::Default,
            flags: CellAttrFlags::empty(),
            decoration: Decoration::None,
        }
    }
}

impl CellAttrs {
    #[inline]
    pub fn bold(&self) -> bool {
        self.flags.contains(CellAttrFlags::BOLD)
    }
    #[inline]
    pub fn set_bold(&mut self, on: bool) {
        self.flags.set(CellAttrFlags::BOLD, on);
    }
    #[inline]
    pub fn italic(&self) -> bool {
        self.flags.contains(CellAttrFlags::ITALIC)
    }
    #[inline]
    pub fn set_italic(&mut self, on: bool) {
        self.flags.set(CellAttrFlags::ITALIC, on);
    }
    #[inline]
    pub fn reverse(&self) -> bool {
        self.flags.contains(CellAttrFlags::REVERSE)
    }
    #[inline]
    pub fn set_reverse(&mut self, on: bool) {
        self.flags.set(CellAttrFlags::REVERSE, on);
    }
    #[inline]
    pub fn strike(&self) -> bool {
        self.flags.contains(CellAttrFlags::STRIKE)
    }
    #[inline]
    pub fn set_strike(&mut self, on: bool) {
        self.flags.set(CellAttrFlags::STRIKE, on);
    }
}

/// One grid position.
///
/// `codepoint == 0` means an empty cell. A wide glyph occupies two adjacent
/// cells: the leader cell (`width == WideLeader`) carries the real
/// codepoint, and the next cell (`width == ZeroWidth`, `codepoint == 0`) is
/// the non-printing continuation that reserves the column (§3 Line
/// invariant: a wide cell is never placed in the last column).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub codepoint: char,
    combining: [char; MAX_COMBINING],
    combining_len: u8,
    pub width: WidthClass,
    pub attrs: CellAttrs,
}

impl Default for Cell {
    fn default() -> Cell {
        Cell::blank()
    }
}

impl Cell {
    /// An empty cell with the default rendition.
    pub fn blank() -> Cell {
        Cell {
            codepoint: '\0',
            combining: ['\0'; MAX_COMBINING],
            combining_len: 0,
            width: WidthClass::Normal,
            attrs: CellAttrs::default(),
        }
    }

    /// An empty cell carrying the supplied rendition (used by erase
    /// operations, which clear text but keep the caller's pen color).
    pub fn blank_with_attrs(attrs: CellAttrs) -> Cell {
        Cell {
            attrs,
            ..Cell::blank()
        }
    }

    /// A normal-width printable cell.
    pub fn new(codepoint: char, attrs: CellAttrs) -> Cell {
        Cell {
            codepoint,
            combining: ['\0'; MAX_COMBINING],
            combining_len: 0,
            width: WidthClass::Normal,
            attrs,
        }
    }

    /// The zero-width continuation cell that trails a wide leader.
    pub fn wide_continuation() -> Cell {
        Cell {
            codepoint: '\0',
            combining: ['\0'; MAX_COMBINING],
            combining_len: 0,
            width: WidthClass::ZeroWidth,
            attrs: CellAttrs::default(),
        }
    }

    #[inline]
    pub fn is_blank(&self) -> bool {
        self.codepoint == '\0' || self.codepoint == ' '
    }

    pub fn combining_chars(&self) -> &[char] {
        &self.combining[0..self.combining_len as usize]
    }

    /// Attach a combining mark to this cell. Extra marks beyond
    /// [`MAX_COMBINING`] are dropped per the data model.
    pub fn add_combining(&mut self, c: char) {
        if (self.combining_len as usize) < MAX_COMBINING {
            self.combining[self.combining_len as usize] = c;
            self.combining_len += 1;
        }
    }

    /// Render this cell (plus any combining marks) as a `String`, mainly
    /// for tests and diagnostics.
    pub fn to_string_lossy(&self) -> String {
        let mut s = String::new();
        if self.codepoint != '\0' {
            s.push(self.codepoint);
        } else if self.width != WidthClass::ZeroWidth {
            s.push(' ');
        }
        for c in self.combining_chars() {
            s.push(*c);
        }
        s
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn blank_cell_is_blank() {
        assert!(Cell::blank().is_blank());
        assert_eq!(Cell::blank().to_string_lossy(), " ");
    }

    #[test]
    fn combining_marks_capped() {
        let mut cell = Cell::new('e', CellAttrs::default());
        cell.add_combining('\u{0301}');
        cell.add_combining('\u{0302}');
        cell.add_combining('\u{0303}'); // dropped, already at MAX_COMBINING
        assert_eq!(cell.combining_chars().len(), MAX_COMBINING);
    }

    #[test]
    fn style_flags_round_trip() {
        let mut attrs = CellAttrs::default();
        attrs.set_bold(true);
        attrs.set_strike(true);
        assert!(attrs.bold());
        assert!(attrs.strike());
        assert!(!attrs.italic());
        attrs.set_bold(false);
        assert!(!attrs.bold());
    }
}
