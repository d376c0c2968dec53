//! G0/G1 charset selection and substitution, grounded on the teacher's
//! `terminalstate/performer.rs` shift-out substitution tables.

/// A designatable character set. Only the two the teacher's substitution
/// table covers are modeled; any other designation request is logged and
/// ignored (falls back to `Ascii`), per §7's "never fatal" rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharsetTable {
    Ascii,
    /// DEC Special Graphics and Line Drawing set (the box-drawing glyphs
    /// substituted for `j`-`~`/`_` etc).
    DecLineDrawing,
    Uk,
}

impl Default for CharsetTable {
    fn default() -> Self {
        CharsetTable::Ascii
    }
}

impl CharsetTable {
    /// Map an incoming ASCII byte through this charset's substitution
    /// table. Codepoints outside the table's remapped range pass through
    /// unchanged.
    pub fn substitute(self, c: char) -> char {
        match self {
            CharsetTable::Ascii => c,
            CharsetTable::Uk => {
                if c == '#' {
                    '\u{a3}' // pound sign
                } else {
                    c
                }
            }
            CharsetTable::DecLineDrawing => dec_line_drawing(c),
        }
    }
}

/// DEC Special Graphics substitution, covering the ``\`` through `~` byte
/// range as specified by VT100 and reproduced by the teacher's
/// `performer.rs`.
fn dec_line_drawing(c: char) -> char {
    match c {
        '`' => '\u{25c6}', // diamond
        'a' => '\u{2592}', // checkerboard
        'b' => '\u{2409}', // HT
        'c' => '\u{240c}', // FF
        'd' => '\u{240d}', // CR
        'e' => '\u{240a}', // LF
        'f' => '\u{00b0}', // degree
        'g' => '\u{00b1}', // plus/minus
        'h' => '\u{2424}', // NL
        'i' => '\u{240b}', // VT
        'j' => '\u{2518}', // bottom-right corner
        'k' => '\u{2510}', // top-right corner
        'l' => '\u{250c}', // top-left corner
        'm' => '\u{2514}', // bottom-left corner
        'n' => '\u{253c}', // crossing lines
        'o' => '\u{23ba}', // scan line 1
        'p' => '\u{23bb}', // scan line 3
        'q' => '\u{2500}', // horizontal line
        'r' => '\u{23bc}', // scan line 7
        's' => '\u{23bd}', // scan line 9
        't' => '\u{251c}', // left tee
        'u' => '\u{2524}', // right tee
        'v' => '\u{2534}', // bottom tee
        'w' => '\u{252c}', // top tee
        'x' => '\u{2502}', // vertical line
        'y' => '\u{2264}', // less than or equal
        'z' => '\u{2265}', // greater than or equal
        '{' => '\u{03c0}', // pi
        '|' => '\u{2260}', // not equal
        '}' => '\u{00a3}', // pound
        '~' => '\u{00b7}', // centered dot
        other => other,
    }
}

/// Which designated set (G0 or G1) is currently being shifted into
/// `GL` (the left graphic set, the one printable codes draw from), plus
/// each designation slot's table and whether UTF-8 decoding is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharsetState {
    pub g0: CharsetTable,
    pub g1: CharsetTable,
    shift_out: bool,
    /// True unless a single-session-wide DEC national-replacement mode has
    /// forced 8-bit/Latin-1 interpretation of drawn bytes. The parser that
    /// would flip this is out of scope; it exists so `Screen::draw` has a
    /// place to honor it if ever driven directly.
    pub utf8: bool,
}

impl Default for CharsetState {
    fn default() -> Self {
        CharsetState {
            g0: CharsetTable::Ascii,
            g1: CharsetTable::Ascii,
            shift_out: false,
            utf8: true,
        }
    }
}

impl CharsetState {
    pub fn new() -> CharsetState {
        CharsetState::default()
    }

    /// SI/SO: select G0/G1 into GL.
    pub fn shift_in(&mut self) {
        self.shift_out = false;
    }

    pub fn shift_out(&mut self) {
        self.shift_out = true;
    }

    pub fn is_shifted_out(&self) -> bool {
        self.shift_out
    }

    /// The table currently active in GL.
    pub fn active(&self) -> CharsetTable {
        if self.shift_out {
            self.g1
        } else {
            self.g0
        }
    }

    /// Apply the active table's substitution to a drawn codepoint.
    pub fn translate(&self, c: char) -> char {
        self.active().substitute(c)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn line_drawing_substitutes_box_glyphs() {
        assert_eq!(CharsetTable::DecLineDrawing.substitute('q'), '\u{2500}');
        assert_eq!(CharsetTable::DecLineDrawing.substitute('j'), '\u{2518}');
        assert_eq!(CharsetTable::DecLineDrawing.substitute('A'), 'A');
    }

    #[test]
    fn shift_out_switches_active_table() {
        let mut state = CharsetState::new();
        state.g1 = CharsetTable::DecLineDrawing;
        assert_eq!(state.translate('q'), 'q');
        state.shift_out();
        assert_eq!(state.translate('q'), '\u{2500}');
        state.shift_in();
        assert_eq!(state.translate('q'), 'q');
    }

    #[test]
    fn uk_charset_substitutes_pound_sign() {
        let mut state = CharsetState::new();
        state.g0 = CharsetTable::Uk;
        assert_eq!(state.translate('#'), '\u{a3}');
        assert_eq!(state.translate('$'), '$');
    }
}
