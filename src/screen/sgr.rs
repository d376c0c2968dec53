//! SGR — Select Graphic Rendition (§4.6).
//!
//! Grounded on `terminalstate/mod.rs`'s SGR parameter-consuming loop
//! (sub-params for 38/48 extended color). The curly-underline selector and
//! the underline/decoration color codes (58/59) aren't given explicit
//! numbers in the data model, so this uses the real widely-implemented
//! ones: `4` with a trailing `;3` style sub-param (kitty/iTerm extended
//! underline convention — only `3` is ever consumed as the sub-param; any
//! other following code, e.g. `4;1`, is left alone and processed as its own
//! top-level SGR code on the next loop iteration) and `58`/`59` (the
//! standardized underline-color codes), recorded as a judgment call in the
//! design notes.

use super::Screen;
use crate::cell::Decoration;
use crate::color::ColorSpec;

impl Screen {
    pub fn select_graphic_rendition(&mut self, params: &[u32]) {
        let params: &[u32] = if params.is_empty() { &[0] } else { params };
        let mut i = 0;
        while i < params.len() {
            match params[i] {
                0 => self.cursor.pen = Default::default(),
                1 => self.cursor.pen.set_bold(true),
                22 => self.cursor.pen.set_bold(false),
                3 => self.cursor.pen.set_italic(true),
                23 => self.cursor.pen.set_italic(false),
                4 => {
                    if i + 1 < params.len() && params[i + 1] == 3 {
                        self.cursor.pen.decoration = Decoration::CurlyUnderline;
                        i += 1;
                    } else {
                        self.cursor.pen.decoration = Decoration::Underline;
                    }
                }
                24 => self.cursor.pen.decoration = Decoration::None,
                7 => self.cursor.pen.set_reverse(true),
                27 => self.cursor.pen.set_reverse(false),
                9 => self.cursor.pen.set_strike(true),
                29 => self.cursor.pen.set_strike(false),
                code @ 30..=37 => self.cursor.pen.foreground = ColorSpec::PaletteIndex((code - 30) as u8),
                38 => i += consume_extended_color(&params[i + 1..], &mut self.cursor.pen, true),
                39 => self.cursor.pen.foreground = ColorSpec::Default,
                code @ 40..=47 => self.cursor.pen.background = ColorSpec::PaletteIndex((code - 40) as u8),
                48 => i += consume_extended_color(&params[i + 1..], &mut self.cursor.pen, false),
                49 => self.cursor.pen.background = ColorSpec::Default,
                58 => {
                    let rest = &params[i + 1..];
                    if let Some(color) = extended_color(rest.first().copied(), &rest[1.min(rest.len())..]) {
                        self.cursor.pen.decoration_fg = color;
                    }
                    i += extended_color_len(rest);
                }
                59 => self.cursor.pen.decoration_fg = ColorSpec::Default,
                code @ 90..=97 => self.cursor.pen.foreground = ColorSpec::PaletteIndex((code - 90 + 8) as u8),
                code @ 100..=107 => self.cursor.pen.background = ColorSpec::PaletteIndex((code - 100 + 8) as u8),
                _ => {}
            }
            i += 1;
        }
    }
}

fn extended_color_len(rest: &[u32]) -> usize {
    match rest.first() {
        Some(5) => 2,
        Some(2) => 4,
        _ => 0,
    }
}

fn extended_color(kind: Option<u32>, tail: &[u32]) -> Option<ColorSpec> {
    match kind {
        Some(5) => Some(ColorSpec::PaletteIndex(tail.first().copied().unwrap_or(0) as u8)),
        Some(2) => Some(ColorSpec::Rgb {
            red: tail.first().copied().unwrap_or(0) as u8,
            green: tail.get(1).copied().unwrap_or(0) as u8,
            blue: tail.get(2).copied().unwrap_or(0) as u8,
        }),
        _ => None,
    }
}

fn consume_extended_color(rest: &[u32], pen: &mut crate::cell::CellAttrs, is_fg: bool) -> usize {
    let tail = &rest[1.min(rest.len())..];
    if let Some(color) = extended_color(rest.first().copied(), tail) {
        if is_fg {
            pen.foreground = color;
        } else {
            pen.background = color;
        }
    }
    extended_color_len(rest)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::callbacks::NopCallbacks;

    fn screen() -> Screen {
        Screen::new(2, 4, 10, Box::new(NopCallbacks))
    }

    #[test]
    fn reset_code_clears_rendition() {
        let mut s = screen();
        s.select_graphic_rendition(&[1, 7]);
        assert!(s.cursor.pen.bold());
        s.select_graphic_rendition(&[0]);
        assert_eq!(s.cursor.pen, Default::default());
    }

    #[test]
    fn truecolor_extended_fg() {
        let mut s = screen();
        s.select_graphic_rendition(&[38, 2, 10, 20, 30]);
        assert_eq!(
            s.cursor.pen.foreground,
            ColorSpec::Rgb {
                red: 10,
                green: 20,
                blue: 30
            }
        );
        s.draw('A');
        assert_eq!(s.line(0).unwrap().cell(0).attrs.foreground.pack(), (10u32 << 24) | (20u32 << 16) | (30u32 << 8) | 2);
    }

    #[test]
    fn palette_256_extended_bg() {
        let mut s = screen();
        s.select_graphic_rendition(&[48, 5, 200]);
        assert_eq!(s.cursor.pen.background, ColorSpec::PaletteIndex(200));
    }

    #[test]
    fn bright_fg_codes_offset_palette_by_eight() {
        let mut s = screen();
        s.select_graphic_rendition(&[93]);
        assert_eq!(s.cursor.pen.foreground, ColorSpec::PaletteIndex(11));
    }
}
