//! Packed color attribute encoding.
//!
//! A [`ColorSpec`] is carried around as a plain `u32` inside [`crate::cell::Cell`]
//! so that cells stay cheap to copy; this module is the only place that
//! knows how to pack and unpack that representation. The low byte is a
//! discriminant (0 = default, 1 = palette index, 2 = direct RGB), mirroring
//! the tagged encoding the teacher crate uses for `ColorAttribute`, just
//! flattened into a single word instead of an enum with a discriminant tag.

/// A resolved color value for a cell's foreground, background, or
/// underline/decoration color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpec {
    /// Use the pen/terminal default for this slot.
    Default,
    /// An index into the (externally resolved) 8/16/256 color palette.
    PaletteIndex(u8),
    /// A direct 24-bit RGB color.
    Rgb { red: u8, green: u8, blue: u8 },
}

impl Default for ColorSpec {
    fn default() -> Self {
        ColorSpec::Default
    }
}

impl ColorSpec {
    /// Pack into the wire format described in the data model: low byte is
    /// the discriminant, remaining bytes hold the payload.
    #[inline]
    pub fn pack(self) -> u32 {
        match self {
            ColorSpec::Default => 0,
            ColorSpec::PaletteIndex(idx) => ((idx as u32) << 8) | 1,
            ColorSpec::Rgb { red, green, blue } => {
                ((red as u32) << 24) | ((green as u32) << 16) | ((blue as u32) << 8) | 2
            }
        }
    }

    #[inline]
    pub fn unpack(value: u32) -> ColorSpec {
        match value & 0xff {
            1 => ColorSpec::PaletteIndex(((value >> 8) & 0xff) as u8),
            2 => ColorSpec::Rgb {
                red: ((value >> 24) & 0xff) as u8,
                green: ((value >> 16) & 0xff) as u8,
                blue: ((value >> 8) & 0xff) as u8,
            },
            _ => ColorSpec::Default,
        }
    }
}

/// Convenience: the xterm 16-color palette indices used by SGR 30-37/90-97
/// and 40-47/100-107. Only the numbering is needed here; resolving an index
/// to an actual RGB swatch is a rendering concern and out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AnsiColor {
    Black = 0,
    Maroon = 1,
    Green = 2,
    Olive = 3,
    Navy = 4,
    Purple = 5,
    Teal = 6,
    Silver = 7,
    Grey = 8,
    Red = 9,
    Lime = 10,
    Yellow = 11,
    Blue = 12,
    Fuschia = 13,
    Aqua = 14,
    White = 15,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trips_default() {
        assert_eq!(ColorSpec::unpack(ColorSpec::Default.pack()), ColorSpec::Default);
    }

    #[test]
    fn round_trips_palette() {
        let c = ColorSpec::PaletteIndex(200);
        assert_eq!(ColorSpec::unpack(c.pack()), c);
    }

    #[test]
    fn round_trips_truecolor() {
        let c = ColorSpec::Rgb {
            red: 10,
            green: 20,
            blue: 30,
        };
        assert_eq!(c.pack(), (10u32 << 24) | (20u32 << 16) | (30u32 << 8) | 2);
        assert_eq!(ColorSpec::unpack(c.pack()), c);
    }
}
