//! 8x8 bitmap font.
//!
//! Each glyph is eight row bytes, top row first. Bit 7 of a row is the
//! left-most pixel of the unrotated character; the orientation transform
//! takes care of how that lands on a mounted module.

/// One unrotated 8x8 character bitmap.
pub type Glyph = [u8; 8];

/// Height and width of every glyph.
pub const GLYPH_SIZE: usize = 8;

/// Shown for anything the tables do not cover.
pub const FALLBACK: Glyph = [
    0b0000_0000,
    0b0000_1000,
    0b0010_1010,
    0b0001_1100,
    0b0111_0111,
    0b0001_1100,
    0b0010_1010,
    0b0000_1000,
];

/// All LEDs off.
pub const BLANK: Glyph = [0; GLYPH_SIZE];

/// Returns the bitmap for `c`.
///
/// Covers `A-Z`, `a-z`, `0-9` and space. Everything else maps to
/// [`FALLBACK`], there is no way to report an unrenderable character back
/// to the caller.
pub fn lookup(c: char) -> Glyph {
    let (table, first): (&[u8], char) = match c {
        ' ' => return BLANK,
        'A'..='Z' => (&UPPERCASE, 'A'),
        'a'..='z' => (&LOWERCASE, 'a'),
        '0'..='9' => (&DIGITS, '0'),
        _ => {
            #[cfg(feature = "defmt")]
            defmt::debug!("no glyph for {=char}, using fallback", c);
            return FALLBACK;
        }
    };

    let offset = (c as usize - first as usize) * GLYPH_SIZE;
    let mut glyph = BLANK;
    glyph.copy_from_slice(&table[offset..offset + GLYPH_SIZE]);
    glyph
}

#[rustfmt::skip]
pub(crate) const UPPERCASE: [u8; 208] = [
    0b0000_0000, 0b0011_1000, 0b0100_0100, 0b0100_0100, 0b0111_1100, 0b0100_0100, 0b0100_0100, 0b0100_0100, // A
    0b0000_0000, 0b0111_1000, 0b0100_0100, 0b0100_0100, 0b0111_1000, 0b0100_0100, 0b0100_0100, 0b0111_1000, // B
    0b0000_0000, 0b0011_1000, 0b0100_0100, 0b0100_0000, 0b0100_0000, 0b0100_0000, 0b0100_0100, 0b0011_1000, // C
    0b0000_0000, 0b0111_0000, 0b0100_1000, 0b0100_0100, 0b0100_0100, 0b0100_0100, 0b0100_1000, 0b0111_0000, // D
    0b0000_0000, 0b0111_1100, 0b0100_0000, 0b0100_0000, 0b0111_1000, 0b0100_0000, 0b0100_0000, 0b0111_1100, // E
    0b0000_0000, 0b0111_1100, 0b0100_0000, 0b0100_0000, 0b0111_1000, 0b0100_0000, 0b0100_0000, 0b0100_0000, // F
    0b0000_0000, 0b0011_1000, 0b0100_0100, 0b0100_0000, 0b0101_1100, 0b0100_0100, 0b0100_0100, 0b0011_1100, // G
    0b0000_0000, 0b0100_0100, 0b0100_0100, 0b0100_0100, 0b0111_1100, 0b0100_0100, 0b0100_0100, 0b0100_0100, // H
    0b0000_0000, 0b0011_1000, 0b0001_0000, 0b0001_0000, 0b0001_0000, 0b0001_0000, 0b0001_0000, 0b0011_1000, // I
    0b0000_0000, 0b0001_1100, 0b0000_1000, 0b0000_1000, 0b0000_1000, 0b0000_1000, 0b0100_1000, 0b0011_0000, // J
    0b0000_0000, 0b0100_0100, 0b0100_1000, 0b0101_0000, 0b0110_0000, 0b0101_0000, 0b0100_1000, 0b0100_0100, // K
    0b0000_0000, 0b0100_0000, 0b0100_0000, 0b0100_0000, 0b0100_0000, 0b0100_0000, 0b0100_0000, 0b0111_1100, // L
    0b0000_0000, 0b0100_0100, 0b0110_1100, 0b0101_0100, 0b0101_0100, 0b0100_0100, 0b0100_0100, 0b0100_0100, // M
    0b0000_0000, 0b0100_0100, 0b0100_0100, 0b0110_0100, 0b0101_0100, 0b0100_1100, 0b0100_0100, 0b0100_0100, // N
    0b0000_0000, 0b0011_1000, 0b0100_0100, 0b0100_0100, 0b0100_0100, 0b0100_0100, 0b0100_0100, 0b0011_1000, // O
    0b0000_0000, 0b0111_1000, 0b0100_0100, 0b0100_0100, 0b0111_1000, 0b0100_0000, 0b0100_0000, 0b0100_0000, // P
    0b0000_0000, 0b0011_1000, 0b0100_0100, 0b0100_0100, 0b0100_0100, 0b0101_0100, 0b0100_1000, 0b0011_0100, // Q
    0b0000_0000, 0b0111_1000, 0b0100_0100, 0b0100_0100, 0b0111_1000, 0b0101_0000, 0b0100_1000, 0b0100_0100, // R
    0b0000_0000, 0b0011_1100, 0b0100_0000, 0b0100_0000, 0b0011_1000, 0b0000_0100, 0b0000_0100, 0b0111_1000, // S
    0b0000_0000, 0b0111_1100, 0b0001_0000, 0b0001_0000, 0b0001_0000, 0b0001_0000, 0b0001_0000, 0b0001_0000, // T
    0b0000_0000, 0b0100_0100, 0b0100_0100, 0b0100_0100, 0b0100_0100, 0b0100_0100, 0b0100_0100, 0b0011_1000, // U
    0b0000_0000, 0b0100_0100, 0b0100_0100, 0b0100_0100, 0b0100_0100, 0b0100_0100, 0b0010_1000, 0b0001_0000, // V
    0b0000_0000, 0b0100_0100, 0b0100_0100, 0b0100_0100, 0b0101_0100, 0b0101_0100, 0b0101_0100, 0b0010_1000, // W
    0b0000_0000, 0b0100_0100, 0b0100_0100, 0b0010_1000, 0b0001_0000, 0b0010_1000, 0b0100_0100, 0b0100_0100, // X
    0b0000_0000, 0b0100_0100, 0b0100_0100, 0b0100_0100, 0b0010_1000, 0b0001_0000, 0b0001_0000, 0b0001_0000, // Y
    0b0000_0000, 0b0111_1100, 0b0000_0100, 0b0000_1000, 0b0001_0000, 0b0010_0000, 0b0100_0000, 0b0111_1100, // Z
];

#[rustfmt::skip]
pub(crate) const LOWERCASE: [u8; 208] = [
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0011_1000, 0b0000_0100, 0b0011_1100, 0b0100_0100, 0b0011_1100, // a
    0b0000_0000, 0b0100_0000, 0b0100_0000, 0b0101_1000, 0b0110_0100, 0b0100_0100, 0b0100_0100, 0b0111_1000, // b
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0011_1000, 0b0100_0000, 0b0100_0000, 0b0100_0100, 0b0011_1000, // c
    0b0000_0000, 0b0000_0100, 0b0000_0100, 0b0011_0100, 0b0100_1100, 0b0100_0100, 0b0100_0100, 0b0011_1100, // d
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0011_1000, 0b0100_0100, 0b0111_1100, 0b0100_0000, 0b0011_1000, // e
    0b0000_0000, 0b0001_1000, 0b0010_0100, 0b0010_0000, 0b0111_0000, 0b0010_0000, 0b0010_0000, 0b0010_0000, // f
    0b0000_0000, 0b0000_0000, 0b0011_1100, 0b0100_0100, 0b0100_0100, 0b0011_1100, 0b0000_0100, 0b0011_1000, // g
    0b0000_0000, 0b0100_0000, 0b0100_0000, 0b0101_1000, 0b0110_0100, 0b0100_0100, 0b0100_0100, 0b0100_0100, // h
    0b0000_0000, 0b0001_0000, 0b0000_0000, 0b0011_0000, 0b0001_0000, 0b0001_0000, 0b0001_0000, 0b0011_1000, // i
    0b0000_0000, 0b0000_1000, 0b0000_0000, 0b0001_1000, 0b0000_1000, 0b0000_1000, 0b0100_1000, 0b0011_0000, // j
    0b0000_0000, 0b0100_0000, 0b0100_0000, 0b0100_1000, 0b0101_0000, 0b0110_0000, 0b0101_0000, 0b0100_1000, // k
    0b0000_0000, 0b0011_0000, 0b0001_0000, 0b0001_0000, 0b0001_0000, 0b0001_0000, 0b0001_0000, 0b0011_1000, // l
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0110_1000, 0b0101_0100, 0b0101_0100, 0b0100_0100, 0b0100_0100, // m
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0101_1000, 0b0110_0100, 0b0100_0100, 0b0100_0100, 0b0100_0100, // n
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0011_1000, 0b0100_0100, 0b0100_0100, 0b0100_0100, 0b0011_1000, // o
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0111_1000, 0b0100_0100, 0b0111_1000, 0b0100_0000, 0b0100_0000, // p
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0011_0100, 0b0100_1100, 0b0011_1100, 0b0000_0100, 0b0000_0100, // q
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0101_1000, 0b0110_0100, 0b0100_0000, 0b0100_0000, 0b0100_0000, // r
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0011_1000, 0b0100_0000, 0b0011_1000, 0b0000_0100, 0b0111_1000, // s
    0b0000_0000, 0b0010_0000, 0b0010_0000, 0b0111_0000, 0b0010_0000, 0b0010_0000, 0b0010_0100, 0b0001_1000, // t
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0100_0100, 0b0100_0100, 0b0100_0100, 0b0100_1100, 0b0011_0100, // u
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0100_0100, 0b0100_0100, 0b0100_0100, 0b0010_1000, 0b0001_0000, // v
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0100_0100, 0b0100_0100, 0b0101_0100, 0b0101_0100, 0b0010_1000, // w
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0100_0100, 0b0010_1000, 0b0001_0000, 0b0010_1000, 0b0100_0100, // x
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0100_0100, 0b0100_0100, 0b0011_1100, 0b0000_0100, 0b0011_1000, // y
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0111_1100, 0b0000_1000, 0b0001_0000, 0b0010_0000, 0b0111_1100, // z
];

#[rustfmt::skip]
pub(crate) const DIGITS: [u8; 80] = [
    0b0000_0000, 0b0011_1000, 0b0100_0100, 0b0100_1100, 0b0101_0100, 0b0110_0100, 0b0100_0100, 0b0011_1000, // 0
    0b0000_0000, 0b0001_0000, 0b0011_0000, 0b0001_0000, 0b0001_0000, 0b0001_0000, 0b0001_0000, 0b0011_1000, // 1
    0b0000_0000, 0b0011_1000, 0b0100_0100, 0b0000_0100, 0b0000_1000, 0b0001_0000, 0b0010_0000, 0b0111_1100, // 2
    0b0000_0000, 0b0111_1100, 0b0000_1000, 0b0001_0000, 0b0000_1000, 0b0000_0100, 0b0100_0100, 0b0011_1000, // 3
    0b0000_0000, 0b0000_1000, 0b0001_1000, 0b0010_1000, 0b0100_1000, 0b0111_1100, 0b0000_1000, 0b0000_1000, // 4
    0b0000_0000, 0b0111_1100, 0b0100_0000, 0b0111_1000, 0b0000_0100, 0b0000_0100, 0b0100_0100, 0b0011_1000, // 5
    0b0000_0000, 0b0001_1000, 0b0010_0000, 0b0100_0000, 0b0111_1000, 0b0100_0100, 0b0100_0100, 0b0011_1000, // 6
    0b0000_0000, 0b0111_1100, 0b0000_0100, 0b0000_1000, 0b0001_0000, 0b0010_0000, 0b0010_0000, 0b0010_0000, // 7
    0b0000_0000, 0b0011_1000, 0b0100_0100, 0b0100_0100, 0b0011_1000, 0b0100_0100, 0b0100_0100, 0b0011_1000, // 8
    0b0000_0000, 0b0011_1000, 0b0100_0100, 0b0100_0100, 0b0011_1100, 0b0000_0100, 0b0000_1000, 0b0011_0000, // 9
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covered_characters_come_from_tables() {
        for (i, c) in ('A'..='Z').enumerate() {
            assert_eq!(lookup(c)[..], UPPERCASE[i * 8..i * 8 + 8]);
        }
        for (i, c) in ('a'..='z').enumerate() {
            assert_eq!(lookup(c)[..], LOWERCASE[i * 8..i * 8 + 8]);
        }
        for (i, c) in ('0'..='9').enumerate() {
            assert_eq!(lookup(c)[..], DIGITS[i * 8..i * 8 + 8]);
        }
    }

    #[test]
    fn test_space_is_blank() {
        assert_eq!(lookup(' '), BLANK);
    }

    #[test]
    fn test_covered_characters_are_not_fallback() {
        for c in ('A'..='Z').chain('a'..='z').chain('0'..='9') {
            assert_ne!(lookup(c), FALLBACK, "{c}");
            assert_ne!(lookup(c), BLANK, "{c}");
        }
    }

    #[test]
    fn test_unknown_characters_share_fallback() {
        for c in ['!', '@', '\n', '\0', '~', 'ñ', '€', '\u{7f}'] {
            assert_eq!(lookup(c), FALLBACK);
        }
    }

    #[test]
    fn test_cases_are_distinct_bitmaps() {
        assert_ne!(lookup('A'), lookup('a'));
        assert_ne!(lookup('Z'), lookup('z'));
    }
}
