//! Mount orientation.
//!
//! Modules are soldered onto boards in different ways, so a glyph has to
//! be rotated or flipped before its bytes are pushed out as columns. The
//! transforms here are pure 8x8 bit permutations. Within a row byte, bit
//! `c` is column `c`.

use crate::glyph::Glyph;

/// How the modules of a chain are physically mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OrientationMode {
    /// Glyph turned a quarter clockwise, columns filled from 7 down to 0.
    #[default]
    ClockwiseMount,
    /// Glyph turned a quarter counter-clockwise, columns filled from 0 up to 7.
    CounterClockwiseMount,
    /// Glyph flipped top to bottom, columns filled from 0 up to 7.
    MirroredMount,
}

/// Direction in which a glyph's bytes walk the columns of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColumnOrder {
    /// Byte 7 lands on the lowest logical column, byte 0 on the highest.
    Descending,
    /// Byte 0 lands on the lowest logical column.
    Ascending,
}

impl OrientationMode {
    pub const fn column_order(self) -> ColumnOrder {
        match self {
            Self::ClockwiseMount => ColumnOrder::Descending,
            Self::CounterClockwiseMount | Self::MirroredMount => ColumnOrder::Ascending,
        }
    }

    /// Applies this mount's transform to `pattern`.
    pub fn apply(self, pattern: &Glyph) -> Glyph {
        transform(pattern, self)
    }
}

#[inline]
fn bit(pattern: &Glyph, row: usize, col: usize) -> bool {
    (pattern[row] >> col) & 1 != 0
}

/// Returns `pattern` as seen through `mode`.
///
/// With `out(row, col)` the output bit and `in(row, col)` the input bit:
///
/// - `ClockwiseMount`: `out(row, col) = in(7 - col, row)`
/// - `CounterClockwiseMount`: `out(row, col) = in(col, 7 - row)`
/// - `MirroredMount`: `out(row, col) = in(7 - row, col)`
pub fn transform(pattern: &Glyph, mode: OrientationMode) -> Glyph {
    let mut out = [0u8; 8];
    for (row, byte) in out.iter_mut().enumerate() {
        for col in 0..8 {
            let (src_row, src_col) = match mode {
                OrientationMode::ClockwiseMount => (7 - col, row),
                OrientationMode::CounterClockwiseMount => (col, 7 - row),
                OrientationMode::MirroredMount => (7 - row, col),
            };
            if bit(pattern, src_row, src_col) {
                *byte |= 1 << col;
            }
        }
    }
    out
}
