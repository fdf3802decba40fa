//! Text placement and scrolling.
//!
//! Positions are logical columns across the whole chain and may be
//! negative or past the end. Glyph columns that fall before column 0 are
//! skipped, and the first one reaching the end of the chain stops the
//! glyph. Nothing wraps around.

use core::iter::Rev;
use core::ops::RangeInclusive;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;

use crate::device::MatrixChain;
use crate::framebuffer::COLUMNS;
use crate::glyph::{self, Glyph, GLYPH_SIZE};
use crate::orientation::ColumnOrder;

/// Column pitch of [`MatrixChain::place_string`].
pub const PITCH: i32 = GLYPH_SIZE as i32;

/// Columns each further glyph moves closer in compact placement.
pub const KERNING: i32 = 2;

/// Room for any `i32` plus padding up to eight characters.
const NUMBER_BUFFER: usize = 16;

fn glyph_offset(index: usize, pitch: i32) -> i32 {
    i32::try_from(index).map_or(i32::MAX, |i| i.saturating_mul(pitch))
}

impl<DATA, CLK, LATCH> MatrixChain<DATA, CLK, LATCH>
where
    DATA: OutputPin,
    CLK: OutputPin,
    LATCH: OutputPin,
{
    /// Draws an unrotated 8x8 `pattern` with its first column at `position`.
    ///
    /// The pattern goes through the chain's orientation first, then each
    /// of its eight bytes becomes one column.
    pub fn place_pattern(&mut self, pattern: &Glyph, position: i32) {
        let orientation = self.config().orientation();
        let oriented = orientation.apply(pattern);
        let order = orientation.column_order();
        let columns = self.columns() as i32;

        for step in 0..GLYPH_SIZE {
            let column = position.saturating_add(step as i32);
            if column < 0 {
                continue;
            }
            if column >= columns {
                #[cfg(feature = "defmt")]
                defmt::trace!("glyph at {} cut off at column {}", position, column);
                return;
            }

            let module = column as usize / COLUMNS;
            let offset = column as usize % COLUMNS;
            let (byte, col) = match order {
                ColumnOrder::Descending => {
                    (oriented[GLYPH_SIZE - 1 - step], COLUMNS - 1 - offset)
                }
                ColumnOrder::Ascending => (oriented[step], offset),
            };
            self.set_column(module, col, byte);
        }
    }

    /// Draws character `c` with its first column at `position`.
    pub fn place_glyph(&mut self, c: char, position: i32) {
        self.place_pattern(&glyph::lookup(c), position);
    }

    /// Draws `text` monospaced, glyph `i` at `start + 8 * i`.
    pub fn place_string(&mut self, text: &str, start: i32) {
        let end = self.columns() as i32;
        for (i, c) in text.chars().enumerate() {
            let position = start.saturating_add(glyph_offset(i, PITCH));
            if position >= end {
                break;
            }
            self.place_glyph(c, position);
        }
    }

    /// Draws `text` with each glyph overlapping the previous one.
    ///
    /// The first glyph starts at `start - 1`, glyph `i >= 1` at
    /// `start + 6 * i`.
    pub fn place_string_compact(&mut self, text: &str, start: i32) {
        let end = self.columns() as i32;
        for (i, c) in text.chars().enumerate() {
            let position = if i == 0 {
                start.saturating_sub(1)
            } else {
                start.saturating_add(glyph_offset(i, PITCH - KERNING))
            };
            if position >= end {
                break;
            }
            self.place_glyph(c, position);
        }
    }

    /// Start positions a scroll of `text` walks through, right to left.
    ///
    /// From the first column past the chain down to where the last glyph
    /// has just left column 0. Drive [`place_string`] with these to scroll
    /// without blocking.
    ///
    /// [`place_string`]: MatrixChain::place_string
    pub fn scroll_positions(&self, text: &str) -> Rev<RangeInclusive<i32>> {
        let first = self.columns() as i32;
        let last = glyph_offset(text.chars().count(), PITCH).saturating_neg() + 1;
        (last..=first).rev()
    }

    /// Scrolls `text` from fully off the right edge to fully off the left,
    /// pausing `step_ms` after each one-column step. Blocks until done.
    pub fn scroll<D: DelayMs<u32>>(&mut self, text: &str, step_ms: u32, delay: &mut D) {
        for position in self.scroll_positions(text) {
            self.place_string(text, position);
            delay.delay_ms(step_ms);
        }
    }

    /// Like [`scroll`](MatrixChain::scroll) with compact placement.
    pub fn scroll_compact<D: DelayMs<u32>>(&mut self, text: &str, step_ms: u32, delay: &mut D) {
        for position in self.scroll_positions(text) {
            self.place_string_compact(text, position);
            delay.delay_ms(step_ms);
        }
    }

    /// Writes `value` in decimal, right-aligned in a field one character
    /// per module wide, starting at `position`.
    ///
    /// Numbers wider than the field are written in full.
    pub fn format_number(&mut self, value: i32, position: i32) {
        let mut buf = [0u8; NUMBER_BUFFER];
        let width = self.module_count();
        match format_no_std::show(&mut buf, format_args!("{:>width$}", value, width = width)) {
            Ok(text) => self.place_string(text, position),
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("could not format {}", value);
            }
        }
    }
}
