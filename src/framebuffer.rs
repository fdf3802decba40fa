//! Logical LED state for a whole chain.
//!
//! The chips are write-only, so this is the only place the current image
//! can be read back from. [`MatrixChain`](crate::MatrixChain) pushes every
//! change to the bus right after it lands here.

/// Most chips a single bus can drive.
pub const MAX_MODULES: usize = 8;

/// Rows per module.
pub const ROWS: usize = 8;

/// Columns per module.
pub const COLUMNS: usize = 8;

/// Row bitmaps for every module, bit `c` of a row is column `c`.
///
/// Rows go to the chips as stored, so column 0 is the least significant
/// bit on the wire. LedControl-style drivers send `0x80 >> column`
/// instead, which shows up left-right mirrored on modules wired for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    rows: [[u8; ROWS]; MAX_MODULES],
    module_count: usize,
}

impl FrameBuffer {
    /// Creates an all-off buffer for `module_count` modules.
    ///
    /// `module_count` must already be clamped to `1..=MAX_MODULES`.
    pub(crate) const fn new(module_count: usize) -> Self {
        Self {
            rows: [[0; ROWS]; MAX_MODULES],
            module_count,
        }
    }

    pub const fn module_count(&self) -> usize {
        self.module_count
    }

    /// Total logical columns across the chain.
    pub const fn columns(&self) -> usize {
        self.module_count * COLUMNS
    }

    /// Row bitmaps of one module.
    pub fn module(&self, module: usize) -> Option<&[u8; ROWS]> {
        self.rows[..self.module_count].get(module)
    }

    /// Current value of one row.
    pub fn row(&self, module: usize, row: usize) -> Option<u8> {
        self.module(module)?.get(row).copied()
    }

    /// Whether one LED is lit. Out-of-range addresses read as off.
    pub fn led(&self, module: usize, row: usize, col: usize) -> bool {
        col < COLUMNS && self.row(module, row).is_some_and(|bits| bits & (1 << col) != 0)
    }

    /// Stores a row value. Returns `false`, leaving the buffer untouched,
    /// if the address is outside the chain.
    pub(crate) fn set_row(&mut self, module: usize, row: usize, value: u8) -> bool {
        if module >= self.module_count || row >= ROWS {
            return false;
        }
        self.rows[module][row] = value;
        true
    }

    /// Sets or clears one bit and returns the new row value.
    pub(crate) fn set_led(&mut self, module: usize, row: usize, col: usize, on: bool) -> Option<u8> {
        if col >= COLUMNS {
            return None;
        }
        let mut bits = self.row(module, row)?;
        if on {
            bits |= 1 << col;
        } else {
            bits &= !(1 << col);
        }
        self.rows[module][row] = bits;
        Some(bits)
    }
}
