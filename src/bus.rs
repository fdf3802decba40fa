//! Bit-banged serial link to a chain of MAX7219/MAX7221 chips.
//!
//! All chips share data, clock and an active-low latch. Every bit shifted
//! in passes through every chip, so addressing one chip means shifting a
//! full frame of `2 * module_count` bytes where only that chip's slot
//! holds a real register write and every other slot holds a no-op. The
//! farthest chip's slot goes out first. Bytes are sent MSB first, and the
//! rising edge of the latch commits the frame into the registers.

use embedded_hal::digital::v2::OutputPin;
use heapless::Vec;

use crate::framebuffer::MAX_MODULES;

/// Two bytes per chip, opcode and value.
pub const FRAME_CAPACITY: usize = 2 * MAX_MODULES;

/// Register selector carried in the high byte of a chip's 16-bit word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    NoOp,
    /// Row (digit) register, `0..=7`.
    Row(u8),
    DecodeMode,
    Intensity,
    ScanLimit,
    Shutdown,
    DisplayTest,
}

impl Register {
    /// Row register for `row`, `None` past row 7.
    pub const fn row(row: usize) -> Option<Self> {
        if row < 8 {
            Some(Self::Row(row as u8))
        } else {
            None
        }
    }

    pub const fn opcode(self) -> u8 {
        match self {
            Self::NoOp => 0,
            Self::Row(row) => row.wrapping_add(1),
            Self::DecodeMode => 9,
            Self::Intensity => 10,
            Self::ScanLimit => 11,
            Self::Shutdown => 12,
            Self::DisplayTest => 15,
        }
    }
}

/// The three control lines plus the reusable frame buffer.
pub struct Bus<DATA, CLK, LATCH> {
    data: DATA,
    clock: CLK,
    latch: LATCH,
    module_count: usize,
    /// Slot `2k` holds chip `k`'s value and `2k + 1` its opcode. Shifted out
    /// from the last byte to the first.
    frame: Vec<u8, FRAME_CAPACITY>,
}

impl<DATA, CLK, LATCH> Bus<DATA, CLK, LATCH>
where
    DATA: OutputPin,
    CLK: OutputPin,
    LATCH: OutputPin,
{
    /// Takes the lines and parks them idle: clock low, latch high.
    ///
    /// `module_count` must already be clamped to `1..=8`.
    pub(crate) fn new(data: DATA, clock: CLK, latch: LATCH, module_count: usize) -> Self {
        let mut bus = Self {
            data,
            clock,
            latch,
            module_count,
            frame: Vec::new(),
        };
        // cannot fail, module_count <= MAX_MODULES
        let _ = bus.frame.resize(2 * module_count, 0);
        drive(&mut bus.clock, false);
        drive(&mut bus.latch, true);
        bus
    }

    pub fn module_count(&self) -> usize {
        self.module_count
    }

    /// The most recently shifted frame, in slot order.
    pub fn frame(&self) -> &[u8] {
        &self.frame
    }

    /// Writes `value` into `register` of chip `module`.
    ///
    /// Returns `false` without touching the lines if `module` is not part
    /// of the chain.
    pub fn write(&mut self, module: usize, register: Register, value: u8) -> bool {
        if module >= self.module_count {
            #[cfg(feature = "defmt")]
            defmt::trace!("dropping write to module {} of {}", module, self.module_count);
            return false;
        }

        self.frame.iter_mut().for_each(|byte| *byte = 0);
        let slot = module * 2;
        self.frame[slot] = value;
        self.frame[slot + 1] = register.opcode();

        drive(&mut self.latch, false);
        for i in (0..self.frame.len()).rev() {
            let byte = self.frame[i];
            self.shift_out(byte);
        }
        drive(&mut self.latch, true);
        true
    }

    /// Gives the lines back.
    pub fn release(self) -> (DATA, CLK, LATCH) {
        (self.data, self.clock, self.latch)
    }

    fn shift_out(&mut self, byte: u8) {
        for bit in (0..8).rev() {
            drive(&mut self.data, (byte >> bit) & 1 != 0);
            drive(&mut self.clock, true);
            drive(&mut self.clock, false);
        }
    }
}

/// Sets a line level. There is nobody to report a GPIO failure to, so it
/// is only logged.
fn drive<P: OutputPin>(pin: &mut P, high: bool) {
    let result = if high { pin.set_high() } else { pin.set_low() };
    if result.is_err() {
        #[cfg(feature = "defmt")]
        defmt::warn!("gpio write failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{bus, FailingPin};

    #[test]
    fn test_new_parks_lines() {
        let (_bus, wire) = bus(2);
        let wire = wire.borrow();
        assert!(wire.latch);
        assert!(!wire.clock);
        assert!(wire.frames.is_empty());
    }

    #[test]
    fn test_first_write_is_first_frame() {
        let (mut bus, wire) = bus(1);
        bus.write(0, Register::DisplayTest, 0);
        assert_eq!(wire.borrow().frames, [vec![15, 0]]);
    }

    #[test]
    fn test_frame_for_middle_chip() {
        let (mut bus, wire) = bus(3);
        assert!(bus.write(1, Register::Intensity, 6));
        assert_eq!(bus.frame(), &[0, 0, 6, 10, 0, 0]);
        // farthest chip first, opcode before value
        assert_eq!(wire.borrow().frames, [vec![0, 0, 10, 6, 0, 0]]);
    }

    #[test]
    fn test_nearest_chip_goes_last() {
        let (mut bus, wire) = bus(3);
        bus.write(0, Register::Row(2), 0xA5);
        assert_eq!(bus.frame(), &[0xA5, 3, 0, 0, 0, 0]);
        assert_eq!(wire.borrow().frames, [vec![0, 0, 0, 0, 3, 0xA5]]);
    }

    #[test]
    fn test_only_addressed_pair_is_nonzero() {
        for n in 1..=8 {
            for k in 0..n {
                let (mut bus, wire) = bus(n);
                bus.write(k, Register::ScanLimit, 7);
                let frames = &wire.borrow().frames;
                assert_eq!(frames.len(), 1);
                let frame = &frames[0];
                assert_eq!(frame.len(), 2 * n);
                for pair in 0..n {
                    let expected: [u8; 2] = if pair == n - 1 - k { [11, 7] } else { [0, 0] };
                    assert_eq!(frame[2 * pair..2 * pair + 2], expected, "n={n} k={k}");
                }
            }
        }
    }

    #[test]
    fn test_bits_go_out_msb_first() {
        let (mut bus, wire) = bus(1);
        bus.write(0, Register::Row(0), 0b1000_0001);
        let wire = wire.borrow();
        // opcode 1 then value 0x81
        assert_eq!(wire.bit_log[..8], [false, false, false, false, false, false, false, true]);
        assert_eq!(wire.bit_log[8..16], [true, false, false, false, false, false, false, true]);
    }

    #[test]
    fn test_invalid_module_touches_nothing() {
        let (mut bus, wire) = bus(2);
        assert!(!bus.write(2, Register::Intensity, 3));
        assert_eq!(bus.frame(), &[0, 0, 0, 0]);
        let wire = wire.borrow();
        assert!(wire.frames.is_empty());
        assert!(wire.bit_log.is_empty());
    }

    #[test]
    fn test_register_opcodes() {
        assert_eq!(Register::NoOp.opcode(), 0);
        assert_eq!(Register::Row(0).opcode(), 1);
        assert_eq!(Register::Row(7).opcode(), 8);
        assert_eq!(Register::DecodeMode.opcode(), 9);
        assert_eq!(Register::Intensity.opcode(), 10);
        assert_eq!(Register::ScanLimit.opcode(), 11);
        assert_eq!(Register::Shutdown.opcode(), 12);
        assert_eq!(Register::DisplayTest.opcode(), 15);
    }

    #[test]
    fn test_row_register_is_checked() {
        assert_eq!(Register::row(0), Some(Register::Row(0)));
        assert_eq!(Register::row(7), Some(Register::Row(7)));
        assert_eq!(Register::row(8), None);
        // out-of-range rows never panic
        assert_eq!(Register::Row(255).opcode(), 0);
    }

    #[test]
    fn test_gpio_errors_are_swallowed() {
        let mut bus = Bus::new(FailingPin, FailingPin, FailingPin, 4);
        assert!(bus.write(3, Register::Shutdown, 1));
        assert_eq!(bus.frame()[6..8], [1, 12]);
    }
}
