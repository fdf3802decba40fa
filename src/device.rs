//! Chip lifecycle and LED mutation for a whole chain.

use embedded_hal::digital::v2::OutputPin;

use crate::bus::{Bus, Register};
use crate::config::{ChainConfig, MAX_INTENSITY, MAX_SCAN_LIMIT};
use crate::framebuffer::{FrameBuffer, COLUMNS, ROWS};

/// A chain of MAX7219/MAX7221 driven 8x8 modules on one bus.
///
/// Owns the lines and the logical image. Every mutation is pushed to the
/// affected chip before the call returns, so [`framebuffer`] always matches
/// what the chips hold. Requests addressing something outside the chain
/// are dropped without effect.
///
/// [`framebuffer`]: MatrixChain::framebuffer
pub struct MatrixChain<DATA, CLK, LATCH> {
    bus: Bus<DATA, CLK, LATCH>,
    framebuffer: FrameBuffer,
    config: ChainConfig,
}

impl<DATA, CLK, LATCH> MatrixChain<DATA, CLK, LATCH>
where
    DATA: OutputPin,
    CLK: OutputPin,
    LATCH: OutputPin,
{
    /// Sets up `module_count` chips with the default configuration.
    ///
    /// A `module_count` outside `1..=8` selects 8.
    pub fn configure(data: DATA, clock: CLK, latch: LATCH, module_count: usize) -> Self {
        Self::with_config(
            data,
            clock,
            latch,
            ChainConfig::new().with_module_count(module_count),
        )
    }

    /// Takes the lines, parks the latch high and runs the startup sequence.
    pub fn with_config(data: DATA, clock: CLK, latch: LATCH, config: ChainConfig) -> Self {
        let module_count = config.module_count();
        let mut chain = Self {
            bus: Bus::new(data, clock, latch, module_count),
            framebuffer: FrameBuffer::new(module_count),
            config,
        };
        chain.startup();
        chain
    }

    /// Chips come up blank and dark before brightness and power are set.
    fn startup(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::debug!("starting chain: {}", self.config);

        for module in 0..self.module_count() {
            self.display_test(module, false);
            self.set_scan_limit(module, MAX_SCAN_LIMIT);
            self.set_decode_mode(module);
            self.clear(module);
        }
        self.power_off_all();
        self.set_intensity_all(self.config.intensity());
        self.power_on_all();
        self.clear_all();
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    pub fn module_count(&self) -> usize {
        self.framebuffer.module_count()
    }

    /// Logical columns across the chain.
    pub fn columns(&self) -> usize {
        self.framebuffer.columns()
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    /// The bus, for inspecting the last frame sent.
    pub fn bus(&self) -> &Bus<DATA, CLK, LATCH> {
        &self.bus
    }

    pub fn led(&self, module: usize, row: usize, col: usize) -> bool {
        self.framebuffer.led(module, row, col)
    }

    pub fn row(&self, module: usize, row: usize) -> Option<u8> {
        self.framebuffer.row(module, row)
    }

    /// Puts a chip into shutdown (`true`) or normal operation. Shutdown
    /// keeps the register contents.
    pub fn shutdown(&mut self, module: usize, shutdown: bool) {
        self.bus.write(module, Register::Shutdown, u8::from(!shutdown));
    }

    pub fn power_off_all(&mut self) {
        for module in 0..self.module_count() {
            self.shutdown(module, true);
        }
    }

    pub fn power_on_all(&mut self) {
        for module in 0..self.module_count() {
            self.shutdown(module, false);
        }
    }

    /// Number of scanned rows minus one, `0..=7`.
    pub fn set_scan_limit(&mut self, module: usize, limit: u8) {
        if limit > MAX_SCAN_LIMIT {
            #[cfg(feature = "defmt")]
            defmt::warn!("scan limit {} out of range", limit);
            return;
        }
        self.bus.write(module, Register::ScanLimit, limit);
    }

    /// Brightness, `0..=15`.
    pub fn set_intensity(&mut self, module: usize, level: u8) {
        if level > MAX_INTENSITY {
            #[cfg(feature = "defmt")]
            defmt::warn!("intensity {} out of range", level);
            return;
        }
        self.bus.write(module, Register::Intensity, level);
    }

    pub fn set_intensity_all(&mut self, level: u8) {
        for module in 0..self.module_count() {
            self.set_intensity(module, level);
        }
    }

    /// Turns off the BCD decoder. Rows are always raw bitmaps.
    pub fn set_decode_mode(&mut self, module: usize) {
        self.bus.write(module, Register::DecodeMode, 0);
    }

    /// Lights every LED of a chip regardless of its rows while `on`.
    pub fn display_test(&mut self, module: usize, on: bool) {
        self.bus.write(module, Register::DisplayTest, u8::from(on));
    }

    /// Turns one LED on or off.
    pub fn set_led(&mut self, module: usize, row: usize, col: usize, on: bool) {
        match self.framebuffer.set_led(module, row, col, on) {
            Some(bits) => self.push_row(module, row, bits),
            None => {
                #[cfg(feature = "defmt")]
                defmt::trace!("led {}/{}/{} outside chain", module, row, col);
            }
        }
    }

    /// Replaces a whole row, bit `c` being column `c`.
    pub fn set_row(&mut self, module: usize, row: usize, value: u8) {
        if self.framebuffer.set_row(module, row, value) {
            self.push_row(module, row, value);
        }
    }

    /// Sets column `col` of every row from `bits`, bit `r` going to row `r`.
    ///
    /// This is eight separate LED writes, each of which reaches the chip on
    /// its own.
    pub fn set_column(&mut self, module: usize, col: usize, bits: u8) {
        if module >= self.module_count() || col >= COLUMNS {
            return;
        }
        for row in 0..ROWS {
            self.set_led(module, row, col, (bits >> row) & 1 != 0);
        }
    }

    /// Turns every LED of one module off.
    pub fn clear(&mut self, module: usize) {
        for row in 0..ROWS {
            self.set_row(module, row, 0);
        }
    }

    pub fn clear_all(&mut self) {
        for module in 0..self.module_count() {
            self.clear(module);
        }
    }

    /// Gives the lines back. The chips keep showing the current image.
    pub fn release(self) -> (DATA, CLK, LATCH) {
        self.bus.release()
    }

    fn push_row(&mut self, module: usize, row: usize, bits: u8) {
        if let Some(register) = Register::row(row) {
            self.bus.write(module, register, bits);
        }
    }
}
