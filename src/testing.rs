//! Mock lines and delay for host tests.

use core::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;

use crate::bus::Bus;
use crate::config::ChainConfig;
use crate::device::MatrixChain;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Line {
    Data,
    Clock,
    Latch,
}

/// What the chips would see on the shared lines.
#[derive(Debug)]
pub(crate) struct Wire {
    pub data: bool,
    pub clock: bool,
    pub latch: bool,
    /// Every bit sampled on a clock rising edge while the latch was low.
    pub bit_log: Vec<bool>,
    /// Bytes committed by each latch rising edge, in shift order.
    pub frames: Vec<Vec<u8>>,
    pending: Vec<bool>,
}

impl Default for Wire {
    /// Lines start idle: clock low, latch high.
    fn default() -> Self {
        Self {
            data: false,
            clock: false,
            latch: true,
            bit_log: Vec::new(),
            frames: Vec::new(),
            pending: Vec::new(),
        }
    }
}

impl Wire {
    fn drive(&mut self, line: Line, level: bool) {
        match line {
            Line::Data => self.data = level,
            Line::Clock => {
                if level && !self.clock && !self.latch {
                    self.bit_log.push(self.data);
                    self.pending.push(self.data);
                }
                self.clock = level;
            }
            Line::Latch => {
                if level && !self.latch {
                    let bytes = self
                        .pending
                        .chunks(8)
                        .map(|bits| bits.iter().fold(0u8, |acc, &b| (acc << 1) | u8::from(b)))
                        .collect();
                    self.frames.push(bytes);
                    self.pending.clear();
                }
                self.latch = level;
            }
        }
    }

    /// `(opcode, value)` each committed frame delivers to chip `module` of
    /// a chain of `module_count`.
    pub fn writes_to(&self, module: usize, module_count: usize) -> Vec<(u8, u8)> {
        let pair = 2 * (module_count - 1 - module);
        self.frames
            .iter()
            .map(|frame| (frame[pair], frame[pair + 1]))
            .filter(|&(opcode, _)| opcode != 0)
            .collect()
    }
}

pub(crate) type SharedWire = Rc<RefCell<Wire>>;

pub(crate) struct MockPin {
    line: Line,
    wire: SharedWire,
}

impl OutputPin for MockPin {
    type Error = core::convert::Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.wire.borrow_mut().drive(self.line, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.wire.borrow_mut().drive(self.line, true);
        Ok(())
    }
}

/// A line whose every write fails.
pub(crate) struct FailingPin;

impl OutputPin for FailingPin {
    type Error = ();

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(())
    }
}

pub(crate) fn pins() -> (MockPin, MockPin, MockPin, SharedWire) {
    let wire = SharedWire::default();
    let pin = |line| MockPin {
        line,
        wire: wire.clone(),
    };
    (pin(Line::Data), pin(Line::Clock), pin(Line::Latch), wire.clone())
}

pub(crate) fn bus(module_count: usize) -> (Bus<MockPin, MockPin, MockPin>, SharedWire) {
    let (data, clock, latch, wire) = pins();
    (Bus::new(data, clock, latch, module_count), wire)
}

pub(crate) type MockChain = MatrixChain<MockPin, MockPin, MockPin>;

/// A configured chain with the startup traffic already discarded.
pub(crate) fn chain(config: ChainConfig) -> (MockChain, SharedWire) {
    let (data, clock, latch, wire) = pins();
    let chain = MatrixChain::with_config(data, clock, latch, config);
    {
        let mut wire = wire.borrow_mut();
        wire.frames.clear();
        wire.bit_log.clear();
    }
    (chain, wire)
}

/// Records every requested pause.
#[derive(Debug, Default)]
pub(crate) struct MockDelay {
    pub calls: Vec<u32>,
}

impl DelayMs<u32> for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.calls.push(ms);
    }
}
