//! [`embedded-graphics`](embedded_graphics) support.
//!
//! The chain is one strip, `8 * module_count` pixels wide and 8 high.
//! Pixel `(x, y)` is column `x % 8` of module `x / 8`, row `y`. Each drawn
//! pixel is an immediate LED write, so large fills are slow.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_hal::digital::v2::OutputPin;

use crate::device::MatrixChain;
use crate::framebuffer::{COLUMNS, ROWS};

impl<DATA, CLK, LATCH> OriginDimensions for MatrixChain<DATA, CLK, LATCH>
where
    DATA: OutputPin,
    CLK: OutputPin,
    LATCH: OutputPin,
{
    fn size(&self) -> Size {
        Size::new(self.columns() as u32, ROWS as u32)
    }
}

impl<DATA, CLK, LATCH> DrawTarget for MatrixChain<DATA, CLK, LATCH>
where
    DATA: OutputPin,
    CLK: OutputPin,
    LATCH: OutputPin,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }
            let (x, y) = (x as usize, y as usize);
            self.set_led(x / COLUMNS, y, x % COLUMNS, color.is_on());
        }
        Ok(())
    }
}
