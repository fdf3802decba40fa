//! Driver for chains of MAX7219/MAX7221 8x8 LED matrix modules.
//!
//! The chips are daisy-chained on three GPIO lines (data, clock, latch)
//! which are bit-banged through `embedded-hal` output pins. On top of the
//! per-LED interface sits a small text renderer: an 8x8 font, mount
//! orientation transforms, fixed pitch and compact placement, scrolling
//! and number formatting.
//!
//! ```ignore
//! let mut matrix = MatrixChain::configure(data, clock, latch, 4);
//! matrix.scroll("Hello", 50, &mut delay);
//! matrix.format_number(1234, 0);
//! ```
//!
//! Nothing here returns an error. The chips never answer, so a request
//! that cannot be honoured (module out of range, brightness above 15, a
//! glyph running off the end of the chain) is dropped or cut short, and
//! logged when the `defmt` feature is on.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bus;
pub mod config;
pub mod device;
pub mod framebuffer;
pub mod glyph;
pub mod graphics;
pub mod orientation;
pub mod text;

#[cfg(test)]
mod testing;

pub use bus::Register;
pub use config::{ChainConfig, DEFAULT_INTENSITY};
pub use device::MatrixChain;
pub use framebuffer::{FrameBuffer, MAX_MODULES};
pub use glyph::Glyph;
pub use orientation::{transform, OrientationMode};
