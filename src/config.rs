//! Chain configuration.

use crate::framebuffer::MAX_MODULES;
use crate::orientation::OrientationMode;

/// Brightness applied during startup unless configured otherwise.
pub const DEFAULT_INTENSITY: u8 = 6;

/// Highest value the intensity register accepts.
pub const MAX_INTENSITY: u8 = 15;

/// Highest value the scan-limit register accepts (all eight rows on).
pub const MAX_SCAN_LIMIT: u8 = 7;

/// Fixed settings of one chain, decided before the chips are touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChainConfig {
    module_count: usize,
    orientation: OrientationMode,
    intensity: u8,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainConfig {
    /// A full eight-module chain, clockwise mount, default brightness.
    pub const fn new() -> Self {
        Self {
            module_count: MAX_MODULES,
            orientation: OrientationMode::ClockwiseMount,
            intensity: DEFAULT_INTENSITY,
        }
    }

    /// Sets the number of chained modules.
    ///
    /// Anything outside `1..=8` selects 8.
    pub const fn with_module_count(mut self, module_count: usize) -> Self {
        self.module_count = if module_count == 0 || module_count > MAX_MODULES {
            MAX_MODULES
        } else {
            module_count
        };
        self
    }

    pub const fn with_orientation(mut self, orientation: OrientationMode) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the startup brightness. Values above 15 fall back to the default.
    pub const fn with_intensity(mut self, intensity: u8) -> Self {
        self.intensity = if intensity > MAX_INTENSITY {
            DEFAULT_INTENSITY
        } else {
            intensity
        };
        self
    }

    pub const fn module_count(&self) -> usize {
        self.module_count
    }

    pub const fn orientation(&self) -> OrientationMode {
        self.orientation
    }

    pub const fn intensity(&self) -> u8 {
        self.intensity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ChainConfig::default();
        assert_eq!(config.module_count(), 8);
        assert_eq!(config.orientation(), OrientationMode::ClockwiseMount);
        assert_eq!(config.intensity(), DEFAULT_INTENSITY);
    }

    #[test]
    fn test_module_count_clamps_to_eight() {
        assert_eq!(ChainConfig::new().with_module_count(20).module_count(), 8);
        assert_eq!(ChainConfig::new().with_module_count(0).module_count(), 8);
        assert_eq!(ChainConfig::new().with_module_count(1).module_count(), 1);
        assert_eq!(ChainConfig::new().with_module_count(8).module_count(), 8);
    }

    #[test]
    fn test_intensity_out_of_range_uses_default() {
        assert_eq!(ChainConfig::new().with_intensity(15).intensity(), 15);
        assert_eq!(ChainConfig::new().with_intensity(16).intensity(), DEFAULT_INTENSITY);
    }
}
