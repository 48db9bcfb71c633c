//! Chart configuration

use thiserror::Error;

/// Default upper bound of the latency axis of the count histogram.
pub const DEFAULT_MAX_DELAY: u32 = 2000;

/// Default width of a single histogram bin.
pub const DEFAULT_DELAY_STEP: u32 = 10;

/// Errors raised for unusable chart settings
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Delay step must be greater than zero")]
    ZeroDelayStep,

    #[error("Max delay ({max_delay}) must be at least the delay step ({delay_step})")]
    NoBins { max_delay: u32, delay_step: u32 },
}

/// Settings for the latency-vs-count histogram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotConfig {
    /// Upper (exclusive) bound of the histogram range `[0, max_delay)`.
    pub max_delay: u32,
    /// Nominal bin width.
    pub delay_step: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            max_delay: DEFAULT_MAX_DELAY,
            delay_step: DEFAULT_DELAY_STEP,
        }
    }
}

impl PlotConfig {
    /// Number of bins spanning `[0, max_delay)`.
    ///
    /// Uses integer division, so a `max_delay` that is not a multiple of
    /// `delay_step` gets slightly wider bins rather than a partial one.
    pub fn bin_count(&self) -> Result<usize, ConfigError> {
        if self.delay_step == 0 {
            return Err(ConfigError::ZeroDelayStep);
        }

        match self.max_delay / self.delay_step {
            0 => Err(ConfigError::NoBins {
                max_delay: self.max_delay,
                delay_step: self.delay_step,
            }),
            bins => Ok(bins as usize),
        }
    }
}
