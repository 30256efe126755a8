use embassy_time::Duration;

use crate::brightness::BrightnessPolicy;

/// Default pause after every pushed frame; sets the color sweep speed
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(100);

/// Default extra pause after each step of the startup sequence
pub const DEFAULT_FLASH_DELAY: Duration = Duration::from_millis(100);

/// Configuration for the display engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    pub brightness: BrightnessPolicy,
    /// Pause inside every rendered frame
    pub frame_delay: Duration,
    /// Pause unit of the startup sequence
    pub flash_delay: Duration,
}

impl ClockConfig {
    pub const DEFAULT: Self = Self {
        brightness: BrightnessPolicy::DEFAULT,
        frame_delay: DEFAULT_FRAME_DELAY,
        flash_delay: DEFAULT_FLASH_DELAY,
    };
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
