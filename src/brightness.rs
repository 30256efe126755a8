//! Day/night brightness selection

/// Part of the day a brightness level belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriod {
    Day,
    Night,
}

/// Brightness levels and the hours separating them
///
/// Night runs from `night_cutoff + 1` through `morning_cutoff - 1`; both
/// cutoff hours themselves belong to the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessPolicy {
    /// Brightness during the day (0-255)
    pub day: u8,
    /// Brightness during the night (0-255)
    pub night: u8,
    /// First hour of the day
    pub morning_cutoff: u8,
    /// Last hour of the day
    pub night_cutoff: u8,
}

impl BrightnessPolicy {
    pub const DEFAULT: Self = Self {
        day: 40,
        night: 20,
        morning_cutoff: 7,
        night_cutoff: 22,
    };

    pub const fn period(&self, hour: u8) -> DayPeriod {
        if hour < self.morning_cutoff || hour > self.night_cutoff {
            DayPeriod::Night
        } else {
            DayPeriod::Day
        }
    }

    /// Brightness level for `hour`
    pub const fn level_for(&self, hour: u8) -> u8 {
        match self.period(hour) {
            DayPeriod::Day => self.day,
            DayPeriod::Night => self.night,
        }
    }
}

impl Default for BrightnessPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}
