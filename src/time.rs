//! Wall-clock input
//!
//! The clock source itself (RTC, NTP) lives outside this crate. It hands over
//! a raw hour/minute pair through [`TimeSource`].

/// Hour/minute pair read from the clock source
///
/// Fields are public and unchecked since the source may hand over garbage;
/// use [`TimeSample::new`] for a validated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeSample {
    /// Hour of day, 0-23
    pub hour: u8,
    /// Minute of hour, 0-59
    pub minute: u8,
}

/// Hour or minute outside the clock range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTimeSample {
    pub hour: u8,
    pub minute: u8,
}

impl TimeSample {
    pub const fn new(hour: u8, minute: u8) -> Result<Self, InvalidTimeSample> {
        let sample = Self { hour, minute };
        if sample.is_valid() {
            Ok(sample)
        } else {
            Err(InvalidTimeSample { hour, minute })
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.hour < 24 && self.minute < 60
    }
}

/// Source of the current time, pulled once per displayed frame
pub trait TimeSource {
    fn sample(&mut self) -> TimeSample;
}

impl<F: FnMut() -> TimeSample> TimeSource for F {
    fn sample(&mut self) -> TimeSample {
        self()
    }
}
