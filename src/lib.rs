#![no_std]

pub mod brightness;
pub mod clock;
pub mod color;
pub mod config;
pub mod engine;
pub mod intent;
pub mod mask;
pub mod output;
pub mod pacing;
pub mod phrase;
pub mod time;
pub mod word;

pub use brightness::{BrightnessPolicy, DayPeriod};
pub use clock::WordClock;
pub use config::ClockConfig;
pub use engine::{COLOR_PHASE_PERIOD, DisplayEngine, EngineState, STARTUP_SEQUENCE, StartupStep};
pub use intent::{
    ClockIntent, ClockIntentChannel, ClockIntentReceiver, ClockIntentSender, IntentEffects,
    IntentProcessor,
};
pub use mask::{CELL_COUNT, GRID_HEIGHT, GRID_WIDTH, IlluminationMask};
pub use output::{Rgb565Driver, Rgb565Output, SmartLedsOutput};
pub use pacing::{BlockingPacer, FramePacer};
pub use phrase::{Phrase, select_words};
pub use time::{InvalidTimeSample, TimeSample, TimeSource};
pub use word::{StatusKind, Word, WordParseError};

pub use color::Rgb;
pub use embassy_time::Duration;

/// Abstract pixel sink
///
/// Implement this trait to support different hardware platforms.
/// The display engine is generic over this trait and treats every call as
/// infallible; retries belong to the implementation.
pub trait OutputDriver {
    /// Set the color of one grid cell (0-63, row-major)
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Show the pixels set since the last present
    fn present(&mut self);

    /// Set the global brightness (0-255)
    fn set_brightness(&mut self, level: u8);
}

impl<O: OutputDriver + ?Sized> OutputDriver for &mut O {
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        (**self).set_pixel(index, color);
    }

    fn present(&mut self) {
        (**self).present();
    }

    fn set_brightness(&mut self, level: u8) {
        (**self).set_brightness(level);
    }
}
