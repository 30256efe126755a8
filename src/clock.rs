//! Word clock tick loop
//!
//! Ties the engine to a time source and the intent channel. The caller owns
//! the loop:
//!
//! ```ignore
//! let mut clock = WordClock::new(engine, rtc, INTENTS.receiver());
//! clock.start();
//! loop {
//!     clock.tick();
//! }
//! ```
//!
//! Each tick blocks for at least one frame delay inside the engine.

use crate::OutputDriver;
use crate::engine::DisplayEngine;
use crate::intent::{ClockIntentReceiver, IntentEffects, IntentProcessor};
use crate::pacing::FramePacer;
use crate::time::{TimeSample, TimeSource};

pub struct WordClock<'a, O, P, T, const INTENT_CHANNEL_SIZE: usize>
where
    O: OutputDriver,
    P: FramePacer,
    T: TimeSource,
{
    engine: DisplayEngine<O, P>,
    time: T,
    intent_processor: IntentProcessor<'a, INTENT_CHANNEL_SIZE>,
}

impl<'a, O, P, T, const INTENT_CHANNEL_SIZE: usize> WordClock<'a, O, P, T, INTENT_CHANNEL_SIZE>
where
    O: OutputDriver,
    P: FramePacer,
    T: TimeSource,
{
    pub fn new(
        engine: DisplayEngine<O, P>,
        time: T,
        intents: ClockIntentReceiver<'a, INTENT_CHANNEL_SIZE>,
    ) -> Self {
        Self {
            engine,
            time,
            intent_processor: IntentProcessor::new(intents),
        }
    }

    /// Run the startup sequence
    pub fn start(&mut self) {
        self.engine.flash_startup_sequence();
    }

    /// Process one loop iteration
    ///
    /// Applies pending intents, then pulls a fresh sample, sets the
    /// brightness for its hour and renders its phrase. Returns the sample.
    pub fn tick(&mut self) -> TimeSample {
        let effects = self.intent_processor.process_pending();
        if effects.has_effects() {
            self.apply_effects(&effects);
        }

        let sample = self.time.sample();
        self.engine.adjust_brightness(sample.hour);
        self.engine.display_time(sample);
        sample
    }

    /// Apply side effects from intent processing
    fn apply_effects(&mut self, effects: &IntentEffects) {
        if let Some(policy) = effects.brightness_policy {
            self.engine.set_brightness_policy(policy);
        }

        if effects.flash_words {
            self.engine.flash_startup_sequence();
        }

        if let Some(status) = effects.status {
            self.engine.show_status(status);
        }
    }

    pub const fn engine(&self) -> &DisplayEngine<O, P> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut DisplayEngine<O, P> {
        &mut self.engine
    }

    pub fn time_source_mut(&mut self) -> &mut T {
        &mut self.time
    }
}
