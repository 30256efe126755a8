//! Intent processing module
//!
//! The network side never touches the engine. It queues intents, and the
//! render loop drains them between frames.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::brightness::BrightnessPolicy;
use crate::word::StatusKind;

/// Request from outside the render loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockIntent {
    /// Show a connectivity indicator for one frame
    ShowStatus(StatusKind),
    /// Replay the startup sequence
    FlashWords,
    /// Replace the day/night brightness policy
    SetBrightnessPolicy(BrightnessPolicy),
}

/// Work collected from the pending intents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentEffects {
    /// Indicator to show; the most recent one wins
    pub status: Option<StatusKind>,
    /// Whether to replay the startup sequence
    pub flash_words: bool,
    /// New brightness policy to apply
    pub brightness_policy: Option<BrightnessPolicy>,
}

impl IntentEffects {
    /// Whether the render loop has anything to do before the time frame
    pub const fn has_effects(&self) -> bool {
        self.status.is_some() || self.flash_words || self.brightness_policy.is_some()
    }
}

/// Type alias for intent sender
pub type ClockIntentSender<'a, const SIZE: usize> =
    Sender<'a, CriticalSectionRawMutex, ClockIntent, SIZE>;

/// Type alias for intent receiver
pub type ClockIntentReceiver<'a, const SIZE: usize> =
    Receiver<'a, CriticalSectionRawMutex, ClockIntent, SIZE>;

/// Type alias for the intent channel, usable in a `static`
pub type ClockIntentChannel<const SIZE: usize> =
    Channel<CriticalSectionRawMutex, ClockIntent, SIZE>;

/// Drains queued intents into [`IntentEffects`]
pub struct IntentProcessor<'a, const SIZE: usize> {
    intents: ClockIntentReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> IntentProcessor<'a, SIZE> {
    pub const fn new(intents: ClockIntentReceiver<'a, SIZE>) -> Self {
        Self { intents }
    }

    /// Process all pending intents from the channel (non-blocking)
    pub fn process_pending(&mut self) -> IntentEffects {
        let mut effects = IntentEffects::default();

        while let Ok(intent) = self.intents.try_receive() {
            match intent {
                ClockIntent::ShowStatus(status) => {
                    effects.status = Some(status);
                }
                ClockIntent::FlashWords => {
                    effects.flash_words = true;
                }
                ClockIntent::SetBrightnessPolicy(policy) => {
                    effects.brightness_policy = Some(policy);
                }
            }
        }

        effects
    }
}
