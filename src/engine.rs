use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::brightness::BrightnessPolicy;
use crate::color::{OFF, cell_hue, wheel};
use crate::config::ClockConfig;
use crate::mask::{CELL_COUNT, IlluminationMask};
use crate::pacing::FramePacer;
use crate::phrase::select_words;
use crate::time::TimeSample;
use crate::word::{StatusKind, Word};

/// Color phase wraps after five full turns of the wheel
pub const COLOR_PHASE_PERIOD: u16 = 256 * 5;

/// One frame of the startup sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupStep {
    /// Word to light, `None` for a blank frame
    pub word: Option<Word>,
    /// Extra pause after the frame, in flash delay units
    pub pause_units: u32,
}

const fn step(word: Word) -> StartupStep {
    StartupStep {
        word: Some(word),
        pause_units: 1,
    }
}

/// Startup self-test: brand, minute words, connectors, numerals, blank
pub const STARTUP_SEQUENCE: [StartupStep; 21] = [
    StartupStep {
        word: Some(Word::Brand),
        pause_units: 2,
    },
    step(Word::FiveMinutes),
    step(Word::TenMinutes),
    step(Word::Quarter),
    step(Word::Twenty),
    step(Word::Half),
    step(Word::To),
    step(Word::Past),
    step(Word::One),
    step(Word::Two),
    step(Word::Three),
    step(Word::Four),
    step(Word::Five),
    step(Word::Six),
    step(Word::Seven),
    step(Word::Eight),
    step(Word::Nine),
    step(Word::Ten),
    step(Word::Eleven),
    step(Word::Twelve),
    StartupStep {
        word: None,
        pause_units: 1,
    },
];

/// Whether a frame is being composed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Mask is empty, nothing activated since the last frame
    Idle,
    /// At least one word activated since the last frame
    Composing,
}

/// Display engine - owns the grid mask and the color sweep
///
/// Words are OR-ed into a pending mask and pushed to the output by
/// [`DisplayEngine::render_frame`], which consumes the mask. Every frame is
/// composed from scratch.
pub struct DisplayEngine<O: OutputDriver, P: FramePacer> {
    // External dependencies and configuration
    output: O,
    pacer: P,
    config: ClockConfig,

    // Internal state
    mask: IlluminationMask,
    color_phase: u16,
    brightness: Option<u8>,
}

impl<O: OutputDriver, P: FramePacer> DisplayEngine<O, P> {
    pub fn new(output: O, pacer: P, config: &ClockConfig) -> Self {
        Self {
            output,
            pacer,
            config: *config,
            mask: IlluminationMask::EMPTY,
            color_phase: 0,
            brightness: None,
        }
    }

    /// OR the word's cells into the pending frame
    pub fn activate_word(&mut self, word: Word) {
        self.mask.activate(word);
    }

    /// Push the pending frame, then start a new empty one
    pub fn render_frame(&mut self) {
        let mask = core::mem::take(&mut self.mask);
        self.render_mask(mask);
    }

    /// Push `mask` as one frame
    ///
    /// Lit cells get their wheel color at the current phase, the rest are
    /// off. Blocks for the frame delay, then advances the phase.
    pub fn render_mask(&mut self, mask: IlluminationMask) {
        for cell in 0..CELL_COUNT {
            let color = if mask.is_lit(cell) {
                wheel(cell_hue(cell, self.color_phase))
            } else {
                OFF
            };
            self.output.set_pixel(cell, color);
        }
        self.output.present();

        self.pacer.pause(self.config.frame_delay);
        self.color_phase = (self.color_phase + 1) % COLOR_PHASE_PERIOD;
    }

    /// Spell the sample and render it
    ///
    /// An out-of-range sample lights nothing new; the pending mask is
    /// rendered as is.
    pub fn display_time(&mut self, sample: TimeSample) {
        match select_words(sample.hour, sample.minute) {
            Ok(phrase) => {
                for word in phrase.iter() {
                    self.activate_word(word);
                }
            }
            Err(_err) => {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[DisplayEngine.display_time] invalid time {}:{}",
                    _err.hour, _err.minute
                );
            }
        }
        self.render_frame();
    }

    /// Forward the day or night level for `hour` to the output
    pub fn adjust_brightness(&mut self, hour: u8) -> u8 {
        let level = self.config.brightness.level_for(hour);
        #[cfg(feature = "esp32-log")]
        self.log_brightness_change(hour, level);
        self.output.set_brightness(level);
        self.brightness = Some(level);
        level
    }

    #[cfg(feature = "esp32-log")]
    fn log_brightness_change(&self, hour: u8, level: u8) {
        if self.brightness != Some(level) {
            println!(
                "[DisplayEngine.adjust_brightness] hour {} -> brightness {}",
                hour, level
            );
        }
    }

    /// Light every word in turn
    ///
    /// Runs [`STARTUP_SEQUENCE`]: one frame per step, each followed by its
    /// extra pause.
    pub fn flash_startup_sequence(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[DisplayEngine.flash_startup_sequence] start");

        for step in &STARTUP_SEQUENCE {
            if let Some(word) = step.word {
                self.activate_word(word);
            }
            self.render_frame();
            self.pacer.pause(self.config.flash_delay * step.pause_units);
        }

        #[cfg(feature = "esp32-log")]
        println!("[DisplayEngine.flash_startup_sequence] done");
    }

    /// Render one frame of a connectivity indicator
    pub fn show_status(&mut self, status: StatusKind) {
        #[cfg(feature = "esp32-log")]
        println!("[DisplayEngine.show_status] {}", status.as_str());

        self.activate_word(status.word());
        self.render_frame();
    }

    /// Sweep the wheel across the whole grid once
    ///
    /// Renders 256 full frames, pausing `wait` after each. Neither the
    /// color phase nor the pending mask are touched.
    pub fn rainbow_cycle(&mut self, wait: Duration) {
        for phase in 0..256u16 {
            for cell in 0..CELL_COUNT {
                self.output.set_pixel(cell, wheel(cell_hue(cell, phase)));
            }
            self.output.present();
            self.pacer.pause(wait);
        }
    }

    pub fn set_brightness_policy(&mut self, policy: BrightnessPolicy) {
        self.config.brightness = policy;
    }

    pub const fn state(&self) -> EngineState {
        if self.mask.is_empty() {
            EngineState::Idle
        } else {
            EngineState::Composing
        }
    }

    /// Pending mask of the frame being composed
    pub const fn mask(&self) -> &IlluminationMask {
        &self.mask
    }

    pub const fn color_phase(&self) -> u16 {
        self.color_phase
    }

    /// Last level forwarded to the output, if any
    pub const fn brightness(&self) -> Option<u8> {
        self.brightness
    }

    pub const fn config(&self) -> &ClockConfig {
        &self.config
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub const fn pacer(&self) -> &P {
        &self.pacer
    }
}
