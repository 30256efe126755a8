#![allow(dead_code)]

use anavi_word_clock::{
    CELL_COUNT, ClockConfig, DisplayEngine, Duration, FramePacer, OutputDriver, Rgb,
};

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

pub type Frame = [Rgb; CELL_COUNT];

/// Output that keeps every presented frame
pub struct RecordingOutput {
    pending: Frame,
    pub frames: Vec<Frame>,
    pub brightness: Vec<u8>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self {
            pending: [BLACK; CELL_COUNT],
            frames: Vec::new(),
            brightness: Vec::new(),
        }
    }
}

impl OutputDriver for RecordingOutput {
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        self.pending[index] = color;
    }

    fn present(&mut self) {
        self.frames.push(self.pending);
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness.push(level);
    }
}

/// Pacer that records pauses instead of sleeping
#[derive(Default)]
pub struct RecordingPacer {
    pub pauses: Vec<Duration>,
}

impl FramePacer for RecordingPacer {
    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}

pub type TestEngine = DisplayEngine<RecordingOutput, RecordingPacer>;

pub fn engine() -> TestEngine {
    engine_with(&ClockConfig::default())
}

pub fn engine_with(config: &ClockConfig) -> TestEngine {
    DisplayEngine::new(RecordingOutput::new(), RecordingPacer::default(), config)
}

/// Rebuild the cell mask from a frame (cell `i` in bit `63 - i`)
pub fn lit_bits(frame: &Frame) -> u64 {
    frame
        .iter()
        .enumerate()
        .filter(|(_, color)| **color != BLACK)
        .fold(0, |bits, (cell, _)| bits | (1 << (CELL_COUNT - 1 - cell)))
}
