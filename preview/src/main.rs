//! Desktop preview for the word clock renderer
//!
//! Runs the real engine against a synthetic clock and draws the 8x8 grid.
//! Frames and their pauses are queued by the preview driver and played back
//! at the pace the engine asked for, so the startup sequence and the color
//! sweep look the way they would on the device.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration as StdDuration, Instant as StdInstant};

use anavi_word_clock::mask::row_col;
use anavi_word_clock::{
    CELL_COUNT, ClockConfig, ClockIntent, ClockIntentChannel, ClockIntentSender, DisplayEngine,
    Duration, FramePacer, GRID_HEIGHT, GRID_WIDTH, OutputDriver, Rgb, StatusKind, TimeSample,
    TimeSource, WordClock, select_words,
};
use eframe::egui::{self};

/// Intent channel size
const INTENT_CHANNEL_SIZE: usize = 8;

/// Size of each grid cell in pixels
const CELL_SIZE: f32 = 40.0;

/// Gap between cells
const CELL_GAP: f32 = 4.0;

/// Static intent channel for communication between UI and clock
static INTENTS_CHANNEL: ClockIntentChannel<INTENT_CHANNEL_SIZE> =
    ClockIntentChannel::<INTENT_CHANNEL_SIZE>::new();

const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// A presented frame and how long the engine paused after it
#[derive(Clone, Copy)]
struct QueuedFrame {
    pixels: [Rgb; CELL_COUNT],
    brightness: u8,
    hold: StdDuration,
}

/// Frames waiting to be shown, shared by the preview driver and pacer
struct Playback {
    pending: [Rgb; CELL_COUNT],
    brightness: u8,
    queue: VecDeque<QueuedFrame>,
}

impl Playback {
    fn new() -> Self {
        Self {
            pending: [BLACK; CELL_COUNT],
            brightness: 255,
            queue: VecDeque::new(),
        }
    }
}

struct PreviewOutput(Rc<RefCell<Playback>>);

impl OutputDriver for PreviewOutput {
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.0.borrow_mut().pending.get_mut(index) {
            *pixel = color;
        }
    }

    fn present(&mut self) {
        let mut playback = self.0.borrow_mut();
        let frame = QueuedFrame {
            pixels: playback.pending,
            brightness: playback.brightness,
            hold: StdDuration::ZERO,
        };
        playback.queue.push_back(frame);
    }

    fn set_brightness(&mut self, level: u8) {
        self.0.borrow_mut().brightness = level;
    }
}

/// Adds the requested pause to the last queued frame instead of sleeping
struct PreviewPacer(Rc<RefCell<Playback>>);

impl FramePacer for PreviewPacer {
    fn pause(&mut self, duration: Duration) {
        if let Some(last) = self.0.borrow_mut().queue.back_mut() {
            last.hold += StdDuration::from_millis(duration.as_millis());
        }
    }
}

/// Clock source driven by the UI
struct PreviewTime {
    sample: TimeSample,
}

impl TimeSource for PreviewTime {
    fn sample(&mut self) -> TimeSample {
        self.sample
    }
}

type PreviewClock =
    WordClock<'static, PreviewOutput, PreviewPacer, PreviewTime, INTENT_CHANNEL_SIZE>;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 640.0])
            .with_title("Word Clock Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "anavi-word-clock-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// The clock instance
    clock: PreviewClock,
    /// Intent sender for UI actions
    intent_sender: ClockIntentSender<'static, INTENT_CHANNEL_SIZE>,
    /// Frames produced by the engine, not yet shown
    playback: Rc<RefCell<Playback>>,
    /// Frame on screen
    current: Option<QueuedFrame>,
    /// When the frame on screen was first drawn
    shown_since: StdInstant,

    // UI state
    hour: u8,
    minute: u8,
    /// Whether synthetic time advances
    running: bool,
    /// Synthetic minutes per real second
    speed: f32,
    /// Fractional minutes not yet applied
    minute_carry: f32,
    /// Wall-clock reference for delta time
    last_update: StdInstant,
    /// Whether to scale cells by the engine brightness
    apply_brightness: bool,
}

impl PreviewApp {
    fn new() -> Self {
        let playback = Rc::new(RefCell::new(Playback::new()));
        let config = ClockConfig::default();
        let engine = DisplayEngine::new(
            PreviewOutput(Rc::clone(&playback)),
            PreviewPacer(Rc::clone(&playback)),
            &config,
        );
        let time = PreviewTime {
            sample: TimeSample { hour: 9, minute: 0 },
        };
        let mut clock = WordClock::new(engine, time, INTENTS_CHANNEL.receiver());
        clock.start();

        Self {
            clock,
            intent_sender: INTENTS_CHANNEL.sender(),
            playback,
            current: None,
            shown_since: StdInstant::now(),
            hour: 9,
            minute: 0,
            running: false,
            speed: 1.0,
            minute_carry: 0.0,
            last_update: StdInstant::now(),
            apply_brightness: false,
        }
    }

    fn send(&self, intent: ClockIntent) {
        let _ = self.intent_sender.try_send(intent);
    }

    /// Advance synthetic time based on wall clock and speed
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_update);
        self.last_update = now;

        if !self.running {
            return;
        }

        self.minute_carry += delta.as_secs_f32() * self.speed;
        while self.minute_carry >= 1.0 {
            self.minute_carry -= 1.0;
            self.minute += 1;
            if self.minute == 60 {
                self.minute = 0;
                self.hour = (self.hour + 1) % 24;
            }
        }
    }

    /// Show the next queued frame once the current one has been held long enough
    fn advance_playback(&mut self) {
        let now = StdInstant::now();
        if let Some(current) = self.current
            && now.duration_since(self.shown_since) < current.hold
        {
            return;
        }

        if self.playback.borrow().queue.is_empty() {
            self.clock.time_source_mut().sample = TimeSample {
                hour: self.hour,
                minute: self.minute,
            };
            self.clock.tick();
        }

        if let Some(next) = self.playback.borrow_mut().queue.pop_front() {
            self.current = Some(next);
            self.shown_since = now;
        }
    }

    fn cell_color(&self, color: Rgb, brightness: u8) -> egui::Color32 {
        if !self.apply_brightness {
            return egui::Color32::from_rgb(color.r, color.g, color.b);
        }
        #[allow(clippy::cast_possible_truncation)]
        let scale = |channel: u8| ((u16::from(channel) * (u16::from(brightness) + 1)) >> 8) as u8;
        egui::Color32::from_rgb(scale(color.r), scale(color.g), scale(color.b))
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.advance_playback();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            // <TimeControls>
            ui.horizontal(|ui| {
                ui.label("Hour:");
                ui.add(egui::Slider::new(&mut self.hour, 0..=23));
                ui.label("Minute:");
                ui.add(egui::Slider::new(&mut self.minute, 0..=59));
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                    self.last_update = StdInstant::now();
                }
                ui.label("Minutes per second:");
                ui.add(egui::Slider::new(&mut self.speed, 0.1..=60.0).logarithmic(true));
            });
            // </TimeControls>

            ui.add_space(4.0);

            // <IntentControls>
            ui.horizontal(|ui| {
                if ui.button("Wi-Fi").clicked() {
                    self.send(ClockIntent::ShowStatus(StatusKind::Wifi));
                }
                if ui.button("Home Assistant").clicked() {
                    self.send(ClockIntent::ShowStatus(StatusKind::HomeAssistant));
                }
                if ui.button("Flash words").clicked() {
                    self.send(ClockIntent::FlashWords);
                }
                ui.checkbox(&mut self.apply_brightness, "Apply brightness");
            });
            // </IntentControls>

            ui.add_space(8.0);

            let phrase = match select_words(self.hour, self.minute) {
                Ok(phrase) => phrase
                    .iter()
                    .map(|word| word.as_str())
                    .collect::<Vec<_>>()
                    .join(" "),
                Err(_) => String::from("invalid time"),
            };
            let brightness = self.current.map_or(0, |frame| frame.brightness);
            ui.label(format!(
                "{:02}:{:02}  {phrase}  (brightness {brightness}, phase {})",
                self.hour,
                self.minute,
                self.clock.engine().color_phase()
            ));

            ui.add_space(8.0);

            // === Grid ===
            let pitch = CELL_SIZE + CELL_GAP;
            #[allow(clippy::cast_precision_loss)]
            let size = egui::vec2(GRID_WIDTH as f32 * pitch, GRID_HEIGHT as f32 * pitch);
            let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
            let origin = response.rect.min;

            let pixels = self.current.map_or([BLACK; CELL_COUNT], |frame| frame.pixels);
            #[allow(clippy::cast_precision_loss)]
            for (cell, pixel) in pixels.iter().enumerate() {
                let (row, col) = row_col(cell);
                let rect = egui::Rect::from_min_size(
                    egui::pos2(origin.x + col as f32 * pitch, origin.y + row as f32 * pitch),
                    egui::vec2(CELL_SIZE, CELL_SIZE),
                );
                let color = if *pixel == BLACK {
                    egui::Color32::from_gray(24)
                } else {
                    self.cell_color(*pixel, brightness)
                };
                painter.rect_filled(rect, 4.0, color);
            }
        });
    }
}
