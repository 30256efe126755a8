//! Output driver adapters
//!
//! The engine only talks to [`OutputDriver`]. These adapters map it onto
//! common sinks: a `smart-leds` strip writer, or a panel that takes packed
//! 16-bit colors.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use smart_leds::{SmartLedsWrite, brightness};

use crate::OutputDriver;
use crate::color::{OFF, Rgb, rgb565};
use crate::mask::CELL_COUNT;

/// Drives an addressable LED chain through [`SmartLedsWrite`]
///
/// Pixels are buffered until [`OutputDriver::present`], which writes the
/// whole grid scaled by the last brightness level.
pub struct SmartLedsOutput<W> {
    writer: W,
    frame: [Rgb; CELL_COUNT],
    brightness: u8,
}

impl<W> SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            frame: [OFF; CELL_COUNT],
            brightness: 255,
        }
    }

    /// Pixels as they will be written on the next present
    pub const fn frame(&self) -> &[Rgb; CELL_COUNT] {
        &self.frame
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.frame.get_mut(index) {
            *pixel = color;
        }
    }

    fn present(&mut self) {
        let pixels = brightness(self.frame.iter().copied(), self.brightness);
        if self.writer.write(pixels).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsOutput.present] failed to write frame");
        }
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }
}

/// Panel that accepts 5-6-5 packed pixels
pub trait Rgb565Driver {
    fn set_pixel_565(&mut self, index: usize, color: u16);

    fn show(&mut self);

    fn set_brightness(&mut self, level: u8);
}

/// Packs engine colors for a [`Rgb565Driver`]
pub struct Rgb565Output<D> {
    driver: D,
}

impl<D: Rgb565Driver> Rgb565Output<D> {
    pub const fn new(driver: D) -> Self {
        Self { driver }
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub fn into_inner(self) -> D {
        self.driver
    }
}

impl<D: Rgb565Driver> OutputDriver for Rgb565Output<D> {
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        self.driver.set_pixel_565(index, rgb565::pack(color));
    }

    fn present(&mut self) {
        self.driver.show();
    }

    fn set_brightness(&mut self, level: u8) {
        self.driver.set_brightness(level);
    }
}
