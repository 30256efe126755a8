mod wheel;

pub mod rgb565;

pub use wheel::{cell_hue, wheel};
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Unlit cell
pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };
