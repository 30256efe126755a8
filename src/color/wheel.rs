//! Hue wheel used by the color sweep
//!
//! Positions 0-255 walk red -> blue -> green -> red. The position is
//! inverted before lookup, so increasing positions actually travel the wheel
//! backwards; the sweep direction on the grid depends on it.

use super::Rgb;
use crate::mask::CELL_COUNT;

/// Color at `position` on the wheel
pub const fn wheel(position: u8) -> Rgb {
    let position = 255 - position;
    if position < 85 {
        Rgb {
            r: 255 - position * 3,
            g: 0,
            b: position * 3,
        }
    } else if position < 170 {
        let position = position - 85;
        Rgb {
            r: 0,
            g: position * 3,
            b: 255 - position * 3,
        }
    } else {
        let position = position - 170;
        Rgb {
            r: position * 3,
            g: 255 - position * 3,
            b: 0,
        }
    }
}

/// Wheel position of `cell` at color phase `phase`
///
/// Cells are spread evenly over the wheel and the whole grid is rotated by
/// the phase.
#[allow(clippy::cast_possible_truncation)]
pub const fn cell_hue(cell: usize, phase: u16) -> u8 {
    ((cell * 256 / CELL_COUNT + phase as usize) & 0xFF) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_segment_edges() {
        assert_eq!(wheel(255), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(wheel(171), Rgb { r: 3, g: 0, b: 252 });
        assert_eq!(wheel(170), Rgb { r: 0, g: 0, b: 255 });
        assert_eq!(wheel(86), Rgb { r: 0, g: 252, b: 3 });
        assert_eq!(wheel(85), Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(wheel(0), Rgb { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_cell_hue_wraps() {
        assert_eq!(cell_hue(0, 0), 0);
        assert_eq!(cell_hue(1, 0), 4);
        assert_eq!(cell_hue(63, 0), 252);
        assert_eq!(cell_hue(63, 4), 0);
        assert_eq!(cell_hue(0, 1279), 255);
    }
}
