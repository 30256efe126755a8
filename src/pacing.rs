//! Frame pacing
//!
//! Every rendered frame is followed by a fixed pause that sets the animation
//! speed. The pause blocks the caller; nothing can cancel it.

use embassy_time::Duration;

/// Blocking pause between frames
///
/// Implement this trait to pace frames with a platform timer, or to skip
/// pauses entirely in tests and previews.
pub trait FramePacer {
    /// Block for `duration`
    fn pause(&mut self, duration: Duration);
}

impl<P: FramePacer + ?Sized> FramePacer for &mut P {
    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration);
    }
}

/// Pacer that busy-waits on the `embassy-time` clock
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingPacer;

impl FramePacer for BlockingPacer {
    fn pause(&mut self, duration: Duration) {
        embassy_time::block_for(duration);
    }
}
