//! Frame acquisition and head-orientation seams

use crate::types::OrientationReading;

/// Source of video frames. `None` means acquisition failed and the game
/// loop must stop.
pub trait FrameSource {
    type Frame;

    fn read_frame(&mut self) -> Option<Self::Frame>;
}

/// Head-pose collaborator, called once per frame. May annotate the frame
/// for display.
pub trait OrientationSignal<F> {
    fn process(&mut self, frame: &mut F) -> OrientationReading;
}
