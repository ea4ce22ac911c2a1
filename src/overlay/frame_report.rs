use std::cell::Cell;
use std::rc::Rc;

use crate::core::FrameRect;

/// Receives the overlay panel's frame after every layout pass.
///
/// Writes are last-write-wins; repeating the same frame is harmless.
pub trait FrameSink {
    fn frame_resolved(&mut self, frame: FrameRect);
}

impl<F: FnMut(FrameRect)> FrameSink for F {
    fn frame_resolved(&mut self, frame: FrameRect) {
        self(frame);
    }
}

/// Shared output slot the caller polls after each layout pass.
///
/// Clones observe the same slot. Single-thread only.
#[derive(Debug, Clone, Default)]
pub struct FrameSlot {
    frame: Rc<Cell<Option<FrameRect>>>,
    writes: Rc<Cell<u64>>,
}

impl FrameSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest reported frame, if any pass has completed.
    #[must_use]
    pub fn get(&self) -> Option<FrameRect> {
        self.frame.get()
    }

    /// Number of frames written so far, including repeats.
    #[must_use]
    pub fn write_count(&self) -> u64 {
        self.writes.get()
    }

    pub fn clear(&self) {
        self.frame.set(None);
    }
}

impl FrameSink for FrameSlot {
    fn frame_resolved(&mut self, frame: FrameRect) {
        self.frame.set(Some(frame));
        self.writes.set(self.writes.get() + 1);
    }
}
