use crate::{
    core::{FrameIndex, ScrollDirection},
    error::{ScrollbookError, ScrollbookResult},
};

/// Mutable position within a frame table.
///
/// Steps wrap around in both directions, so a scroll that runs past either
/// end of the sheet loops the animation. An empty table has no valid cursor;
/// that is caught at construction, the step functions are total.
#[derive(Clone, Copy, Debug)]
pub struct FrameCursor {
    index: usize,
    frame_count: usize,
}

impl FrameCursor {
    pub fn new(frame_count: usize) -> ScrollbookResult<Self> {
        if frame_count == 0 {
            return Err(ScrollbookError::config("frame count must be > 0"));
        }
        Ok(Self {
            index: 0,
            frame_count,
        })
    }

    pub fn current(&self) -> FrameIndex {
        FrameIndex(self.index)
    }

    pub fn advance(&mut self) -> FrameIndex {
        self.index = (self.index + 1) % self.frame_count;
        FrameIndex(self.index)
    }

    pub fn retreat(&mut self) -> FrameIndex {
        self.index = if self.index == 0 {
            self.frame_count - 1
        } else {
            self.index - 1
        };
        FrameIndex(self.index)
    }

    pub fn step(&mut self, direction: ScrollDirection) -> FrameIndex {
        match direction {
            ScrollDirection::Down => self.advance(),
            ScrollDirection::Up => self.retreat(),
        }
    }
}
