pub use kurbo::{Point, Rect};

/// Index into a [`FrameTable`](crate::sheet::FrameTable), 0-based, row-major.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub usize);

/// Direction of the scroll movement since the previous delivery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Offset grew: the page moved down, the animation advances.
    Down,
    /// Offset shrank or stayed put: the animation retreats.
    Up,
}

impl ScrollDirection {
    /// Classifies a pair of scroll offsets. An unchanged offset counts as
    /// `Up`: only a strictly greater offset advances.
    pub fn from_offsets(prev: f64, curr: f64) -> Self {
        if curr > prev { Self::Down } else { Self::Up }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_tracks_offset_growth() {
        assert_eq!(ScrollDirection::from_offsets(0.0, 50.0), ScrollDirection::Down);
        assert_eq!(ScrollDirection::from_offsets(50.0, 40.0), ScrollDirection::Up);
    }

    #[test]
    fn equal_offsets_count_as_up() {
        assert_eq!(ScrollDirection::from_offsets(25.0, 25.0), ScrollDirection::Up);
    }
}
