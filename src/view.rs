use std::time::Duration;

use crate::core::{Point, Rect};

/// Window-like side of the host: scroll state reads plus the two deferral
/// primitives the pipeline relies on.
///
/// `schedule_timeout` and `request_paint` are fire-and-forget requests. The
/// host must route the matching callbacks back into
/// [`Binding::on_timeout`](crate::binding::Binding::on_timeout) and
/// [`Binding::on_paint`](crate::binding::Binding::on_paint); neither call
/// blocks or runs animation logic inline.
pub trait Viewport {
    /// Current vertical scroll offset, in pixels from the top of the page.
    fn scroll_offset(&self) -> f64;

    /// Height of the visible viewport, in pixels.
    fn height(&self) -> f64;

    /// Arm a one-shot timer.
    fn schedule_timeout(&mut self, wait: Duration);

    /// Ask for a callback just before the next repaint.
    fn request_paint(&mut self);
}

/// Element-like side of the host: the single animated target.
pub trait Surface {
    /// Bounding rectangle of the target in viewport-relative coordinates.
    /// Queried fresh on every delivery; layout may have reflowed between
    /// scrolls.
    fn bounding_rect(&self) -> Rect;

    /// Write the background-position offset that reveals a frame.
    fn set_background_offset(&mut self, offset: Point);
}

/// True when the rectangle sits within the viewport's vertical band,
/// extended by `margin` above and below.
pub fn in_view_y(rect: Rect, viewport_height: f64, margin: f64) -> bool {
    rect.y0 >= -margin && rect.y1 <= viewport_height + margin
}
