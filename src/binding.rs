use std::time::Duration;

use crate::{
    core::{FrameIndex, Point, ScrollDirection},
    cursor::FrameCursor,
    error::ScrollbookResult,
    sheet::{FrameTable, SpriteSheet},
    throttle::{Throttle, ThrottleAction},
    view::{Surface, Viewport, in_view_y},
};

/// Tuning knobs for [`Binding::bind`].
#[derive(Clone, Copy, Debug)]
pub struct BindOptions {
    /// Minimum interval between two scroll deliveries.
    pub wait: Duration,
}

impl Default for BindOptions {
    fn default() -> Self {
        Self {
            wait: Duration::from_millis(30),
        }
    }
}

/// A bound scroll animation: one target element, one sprite sheet, one
/// throttled scroll listener.
///
/// The host owns the real event sources and forwards them:
///
/// - every raw scroll event goes to [`on_scroll`](Self::on_scroll),
/// - a timer armed via [`Viewport::schedule_timeout`] fires into
///   [`on_timeout`](Self::on_timeout),
/// - a paint callback requested via [`Viewport::request_paint`] lands in
///   [`on_paint`](Self::on_paint).
///
/// All animation state lives in the handle, so dropping or
/// [`release`](Self::release)-ing it ends the animation; there is no
/// listener left behind to unhook, and a second bind on the same element is
/// simply a new, independent handle.
pub struct Binding<V: Viewport, S: Surface> {
    viewport: V,
    surface: S,
    frames: FrameTable,
    cursor: FrameCursor,
    frame_height: f64,
    last_scroll_offset: f64,
    throttle: Throttle<()>,
    staged: Option<Point>,
}

impl<V: Viewport, S: Surface> Binding<V, S> {
    /// Validates the sheet, precomputes the frame table and seeds the scroll
    /// state from the viewport's current position.
    ///
    /// Configuration errors surface here; after a successful bind the
    /// pipeline does not fail.
    pub fn bind(
        viewport: V,
        surface: S,
        sheet: SpriteSheet,
        options: BindOptions,
    ) -> ScrollbookResult<Self> {
        let frames = FrameTable::build(&sheet)?;
        let cursor = FrameCursor::new(frames.len())?;
        let last_scroll_offset = viewport.scroll_offset();
        Ok(Self {
            viewport,
            surface,
            frames,
            cursor,
            frame_height: sheet.frame_height(),
            last_scroll_offset,
            throttle: Throttle::new(options.wait),
            staged: None,
        })
    }

    /// Frame the cursor currently points at.
    pub fn current_frame(&self) -> FrameIndex {
        self.cursor.current()
    }

    /// Entry for every raw scroll event. Opens a throttle window when idle;
    /// excess events within an open window are dropped here.
    pub fn on_scroll(&mut self) {
        if let ThrottleAction::Schedule(wait) = self.throttle.observe(()) {
            self.viewport.schedule_timeout(wait);
        }
    }

    /// Entry for the one-shot timer armed by [`on_scroll`](Self::on_scroll).
    /// Runs one throttled delivery; a stray fire with no window open is
    /// ignored.
    #[tracing::instrument(skip(self))]
    pub fn on_timeout(&mut self) {
        if self.throttle.fire().is_none() {
            return;
        }
        self.deliver();
    }

    /// Entry for the paint callback. Commits the staged offset, if any, to
    /// the surface. Deliveries staged between two paints coalesce to the
    /// latest offset.
    pub fn on_paint(&mut self) {
        if let Some(offset) = self.staged.take() {
            self.surface.set_background_offset(offset);
        }
    }

    /// Consumes the binding and hands the environment capabilities back.
    pub fn release(self) -> (V, S) {
        (self.viewport, self.surface)
    }

    fn deliver(&mut self) {
        let offset = self.viewport.scroll_offset();
        let direction = ScrollDirection::from_offsets(self.last_scroll_offset, offset);
        let frame = self.cursor.step(direction);
        // Updated even when the paint below is culled, so direction
        // tracking stays correct across invisible stretches.
        self.last_scroll_offset = offset;

        let rect = self.surface.bounding_rect();
        if !in_view_y(rect, self.viewport.height(), self.frame_height) {
            tracing::trace!(frame = frame.0, "target out of view, skipping paint");
            return;
        }

        self.staged = Some(self.frames.offset(frame));
        self.viewport.request_paint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rect;
    use std::{cell::RefCell, rc::Rc};

    #[derive(Debug)]
    struct HostState {
        scroll_offset: f64,
        viewport_height: f64,
        rect: Rect,
        timeouts: Vec<Duration>,
        paint_requests: usize,
        commits: Vec<Point>,
    }

    impl HostState {
        fn new() -> Rc<RefCell<Self>> {
            Rc::new(RefCell::new(Self {
                scroll_offset: 0.0,
                viewport_height: 800.0,
                rect: Rect::new(0.0, 100.0, 320.0, 260.0),
                timeouts: Vec::new(),
                paint_requests: 0,
                commits: Vec::new(),
            }))
        }
    }

    struct FakeViewport(Rc<RefCell<HostState>>);

    impl Viewport for FakeViewport {
        fn scroll_offset(&self) -> f64 {
            self.0.borrow().scroll_offset
        }
        fn height(&self) -> f64 {
            self.0.borrow().viewport_height
        }
        fn schedule_timeout(&mut self, wait: Duration) {
            self.0.borrow_mut().timeouts.push(wait);
        }
        fn request_paint(&mut self) {
            self.0.borrow_mut().paint_requests += 1;
        }
    }

    struct FakeSurface(Rc<RefCell<HostState>>);

    impl Surface for FakeSurface {
        fn bounding_rect(&self) -> Rect {
            self.0.borrow().rect
        }
        fn set_background_offset(&mut self, offset: Point) {
            self.0.borrow_mut().commits.push(offset);
        }
    }

    fn logo_binding(
        host: &Rc<RefCell<HostState>>,
    ) -> Binding<FakeViewport, FakeSurface> {
        Binding::bind(
            FakeViewport(host.clone()),
            FakeSurface(host.clone()),
            SpriteSheet::new(3200, 640, 10, 4).unwrap(),
            BindOptions::default(),
        )
        .unwrap()
    }

    fn scroll_to(host: &Rc<RefCell<HostState>>, offset: f64) {
        host.borrow_mut().scroll_offset = offset;
    }

    /// One full throttle window: scroll event, timer fire.
    fn scroll_and_fire(
        binding: &mut Binding<FakeViewport, FakeSurface>,
        host: &Rc<RefCell<HostState>>,
        offset: f64,
    ) {
        scroll_to(host, offset);
        binding.on_scroll();
        binding.on_timeout();
    }

    #[test]
    fn scroll_down_advances_and_back_up_retreats() {
        let host = HostState::new();
        let mut binding = logo_binding(&host);

        scroll_and_fire(&mut binding, &host, 50.0);
        assert_eq!(binding.current_frame(), FrameIndex(1));

        scroll_and_fire(&mut binding, &host, 40.0);
        assert_eq!(binding.current_frame(), FrameIndex(0));
    }

    #[test]
    fn bind_seeds_last_offset_from_viewport() {
        let host = HostState::new();
        scroll_to(&host, 100.0);
        let mut binding = logo_binding(&host);

        // First delivery at a lower offset must retreat, wrapping to the
        // last frame.
        scroll_and_fire(&mut binding, &host, 90.0);
        assert_eq!(binding.current_frame(), FrameIndex(39));
    }

    #[test]
    fn scroll_arms_one_timer_per_window() {
        let host = HostState::new();
        let mut binding = logo_binding(&host);

        binding.on_scroll();
        binding.on_scroll();
        binding.on_scroll();
        assert_eq!(host.borrow().timeouts.len(), 1);
        assert_eq!(host.borrow().timeouts[0], Duration::from_millis(30));

        binding.on_timeout();
        binding.on_scroll();
        assert_eq!(host.borrow().timeouts.len(), 2);
    }

    #[test]
    fn visible_delivery_stages_and_paints_the_frame_offset() {
        let host = HostState::new();
        let mut binding = logo_binding(&host);

        scroll_and_fire(&mut binding, &host, 50.0);
        assert_eq!(host.borrow().paint_requests, 1);
        assert!(host.borrow().commits.is_empty());

        binding.on_paint();
        assert_eq!(host.borrow().commits, vec![Point::new(-320.0, 0.0)]);

        // Nothing staged: a second paint callback is a no-op.
        binding.on_paint();
        assert_eq!(host.borrow().commits.len(), 1);
    }

    #[test]
    fn culled_delivery_still_tracks_direction() {
        let host = HostState::new();
        let mut binding = logo_binding(&host);

        // Push the target far below the viewport band.
        host.borrow_mut().rect = Rect::new(0.0, 2000.0, 320.0, 2160.0);
        scroll_and_fire(&mut binding, &host, 50.0);
        assert_eq!(binding.current_frame(), FrameIndex(1));
        assert_eq!(host.borrow().paint_requests, 0);

        // Back in view: the earlier offset update makes 40.0 a retreat, not
        // an advance from the stale bind-time 0.0.
        host.borrow_mut().rect = Rect::new(0.0, 100.0, 320.0, 260.0);
        scroll_and_fire(&mut binding, &host, 40.0);
        assert_eq!(binding.current_frame(), FrameIndex(0));
        assert_eq!(host.borrow().paint_requests, 1);
    }

    #[test]
    fn deliveries_between_paints_coalesce_to_latest() {
        let host = HostState::new();
        let mut binding = logo_binding(&host);

        scroll_and_fire(&mut binding, &host, 50.0);
        scroll_and_fire(&mut binding, &host, 100.0);
        binding.on_paint();

        // Two frames advanced, one commit, carrying the newest offset.
        assert_eq!(host.borrow().commits, vec![Point::new(-640.0, 0.0)]);
    }

    #[test]
    fn stray_timeout_is_ignored() {
        let host = HostState::new();
        let mut binding = logo_binding(&host);

        binding.on_timeout();
        assert_eq!(binding.current_frame(), FrameIndex(0));
        assert_eq!(host.borrow().paint_requests, 0);
    }

    #[test]
    fn bind_rejects_invalid_sheets() {
        let host = HostState::new();
        let result = Binding::bind(
            FakeViewport(host.clone()),
            FakeSurface(host.clone()),
            SpriteSheet {
                sheet_width: 3200,
                sheet_height: 640,
                columns: 0,
                rows: 4,
            },
            BindOptions::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn release_returns_the_capabilities() {
        let host = HostState::new();
        let binding = logo_binding(&host);
        let (viewport, _surface) = binding.release();
        assert_eq!(viewport.scroll_offset(), 0.0);
    }
}
