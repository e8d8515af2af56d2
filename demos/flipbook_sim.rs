//! Headless run of the scroll pipeline: a 3200x640 logo sheet with 10x4
//! frames bound to a scripted page, scrolled down and back up.

use std::{cell::RefCell, rc::Rc, time::Duration};

use scrollbook::{BindOptions, Binding, Point, Rect, SpriteSheet, Surface, Viewport};

#[derive(Debug, Default)]
struct Host {
    scroll_offset: f64,
    commits: Vec<Point>,
}

struct SimViewport(Rc<RefCell<Host>>);

impl Viewport for SimViewport {
    fn scroll_offset(&self) -> f64 {
        self.0.borrow().scroll_offset
    }
    fn height(&self) -> f64 {
        800.0
    }
    fn schedule_timeout(&mut self, _wait: Duration) {
        // The simulation fires timers synchronously in the drive loop.
    }
    fn request_paint(&mut self) {}
}

struct SimLogo(Rc<RefCell<Host>>);

impl Surface for SimLogo {
    fn bounding_rect(&self) -> Rect {
        // The logo sits at the top of the page.
        let top = -self.0.borrow().scroll_offset;
        Rect::new(0.0, top, 320.0, top + 160.0)
    }
    fn set_background_offset(&mut self, offset: Point) {
        self.0.borrow_mut().commits.push(offset);
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let sheet = SpriteSheet::new(3200, 640, 10, 4)?;
    let host = Rc::new(RefCell::new(Host::default()));
    let mut binding = Binding::bind(
        SimViewport(host.clone()),
        SimLogo(host.clone()),
        sheet,
        BindOptions {
            wait: Duration::from_millis(30),
        },
    )?;

    // Scroll down for a dozen windows, then back up for six.
    let trace: Vec<f64> = (1..=12)
        .map(|i| f64::from(i) * 25.0)
        .chain((1..=6).rev().map(|i| f64::from(i) * 25.0))
        .collect();

    for offset in trace {
        let painted_before = host.borrow().commits.len();
        host.borrow_mut().scroll_offset = offset;
        binding.on_scroll();
        binding.on_timeout();
        binding.on_paint();

        let frame = binding.current_frame();
        let commit = host.borrow().commits.last().copied();
        match commit {
            Some(p) if host.borrow().commits.len() > painted_before => {
                println!("scroll {offset:>5}: frame {:>2} at ({}, {})", frame.0, p.x, p.y);
            }
            _ => println!("scroll {offset:>5}: frame {:>2} (culled)", frame.0),
        }
    }

    Ok(())
}
