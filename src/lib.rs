//! Scrollbook drives a sprite-sheet flip-book animation from vertical
//! scroll position: the displayed frame is a pure function of the scroll
//! trace, not of wall-clock time. Scrolling down advances frames, scrolling
//! up reverses them.
//!
//! # Pipeline overview
//!
//! 1. **Bind**: `SpriteSheet -> FrameTable` (validate, precompute every
//!    frame's background-position offset) and seed the scroll state.
//! 2. **Throttle**: raw scroll events open a one-shot window; excess events
//!    inside the window are dropped.
//! 3. **Deliver**: on window close, read the scroll offset, pick a
//!    direction, step the [`FrameCursor`], and gate on viewport visibility.
//! 4. **Paint**: commit the staged offset to the target inside the host's
//!    paint callback.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Host-agnostic**: all environment access goes through the
//!   [`Viewport`] and [`Surface`] capability traits, so the core runs (and
//!   tests) without a real browser or UI toolkit.
//! - **No hidden state**: throttle, cursor and scroll tracking are explicit
//!   owned records inside the [`Binding`] handle; releasing the handle ends
//!   the animation.
//! - **Front-loaded failure**: configuration is rejected at bind time;
//!   after a successful bind the pipeline does not fail.
#![forbid(unsafe_code)]

pub mod binding;
pub mod core;
pub mod cursor;
pub mod error;
pub mod sheet;
pub mod throttle;
pub mod view;

pub use binding::{BindOptions, Binding};
pub use self::core::{FrameIndex, Point, Rect, ScrollDirection};
pub use cursor::FrameCursor;
pub use error::{ScrollbookError, ScrollbookResult};
pub use sheet::{FrameTable, SpriteSheet};
pub use throttle::{Throttle, ThrottleAction};
pub use view::{Surface, Viewport, in_view_y};
