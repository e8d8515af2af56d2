use std::time::Duration;

/// Decision returned by [`Throttle::observe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThrottleAction {
    /// No window was open: the caller must arm a one-shot timer for the
    /// returned duration and route its fire back into [`Throttle::fire`].
    Schedule(Duration),
    /// A window is already open; this call gets no delivery of its own.
    Ignore,
}

/// One-shot-window rate limiter.
///
/// The first event observed while idle opens a window of `wait`. Every event
/// observed while the window is open is dropped — it neither extends nor
/// restarts the timer — but it still overwrites the latest-event slot, so
/// the delivery that closes the window carries the newest event seen.
///
/// The throttle owns no clock and no timer: scheduling is an effect the
/// caller performs in response to [`ThrottleAction::Schedule`].
#[derive(Clone, Debug)]
pub struct Throttle<E> {
    wait: Duration,
    pending: bool,
    latest: Option<E>,
}

impl<E> Throttle<E> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: false,
            latest: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// True while a window is open, i.e. a scheduled fire has not arrived.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn observe(&mut self, event: E) -> ThrottleAction {
        self.latest = Some(event);
        if self.pending {
            ThrottleAction::Ignore
        } else {
            self.pending = true;
            ThrottleAction::Schedule(self.wait)
        }
    }

    /// Closes the window and yields the newest observed event. A fire with
    /// no open window returns `None`.
    pub fn fire(&mut self) -> Option<E> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        self.latest.take()
    }
}
