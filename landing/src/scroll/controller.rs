//! Progress state and the per-event update rules.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::gesture::{TouchTracker, WheelDelta};
use super::progress::step;
use crate::config::ScrollConfig;

/// Shared lock state, read live by handlers registered once per lock.
#[derive(Debug, Clone, Default)]
pub struct LockFlag(Rc<Cell<bool>>);

impl LockFlag {
    pub fn new(locked: bool) -> Self {
        Self(Rc::new(Cell::new(locked)))
    }

    pub fn is_locked(&self) -> bool {
        self.0.get()
    }

    pub fn set(&self, locked: bool) {
        self.0.set(locked);
    }
}

/// What an input event did to the sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputOutcome {
    /// Unlocked, or nothing to track. Leave the event alone.
    Ignored,
    /// Gesture bookkeeping only; native handling continues.
    Tracked,
    /// Progress was recomputed. The caller suppresses native scrolling.
    Advanced(f64),
}

#[derive(Debug)]
pub struct ScrollController {
    config: ScrollConfig,
    lock: LockFlag,
    progress: Cell<f64>,
    touch: RefCell<TouchTracker>,
}

impl ScrollController {
    pub fn new(config: &ScrollConfig, lock: LockFlag) -> Self {
        Self {
            config: *config,
            lock,
            progress: Cell::new(0.0),
            touch: RefCell::new(TouchTracker::new()),
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress.get()
    }

    pub fn lock_flag(&self) -> &LockFlag {
        &self.lock
    }

    pub fn wheel(&self, delta: WheelDelta, page_height_px: f64) -> InputOutcome {
        if !self.lock.is_locked() {
            return InputOutcome::Ignored;
        }
        let px = delta.to_pixels(self.config.line_height_px, page_height_px);
        self.advance(px)
    }

    /// `first_y` is the first touch point, if the event carries any.
    pub fn touch_start(&self, first_y: Option<f64>) -> InputOutcome {
        if !self.lock.is_locked() {
            return InputOutcome::Ignored;
        }
        match first_y {
            Some(y) => {
                self.touch.borrow_mut().start(y);
                InputOutcome::Tracked
            }
            None => InputOutcome::Ignored,
        }
    }

    pub fn touch_move(&self, first_y: Option<f64>) -> InputOutcome {
        if !self.lock.is_locked() {
            return InputOutcome::Ignored;
        }
        let Some(y) = first_y else {
            return InputOutcome::Ignored;
        };
        let delta = self.touch.borrow_mut().move_to(y);
        self.advance(delta)
    }

    /// Ends the gesture. Also used for `touchcancel`.
    ///
    /// Clears the anchor even while unlocked, so a gesture that outlives an
    /// unlock never resumes from a stale point.
    pub fn touch_end(&self) -> InputOutcome {
        self.touch.borrow_mut().end();
        InputOutcome::Tracked
    }

    fn advance(&self, delta_px: f64) -> InputOutcome {
        let next = step(self.progress.get(), delta_px, self.config.divisor);
        self.progress.set(next);
        tracing::trace!(delta_px, progress = next, "progress advanced");
        InputOutcome::Advanced(next)
    }
}
