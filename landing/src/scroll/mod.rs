//! Scroll capture: wheel and touch input turned into sequence progress.

mod controller;
mod gesture;
mod lock;
mod progress;

pub use controller::{InputOutcome, LockFlag, ScrollController};
pub use gesture::{DeltaMode, TouchTracker, WheelDelta};
pub use lock::{BodyStyleGuard, EventListener, ScrollLock};
pub use progress::{clamp_progress, step};
