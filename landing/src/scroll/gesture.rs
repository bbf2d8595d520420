//! Raw input normalisation: wheel deltas and single-finger drags.

/// `WheelEvent.deltaMode` units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

impl DeltaMode {
    pub fn from_dom(mode: u32) -> Self {
        match mode {
            1 => DeltaMode::Line,
            2 => DeltaMode::Page,
            _ => DeltaMode::Pixel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelDelta {
    pub delta_y: f64,
    pub mode: DeltaMode,
}

impl WheelDelta {
    pub fn pixels(delta_y: f64) -> Self {
        Self {
            delta_y,
            mode: DeltaMode::Pixel,
        }
    }

    /// Vertical delta in pixels. Non-finite input counts as no movement.
    pub fn to_pixels(self, line_height_px: f64, page_height_px: f64) -> f64 {
        let px = match self.mode {
            DeltaMode::Pixel => self.delta_y,
            DeltaMode::Line => self.delta_y * line_height_px,
            DeltaMode::Page => self.delta_y * page_height_px,
        };
        if px.is_finite() { px } else { 0.0 }
    }
}

/// Tracks the first touch point of the current gesture.
///
/// Dragging up yields a positive delta, the same direction as wheeling down.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TouchTracker {
    last_y: Option<f64>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_y(&self) -> Option<f64> {
        self.last_y
    }

    pub fn start(&mut self, y: f64) {
        self.last_y = Some(y);
    }

    /// Record a move to `y` and return the pixel delta since the last point.
    ///
    /// A move without a preceding start anchors the gesture and yields zero.
    pub fn move_to(&mut self, y: f64) -> f64 {
        let last = self.last_y.unwrap_or(y);
        self.last_y = Some(y);
        last - y
    }

    pub fn end(&mut self) {
        self.last_y = None;
    }
}
