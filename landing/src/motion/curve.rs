//! Piecewise-linear keyframe curves.

/// Keyframes as `(progress, value)` pairs with strictly increasing progress.
///
/// Sampling outside the first/last keyframe holds the edge value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curve {
    keys: &'static [(f64, f64)],
}

impl Curve {
    pub const fn new(keys: &'static [(f64, f64)]) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> &'static [(f64, f64)] {
        self.keys
    }

    /// Progress range covered by the keyframes.
    pub fn span(&self) -> (f64, f64) {
        match (self.keys.first(), self.keys.last()) {
            (Some(&(start, _)), Some(&(end, _))) => (start, end),
            _ => (0.0, 0.0),
        }
    }

    pub fn sample(&self, progress: f64) -> f64 {
        let (Some(&(first_at, first)), Some(&(last_at, last))) =
            (self.keys.first(), self.keys.last())
        else {
            return 0.0;
        };
        if progress <= first_at {
            return first;
        }
        if progress >= last_at {
            return last;
        }

        for pair in self.keys.windows(2) {
            let (from_at, from) = pair[0];
            let (to_at, to) = pair[1];
            if progress <= to_at {
                let t = (progress - from_at) / (to_at - from_at);
                // Weighted form lands exactly on keyframe values at t = 0 and t = 1.
                return from * (1.0 - t) + to * t;
            }
        }
        last
    }
}
