//! The six panels of the sequence and their curve table.

use std::fmt;

use super::Curve;

/// Opacity, vertical offset (px) and scale curves for one panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelCurves {
    pub opacity: Curve,
    pub offset_y: Curve,
    pub scale: Curve,
}

/// Interpolated visual state of a panel at one progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelStyle {
    pub opacity: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl PanelStyle {
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px) scale({});",
            self.opacity, self.translate_y, self.scale
        )
    }
}

/// Text lines share one shape: rise in, settle at the center key, drift up.
macro_rules! line_curves {
    ($enter:expr, $center:expr, $exit:expr) => {
        PanelCurves {
            opacity: Curve::new(&[($enter, 0.0), ($center, 1.0), ($exit, 0.0)]),
            offset_y: Curve::new(&[($enter, 10.0), ($center, 0.0), ($exit, -8.0)]),
            scale: Curve::new(&[($enter, 0.98), ($center, 1.0), ($exit, 0.985)]),
        }
    };
}

const HERO: PanelCurves = PanelCurves {
    opacity: Curve::new(&[(0.0, 1.0), (0.18, 1.0), (0.24, 0.0)]),
    offset_y: Curve::new(&[(0.0, 0.0), (0.18, -6.0), (0.24, -12.0)]),
    scale: Curve::new(&[(0.0, 1.0), (0.18, 0.99), (0.24, 0.98)]),
};
const LINE_1: PanelCurves = line_curves!(0.24, 0.34, 0.42);
const LINE_2: PanelCurves = line_curves!(0.42, 0.52, 0.6);
const LINE_3: PanelCurves = line_curves!(0.6, 0.7, 0.78);
// Line 4 fades out past 0.9, under the start of the reveal crossfade.
const LINE_4: PanelCurves = line_curves!(0.78, 0.86, 0.92);
const REVEAL: PanelCurves = PanelCurves {
    opacity: Curve::new(&[(0.9, 0.0), (1.0, 1.0)]),
    offset_y: Curve::new(&[(0.9, 8.0), (1.0, 0.0)]),
    scale: Curve::new(&[(0.9, 0.985), (1.0, 1.0)]),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Hero,
    Line1,
    Line2,
    Line3,
    Line4,
    Reveal,
}

impl Panel {
    /// Every panel, in sequence order.
    pub const ALL: [Panel; 6] = [
        Panel::Hero,
        Panel::Line1,
        Panel::Line2,
        Panel::Line3,
        Panel::Line4,
        Panel::Reveal,
    ];

    pub fn curves(self) -> &'static PanelCurves {
        match self {
            Panel::Hero => &HERO,
            Panel::Line1 => &LINE_1,
            Panel::Line2 => &LINE_2,
            Panel::Line3 => &LINE_3,
            Panel::Line4 => &LINE_4,
            Panel::Reveal => &REVEAL,
        }
    }

    /// Progress range over which this panel's curves change.
    pub fn window(self) -> (f64, f64) {
        self.curves().opacity.span()
    }

    pub fn style_at(self, progress: f64) -> PanelStyle {
        let curves = self.curves();
        PanelStyle {
            opacity: curves.opacity.sample(progress),
            translate_y: curves.offset_y.sample(progress),
            scale: curves.scale.sample(progress),
        }
    }

    /// The stage the sequence is in: the last panel whose window has begun.
    ///
    /// Hero owns progress 0; the reveal takes over as soon as its window
    /// opens at 0.9, even while line 4 is still fading.
    pub fn stage_at(progress: f64) -> Panel {
        Panel::ALL
            .iter()
            .rev()
            .copied()
            .find(|panel| progress >= panel.window().0)
            .unwrap_or(Panel::Hero)
    }

    pub fn name(self) -> &'static str {
        match self {
            Panel::Hero => "hero",
            Panel::Line1 => "line-1",
            Panel::Line2 => "line-2",
            Panel::Line3 => "line-3",
            Panel::Line4 => "line-4",
            Panel::Reveal => "reveal",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
