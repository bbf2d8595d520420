//! Progress-to-style mapping for the reveal sequence.

mod curve;
mod panels;

pub use curve::Curve;
pub use panels::{Panel, PanelCurves, PanelStyle};
