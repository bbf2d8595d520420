// Sequence panels
// Developed by the Ampup team

mod hero;
mod layer;
mod lines;
mod reveal;

pub use hero::Hero;
pub use layer::PanelLayer;
pub use lines::Lines;
pub use reveal::Reveal;
