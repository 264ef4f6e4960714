mod color;
mod size;
mod style;

pub use color::Color;
pub use size::Size;
pub use style::Style;
