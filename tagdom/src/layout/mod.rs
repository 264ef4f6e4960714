mod geometry;
mod measure;
mod rect;

use std::collections::HashMap;

pub use geometry::{Geometry, LayoutGeometry};
pub use measure::{intrinsic_size, measure};
pub use rect::Rect;

/// Committed layout: element id -> rect.
pub type LayoutResult = HashMap<String, Rect>;
