pub mod animation;
pub mod element;
pub mod hit;
pub mod layout;
pub mod text;
pub mod transitions;
pub mod types;

pub use animation::{Settled, TransitionDriver, ZoomTransition};
pub use element::{dispatch_path, find_element, ClassList, Content, Element};
pub use hit::hit_test;
pub use layout::{Geometry, LayoutGeometry, LayoutResult, Rect};
pub use transitions::{Easing, TransitionConfig};
pub use types::*;
