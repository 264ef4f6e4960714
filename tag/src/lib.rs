//! A toggleable, closable label widget built on `tagdom` elements.

pub mod color;
pub mod config;
pub mod error;
pub mod event;
pub mod state;
pub mod tag;

pub use config::{TagConfig, TagVariant};
pub use error::{Result, TagError};
pub use event::{CloseEvent, TagResult};
pub use state::{LabelState, Phase};
pub use tag::Tag;

pub mod prelude {
    pub use crate::config::{CloseRequestHandler, ClosedHandler, TagConfig, TagVariant, ToggleHandler};
    pub use crate::error::{Result, TagError};
    pub use crate::event::{CloseEvent, TagResult};
    pub use crate::state::{LabelState, Phase};
    pub use crate::tag::Tag;

    pub use tagdom::{Geometry, LayoutGeometry, Settled, TransitionDriver, ZoomTransition};
}
