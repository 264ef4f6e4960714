//! Error types for the tag widget.

use thiserror::Error;

/// Errors raised by [`Tag`](crate::Tag) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    /// A variant name that is neither `default` nor `simple`.
    #[error("unknown tag variant: {0:?}")]
    UnknownVariant(String),

    /// The geometry collaborator has no layout for the tag.
    #[error("tag {id} is not mounted; cannot measure its width")]
    NotMounted { id: String },
}

pub type Result<T> = std::result::Result<T, TagError>;
