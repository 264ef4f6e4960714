//! Close events and operation results.

/// Cancelable event passed to the close-request handler.
///
/// Calling [`prevent_default`](Self::prevent_default) keeps the tag open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseEvent {
    target: String,
    default_prevented: bool,
}

impl CloseEvent {
    pub(crate) fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            default_prevented: false,
        }
    }

    /// Id of the tag being closed.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// What a tag operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagResult {
    /// Nothing happened (wrong phase, enter settle, repeated settle).
    #[default]
    Ignored,
    /// A toggle was handled and `on_toggle` fired.
    Changed,
    /// The close-request handler prevented the close.
    Canceled,
    /// The exit transition was requested.
    Closing,
    /// The exit transition finished and `on_closed` fired.
    Closed,
}

impl TagResult {
    /// Check if the operation had any effect (not Ignored).
    pub fn is_handled(&self) -> bool {
        !matches!(self, TagResult::Ignored)
    }
}
