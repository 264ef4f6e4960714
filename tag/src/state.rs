//! Label state owned by a single tag instance.

/// Lifecycle phase derived from [`LabelState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Closing,
    Closed,
}

/// Checked/closing/closed flags of one tag.
///
/// `closed` is terminal and always clears `closing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelState {
    checked: bool,
    closing: bool,
    closed: bool,
}

impl LabelState {
    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            ..Default::default()
        }
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn closing(&self) -> bool {
        self.closing
    }

    pub fn closed(&self) -> bool {
        self.closed
    }

    pub fn phase(&self) -> Phase {
        if self.closed {
            Phase::Closed
        } else if self.closing {
            Phase::Closing
        } else {
            Phase::Idle
        }
    }

    pub(crate) fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub(crate) fn begin_closing(&mut self) {
        if !self.closed {
            self.closing = true;
        }
    }

    /// Move to the terminal state. Returns false if already closed.
    pub(crate) fn finish_closing(&mut self) -> bool {
        if self.closed {
            return false;
        }
        self.closed = true;
        self.closing = false;
        true
    }
}
