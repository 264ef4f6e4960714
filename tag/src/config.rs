//! Tag configuration.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::TagError;
use crate::event::CloseEvent;

/// Called with the new checked value on every toggle.
pub type ToggleHandler = Arc<dyn Fn(bool) + Send + Sync>;

/// Called before a close begins. May call `prevent_default` to cancel.
pub type CloseRequestHandler = Arc<dyn Fn(&mut CloseEvent) + Send + Sync>;

/// Called once after the exit transition completes.
pub type ClosedHandler = Arc<dyn Fn() + Send + Sync>;

/// Style variant. Selects a class only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TagVariant {
    #[default]
    Default,
    Simple,
}

impl TagVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagVariant::Default => "default",
            TagVariant::Simple => "simple",
        }
    }
}

impl fmt::Display for TagVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagVariant {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(TagVariant::Default),
            "simple" => Ok(TagVariant::Simple),
            other => Err(TagError::UnknownVariant(other.to_string())),
        }
    }
}

/// Configuration for a [`Tag`](crate::Tag).
///
/// Supplying `checked` puts the tag in controlled mode: the owner is the
/// authority over the checked value and must pass it on every update.
/// Without it the tag manages its own value, seeded from `initial_checked`.
///
/// # Example
///
/// ```ignore
/// let config = TagConfig::new("urgent")
///     .checkable()
///     .closable()
///     .color_token("#f50")
///     .on_toggle(|checked| log::info!("urgent = {checked}"));
/// ```
#[derive(Clone)]
pub struct TagConfig {
    /// Explicit element id. Generated when absent.
    pub id: Option<String>,
    /// Base class; every other class is derived from it.
    pub prefix: String,
    pub variant: TagVariant,
    pub checkable: bool,
    pub initial_checked: bool,
    pub checked: Option<bool>,
    pub on_toggle: Option<ToggleHandler>,
    pub closable: bool,
    pub on_request_close: Option<CloseRequestHandler>,
    pub on_closed: Option<ClosedHandler>,
    pub color_token: Option<String>,
    /// External classes, unioned into the composed class list.
    pub class: Option<String>,
    pub label: String,
    /// Attributes forwarded to the rendered element.
    pub attrs: BTreeMap<String, String>,
    pub(crate) legacy_color: Option<String>,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            id: None,
            prefix: "tag".into(),
            variant: TagVariant::default(),
            checkable: false,
            initial_checked: false,
            checked: None,
            on_toggle: None,
            closable: false,
            on_request_close: None,
            on_closed: None,
            color_token: None,
            class: None,
            label: String::new(),
            attrs: BTreeMap::new(),
            legacy_color: None,
        }
    }
}

impl fmt::Debug for TagConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagConfig")
            .field("id", &self.id)
            .field("prefix", &self.prefix)
            .field("variant", &self.variant)
            .field("checkable", &self.checkable)
            .field("initial_checked", &self.initial_checked)
            .field("checked", &self.checked)
            .field("on_toggle", &self.on_toggle.is_some())
            .field("closable", &self.closable)
            .field("on_request_close", &self.on_request_close.is_some())
            .field("on_closed", &self.on_closed.is_some())
            .field("color_token", &self.color_token)
            .field("class", &self.class)
            .field("label", &self.label)
            .field("attrs", &self.attrs)
            .finish_non_exhaustive()
    }
}

impl TagConfig {
    /// Create a config with the given label text.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn variant(mut self, variant: TagVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Use the simple variant.
    pub fn simple(mut self) -> Self {
        self.variant = TagVariant::Simple;
        self
    }

    pub fn checkable(mut self) -> Self {
        self.checkable = true;
        self
    }

    /// Seed value for self-managed mode.
    pub fn initial_checked(mut self, checked: bool) -> Self {
        self.initial_checked = checked;
        self
    }

    /// Switch to controlled mode with the given value.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn on_toggle(mut self, f: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.on_toggle = Some(Arc::new(f));
        self
    }

    pub fn closable(mut self) -> Self {
        self.closable = true;
        self
    }

    pub fn on_request_close(mut self, f: impl Fn(&mut CloseEvent) + Send + Sync + 'static) -> Self {
        self.on_request_close = Some(Arc::new(f));
        self
    }

    pub fn on_closed(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_closed = Some(Arc::new(f));
        self
    }

    pub fn color_token(mut self, token: impl Into<String>) -> Self {
        self.color_token = Some(token.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Legacy direct color override. Never applied.
    #[deprecated(note = "override the color with a class or `color_token` instead")]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.legacy_color = Some(color.into());
        self
    }

    pub fn is_controlled(&self) -> bool {
        self.checked.is_some()
    }
}
