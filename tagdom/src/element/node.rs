use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{ClassList, Content};
use crate::types::{Size, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

pub(crate) fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A declarative description of one node for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,

    // Content
    pub content: Content,

    // Layout
    pub width: Size,
    /// Horizontal padding in cells, applied on both sides.
    pub padding: u16,

    // Visual
    pub classes: ClassList,
    pub style: Style,

    // Interaction
    pub clickable: bool,
    /// When true, events bubbling from this element stop here.
    pub stop_propagation: bool,
    /// Event name -> handler name, resolved by the owning widget.
    pub handlers: BTreeMap<String, String>,

    // Attributes
    /// `data-*` attributes, stored without the `data-` prefix.
    pub data: BTreeMap<String, String>,
    /// Attributes forwarded verbatim to the native node.
    pub attrs: BTreeMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            width: Size::Auto,
            padding: 0,
            classes: ClassList::new(),
            style: Style::default(),
            clickable: false,
            stop_propagation: false,
            handlers: BTreeMap::new(),
            data: BTreeMap::new(),
            attrs: BTreeMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn icon(kind: impl Into<String>) -> Self {
        Self {
            id: generate_id("icon"),
            content: Content::Icon(kind.into()),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Layout
    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }

    // Visual
    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.classes.add(name);
        self
    }

    pub fn classes(mut self, classes: ClassList) -> Self {
        self.classes = classes;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn stop_propagation(mut self, stop: bool) -> Self {
        self.stop_propagation = stop;
        self
    }

    /// Bind an event to a named handler.
    pub fn on(mut self, event: impl Into<String>, handler: impl Into<String>) -> Self {
        self.handlers.insert(event.into(), handler.into());
        self
    }

    pub fn handler(&self, event: &str) -> Option<&str> {
        self.handlers.get(event).map(String::as_str)
    }

    // Attributes
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn attrs(mut self, attrs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.attrs.extend(attrs);
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Child elements, empty for leaf content.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }
}
