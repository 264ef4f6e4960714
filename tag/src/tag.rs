//! Tag widget - a toggleable, closable label with an exit transition.

use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, warn};
use tagdom::{dispatch_path, ClassList, Element, Geometry, Size, Style};

use crate::color;
use crate::config::TagConfig;
use crate::error::{Result, TagError};
use crate::event::{CloseEvent, TagResult};
use crate::state::{LabelState, Phase};

/// Handler name bound to clicks on the tag body.
pub const TOGGLE: &str = "toggle";
/// Handler name bound to clicks on the close affordance.
pub const REQUEST_CLOSE: &str = "request_close";

/// Attributes the tag owns or must never forward to the native element.
const OMITTED_ATTRS: [&str; 6] = [
    "id",
    "class",
    "style",
    "data-show",
    "on_request_close",
    "on_closed",
];

fn next_id() -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    format!("tag-{}", COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// A toggleable, optionally closable label.
///
/// Closing runs in two phases. [`request_close`](Self::request_close) pins
/// the current width and flags the tag as closing, which flips `data-show`
/// off so the transition driver starts the exit animation. When the driver
/// reports the exit as settled, [`on_transition_settled`](Self::on_transition_settled)
/// marks the tag closed and fires `on_closed`.
///
/// # Example
///
/// ```ignore
/// let mut tag = Tag::new(TagConfig::new("draft").closable());
/// let mut geometry = LayoutGeometry::from_root(&tag.render());
/// tag.request_close(&mut geometry)?;
/// for settled in driver.tick(now) {
///     tag.on_transition_settled(&settled.key, settled.present);
/// }
/// ```
#[derive(Debug)]
pub struct Tag {
    id: String,
    config: TagConfig,
    state: LabelState,
    /// Width pinned when the close began.
    pinned_width: Option<u16>,
}

impl Tag {
    pub fn new(config: TagConfig) -> Self {
        if let Some(color) = config.legacy_color.as_ref().filter(|_| cfg!(debug_assertions)) {
            warn!("tag color {color:?} is deprecated and ignored; override the color with a class instead");
        }

        let id = config.id.clone().unwrap_or_else(next_id);
        let checked = config.checked.unwrap_or(config.initial_checked);
        debug!("{id}: created, checked = {checked}");

        Self {
            id,
            config,
            state: LabelState::new(checked),
            pinned_width: None,
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &TagConfig {
        &self.config
    }

    pub fn state(&self) -> LabelState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn is_checked(&self) -> bool {
        self.state.checked()
    }

    pub fn is_closing(&self) -> bool {
        self.state.closing()
    }

    pub fn is_closed(&self) -> bool {
        self.state.closed()
    }

    /// True when the owner supplies the checked value.
    pub fn is_controlled(&self) -> bool {
        self.config.is_controlled()
    }

    pub fn pinned_width(&self) -> Option<u16> {
        self.pinned_width
    }

    pub fn transition_name(&self) -> String {
        format!("{}-zoom", self.config.prefix)
    }

    pub fn text_id(&self) -> String {
        format!("{}-text", self.id)
    }

    pub fn close_icon_id(&self) -> String {
        format!("{}-close", self.id)
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Replace the configuration with the owner's latest one.
    ///
    /// A supplied checked value always overwrites the internal one; without
    /// it the internal value is left alone. The id is fixed at construction.
    pub fn apply_external_update(&mut self, next: TagConfig) {
        if let Some(checked) = next.checked {
            self.state.set_checked(checked);
        }
        self.config = next;
        self.config.id = Some(self.id.clone());
    }

    /// Flip the checked value in response to a click on the tag body.
    ///
    /// In controlled mode only `on_toggle` fires; the displayed value waits
    /// for the owner's next update.
    pub fn toggle(&mut self) -> TagResult {
        if self.state.phase() != Phase::Idle {
            return TagResult::Ignored;
        }

        let checked = !self.state.checked();
        if !self.is_controlled() {
            self.state.set_checked(checked);
        }
        debug!("{}: toggled to {checked}", self.id);

        if let Some(on_toggle) = &self.config.on_toggle {
            on_toggle(checked);
        }
        TagResult::Changed
    }

    /// Start closing in response to a click on the close affordance.
    ///
    /// The close-request handler runs first and may cancel. Otherwise the
    /// current width is pinned so the exit animates from a stable size, and
    /// the tag is flagged as closing. An unmounted tag fails before the
    /// handler sees anything.
    pub fn request_close(&mut self, geometry: &mut dyn Geometry) -> Result<TagResult> {
        if self.state.phase() != Phase::Idle {
            return Ok(TagResult::Ignored);
        }

        let width = geometry
            .measure_width(&self.id)
            .ok_or_else(|| TagError::NotMounted {
                id: self.id.clone(),
            })?;

        if let Some(on_request_close) = &self.config.on_request_close {
            let mut event = CloseEvent::new(&self.id);
            on_request_close(&mut event);
            if event.is_default_prevented() {
                debug!("{}: close canceled", self.id);
                return Ok(TagResult::Canceled);
            }
        }

        geometry.pin_width(&self.id, width);
        self.pinned_width = Some(width);

        self.state.begin_closing();
        debug!("{}: closing at width {width}", self.id);
        Ok(TagResult::Closing)
    }

    /// Settle notification from the transition driver.
    ///
    /// Enter settles (`still_present`) and anything after the tag closed are
    /// ignored, so `on_closed` fires at most once.
    pub fn on_transition_settled(&mut self, _key: &str, still_present: bool) -> TagResult {
        if still_present || !self.state.finish_closing() {
            return TagResult::Ignored;
        }
        debug!("{}: closed", self.id);

        if let Some(on_closed) = &self.config.on_closed {
            on_closed();
        }
        TagResult::Closed
    }

    /// Route a click on `target` through the rendered tree.
    ///
    /// Handlers run from the target outwards; the close affordance stops
    /// propagation so a close click never toggles.
    pub fn handle_click(&mut self, target: &str, geometry: &mut dyn Geometry) -> Result<TagResult> {
        let tree = self.render();
        let handlers: Vec<String> = dispatch_path(&tree, target)
            .iter()
            .filter_map(|element| element.handler("click"))
            .map(str::to_string)
            .collect();

        let mut result = TagResult::Ignored;
        for handler in handlers {
            let outcome = match handler.as_str() {
                TOGGLE => self.toggle(),
                REQUEST_CLOSE => self.request_close(geometry)?,
                _ => TagResult::Ignored,
            };
            if outcome.is_handled() {
                result = outcome;
            }
        }
        Ok(result)
    }

    // -------------------------------------------------------------------------
    // Render
    // -------------------------------------------------------------------------

    /// Composed class list for the current state.
    pub fn classes(&self) -> ClassList {
        let prefix = &self.config.prefix;
        let mut classes = ClassList::new();

        classes.add(prefix.as_str());
        classes.add(format!("{prefix}-{}", self.config.variant));
        classes.add_if(format!("{prefix}-checkable"), self.config.checkable);
        classes.add_if(
            format!("{prefix}-checkable-checked"),
            self.config.checkable && self.state.checked(),
        );
        if let Some(token) = color::normalize(self.config.color_token.as_deref()) {
            classes.add(format!("{prefix}-{token}"));
            classes.add(format!("{prefix}-has-color"));
        }
        classes.add_if(format!("{prefix}-close"), self.state.closing());

        if let Some(class) = &self.config.class {
            classes.extend_str(class);
        }
        classes
    }

    /// Inline style: background from a non-reserved color token.
    pub fn inline_style(&self) -> Style {
        match color::inline_background(self.config.color_token.as_deref()) {
            Some(background) => Style::new().background(background),
            None => Style::new(),
        }
    }

    fn pass_through_attrs(&self) -> Vec<(String, String)> {
        self.config
            .attrs
            .iter()
            .filter(|(key, _)| !OMITTED_ATTRS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// The tag element, or `None` once closed.
    pub fn element(&self) -> Option<Element> {
        if self.state.closed() {
            return None;
        }

        let prefix = &self.config.prefix;
        let mut elem = Element::box_()
            .id(&self.id)
            .classes(self.classes())
            .style(self.inline_style())
            .padding(1)
            .clickable(true)
            .on("click", TOGGLE)
            .data("show", (!self.state.closing()).to_string())
            .attrs(self.pass_through_attrs())
            .child(
                Element::text(&self.config.label)
                    .id(self.text_id())
                    .class(format!("{prefix}-text")),
            );

        if self.config.closable {
            elem = elem.child(
                Element::icon("cross")
                    .id(self.close_icon_id())
                    .class(format!("{prefix}-close-icon"))
                    .clickable(true)
                    .stop_propagation(true)
                    .on("click", REQUEST_CLOSE),
            );
        }

        if let Some(width) = self.pinned_width.filter(|_| self.state.closing()) {
            elem = elem.width(Size::Fixed(width));
        }

        Some(elem)
    }

    /// The transition wrapper. It stays mounted after the tag closes; only
    /// its child goes away.
    pub fn render(&self) -> Element {
        Element::box_()
            .id(format!("{}-motion", self.id))
            .data("transition", self.transition_name())
            .data("appear", "true")
            .children(self.element())
    }
}
