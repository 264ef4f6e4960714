use std::collections::HashMap;

use log::trace;

use super::{measure, LayoutResult};
use crate::element::Element;

/// Synchronous access to committed element geometry.
pub trait Geometry {
    /// Current rendered width of `id`, or `None` if it is not laid out.
    fn measure_width(&self, id: &str) -> Option<u16>;

    /// Pin `id` to an explicit width. Takes effect for every later read.
    fn pin_width(&mut self, id: &str, width: u16);
}

/// Geometry over a committed `LayoutResult`, with pinned widths overlaid.
#[derive(Debug, Clone, Default)]
pub struct LayoutGeometry {
    layout: LayoutResult,
    pinned: HashMap<String, u16>,
    writes: usize,
}

impl LayoutGeometry {
    pub fn new(layout: LayoutResult) -> Self {
        Self {
            layout,
            ..Default::default()
        }
    }

    /// Measure a tree and wrap the result.
    pub fn from_root(root: &Element) -> Self {
        Self::new(measure(root))
    }

    /// Replace the committed layout after a new render. Pinned widths are
    /// kept for ids that are still laid out.
    pub fn commit(&mut self, layout: LayoutResult) {
        self.pinned.retain(|id, _| layout.contains_key(id));
        self.layout = layout;
    }

    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    pub fn pinned_width(&self, id: &str) -> Option<u16> {
        self.pinned.get(id).copied()
    }

    /// Number of `pin_width` calls made so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl Geometry for LayoutGeometry {
    fn measure_width(&self, id: &str) -> Option<u16> {
        if let Some(width) = self.pinned.get(id) {
            return Some(*width);
        }
        self.layout.get(id).map(|rect| rect.width)
    }

    fn pin_width(&mut self, id: &str, width: u16) {
        trace!("pin width {id} = {width}");
        self.pinned.insert(id.to_string(), width);
        self.writes += 1;
    }
}
