use super::{LayoutResult, Rect};
use crate::element::{Content, Element};
use crate::text::{block_width, char_width, icon_glyph};
use crate::types::Size;

/// Lay out `root` at the origin, flowing children inline.
pub fn measure(root: &Element) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(root, 0, 0, &mut result);
    result
}

/// Intrinsic (width, height) of an element in cells.
///
/// A fixed width overrides the content width; padding is counted on both
/// sides.
pub fn intrinsic_size(element: &Element) -> (u16, u16) {
    let (content_width, height) = match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => (
            clamp(block_width(text)),
            clamp(text.split('\n').count()),
        ),
        Content::Icon(kind) => (clamp(char_width(icon_glyph(kind))), 1),
        Content::Children(children) => children.iter().map(intrinsic_size).fold(
            (0u16, 0u16),
            |(w, h), (cw, ch)| (w.saturating_add(cw), h.max(ch)),
        ),
    };

    let width = match element.width {
        Size::Fixed(width) => width,
        Size::Auto => content_width.saturating_add(element.padding.saturating_mul(2)),
    };
    (width, height)
}

fn layout_element(element: &Element, x: u16, y: u16, result: &mut LayoutResult) {
    let (width, height) = intrinsic_size(element);
    result.insert(element.id.clone(), Rect::new(x, y, width, height));

    let mut cursor = x.saturating_add(element.padding);
    for child in element.child_elements() {
        layout_element(child, cursor, y, result);
        cursor = cursor.saturating_add(intrinsic_size(child).0);
    }
}

fn clamp(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
