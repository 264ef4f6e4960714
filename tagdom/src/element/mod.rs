mod class_list;
mod content;
mod node;

pub use class_list::ClassList;
pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Bubbling path for an event targeted at `target`.
///
/// Starts at the target and walks up to `root`. The walk ends at the first
/// element with `stop_propagation` set, which is included. Empty if the
/// target is not in the tree.
pub fn dispatch_path<'a>(root: &'a Element, target: &str) -> Vec<&'a Element> {
    let mut ancestry = Vec::new();
    if !collect_ancestry(root, target, &mut ancestry) {
        return Vec::new();
    }

    let mut path = Vec::with_capacity(ancestry.len());
    for element in ancestry.into_iter().rev() {
        path.push(element);
        if element.stop_propagation {
            break;
        }
    }
    path
}

fn collect_ancestry<'a>(element: &'a Element, target: &str, out: &mut Vec<&'a Element>) -> bool {
    out.push(element);
    if element.id == target {
        return true;
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            if collect_ancestry(child, target, out) {
                return true;
            }
        }
    }

    out.pop();
    false
}
