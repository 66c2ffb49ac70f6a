mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    root.children().iter().find_map(|child| find_element(child, id))
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    match &mut root.content {
        Content::Children(children) => children
            .iter_mut()
            .find_map(|child| find_element_mut(child, id)),
        _ => None,
    }
}
