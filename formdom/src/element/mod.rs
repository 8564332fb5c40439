mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.content.children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// IDs from `root` down to the element with `id` (inclusive on both ends).
/// Returns None if the element is not in the tree.
pub fn find_path(root: &Element, id: &str) -> Option<Vec<String>> {
    if root.id == id {
        return Some(vec![root.id.clone()]);
    }

    for child in root.content.children() {
        if let Some(mut path) = find_path(child, id) {
            path.insert(0, root.id.clone());
            return Some(path);
        }
    }

    None
}

/// Visit every element in document (pre-)order, mutably.
pub fn walk_mut(root: &mut Element, visit: &mut impl FnMut(&mut Element)) {
    visit(root);
    if let Content::Children(children) = &mut root.content {
        for child in children {
            walk_mut(child, visit);
        }
    }
}

/// Visit every element in document (pre-)order.
pub fn walk<'a>(root: &'a Element, visit: &mut impl FnMut(&'a Element)) {
    visit(root);
    for child in root.content.children() {
        walk(child, visit);
    }
}
