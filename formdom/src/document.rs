//! A mutable element tree plus the host facilities widgets rely on.

use crate::animation::{collect_element_ids, AnimationState};
use crate::element::{find_element, find_element_mut, find_path, walk, walk_mut, Content, Element};
use crate::layout::{layout, LayoutResult};

/// The host document: one element tree and its animation queue.
///
/// Elements are addressed by ID. Mutating operations return `false` (or
/// `None`) when the target is not in the tree rather than panicking.
#[derive(Debug)]
pub struct Document {
    root: Element,
    animations: AnimationState,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            animations: AnimationState::new(),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// IDs of the ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: &str) -> Vec<String> {
        let Some(mut path) = find_path(&self.root, id) else {
            return Vec::new();
        };
        path.pop();
        path.reverse();
        path
    }

    pub fn parent_id(&self, id: &str) -> Option<String> {
        self.ancestors(id).into_iter().next()
    }

    /// Position of `id` among its parent's children.
    pub fn index_in_parent(&self, id: &str) -> Option<usize> {
        let parent = self.get(&self.parent_id(id)?)?;
        parent.content.children().iter().position(|c| c.id == id)
    }

    /// Every element with the given tag, in document order.
    pub fn find_by_tag(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        walk(&self.root, &mut |el| {
            if el.tag == tag {
                found.push(el);
            }
        });
        found
    }

    /// Every element carrying the given class, in document order.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        walk(&self.root, &mut |el| {
            if el.has_class(class) {
                found.push(el);
            }
        });
        found
    }

    /// Insert `element` as the next sibling of `reference_id`.
    pub fn insert_after(&mut self, reference_id: &str, element: Element) -> bool {
        let Some(parent_id) = self.parent_id(reference_id) else {
            log::warn!("[document] insert_after: {reference_id} has no parent");
            return false;
        };
        let Some(parent) = self.get_mut(&parent_id) else {
            return false;
        };
        let Content::Children(children) = &mut parent.content else {
            return false;
        };
        let Some(index) = children.iter().position(|c| c.id == reference_id) else {
            return false;
        };
        children.insert(index + 1, element);
        true
    }

    /// Append `element` as the last child of `parent_id`.
    pub fn append(&mut self, parent_id: &str, element: Element) -> bool {
        match self.get_mut(parent_id) {
            Some(parent) => {
                parent.content = match std::mem::take(&mut parent.content) {
                    Content::Children(mut children) => {
                        children.push(element);
                        Content::Children(children)
                    }
                    _ => Content::Children(vec![element]),
                };
                true
            }
            None => false,
        }
    }

    /// Detach an element (and its subtree) from the document.
    /// The root cannot be removed.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let parent_id = self.parent_id(id)?;
        let parent = self.get_mut(&parent_id)?;
        let Content::Children(children) = &mut parent.content else {
            return None;
        };
        let index = children.iter().position(|c| c.id == id)?;
        let removed = children.remove(index);

        let remaining = collect_element_ids(&self.root);
        self.animations.cleanup(&remaining);
        Some(removed)
    }

    pub fn show(&mut self, id: &str) -> bool {
        self.set_hidden(id, false)
    }

    pub fn hide(&mut self, id: &str) -> bool {
        self.set_hidden(id, true)
    }

    fn set_hidden(&mut self, id: &str, hidden: bool) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                el.hidden = hidden;
                true
            }
            None => false,
        }
    }

    /// True when the element and all of its ancestors are displayed.
    pub fn is_visible(&self, id: &str) -> bool {
        let Some(path) = find_path(&self.root, id) else {
            return false;
        };
        path.iter()
            .filter_map(|id| self.get(id))
            .all(|el| !el.hidden)
    }

    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                el.set_text(text);
                true
            }
            None => false,
        }
    }

    pub fn text_content(&self, id: &str) -> Option<String> {
        self.get(id).map(Element::text_content)
    }

    pub fn animations(&self) -> &AnimationState {
        &self.animations
    }

    pub fn animations_mut(&mut self) -> &mut AnimationState {
        &mut self.animations
    }

    pub fn layout(&self, width: u16) -> LayoutResult {
        layout(&self.root, width)
    }

    /// The (name, value) pairs the form would submit, in document order.
    ///
    /// Hidden controls still submit; disabled ones and unnamed ones don't. A
    /// `select` submits its first option marked selected, or its first option
    /// when none is.
    pub fn form_data(&self, form_id: &str) -> Vec<(String, String)> {
        let Some(form) = self.get(form_id) else {
            return Vec::new();
        };

        let mut pairs = Vec::new();
        walk(form, &mut |el| {
            if el.has_attr("disabled") {
                return;
            }
            let Some(name) = el.get_attr("name") else {
                return;
            };
            match el.tag.as_str() {
                "select" => {
                    let options = select_options(el);
                    let chosen = options
                        .iter()
                        .find(|o| o.is_selected())
                        .or_else(|| options.first());
                    if let Some(option) = chosen {
                        pairs.push((name.clone(), option.option_value()));
                    }
                }
                "input" => {
                    let value = el.get_attr("value").cloned().unwrap_or_default();
                    pairs.push((name.clone(), value));
                }
                _ => {}
            }
        });
        pairs
    }
}

/// The `option` descendants of a `select`, in document order
/// (options inside `optgroup`s included).
pub fn select_options(select: &Element) -> Vec<&Element> {
    let mut options = Vec::new();
    walk(select, &mut |el| {
        if el.tag == "option" {
            options.push(el);
        }
    });
    options
}

/// Mark the `option` at `ordinal` (same order as [`select_options`]) selected
/// and clear every other option of `select`.
///
/// Works on the select's own subtree, so option IDs need not be unique.
/// Returns false and leaves the options untouched if `ordinal` is out of
/// range.
pub fn select_option_at(select: &mut Element, ordinal: usize) -> bool {
    if ordinal >= select_options(select).len() {
        return false;
    }

    let mut position = 0;
    walk_mut(select, &mut |el: &mut Element| {
        if el.tag != "option" {
            return;
        }
        if position == ordinal {
            el.attrs.insert("selected".to_string(), "selected".to_string());
        } else {
            el.remove_attr("selected");
        }
        position += 1;
    });
    true
}
