use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::{display_width, line_count};
use crate::types::{Position, Size};

/// Resting boxes of every rendered element, by element ID.
/// Hidden elements (and their subtrees) have no entry.
pub type LayoutResult = HashMap<String, Rect>;

/// Lay the tree out as a single column of block elements, `width` cells wide.
///
/// Relative `top`/`left` offsets are not applied here: they move an element
/// away from its resting slot only when painted.
pub fn layout(root: &Element, width: u16) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(root, 0, 0, width, &mut result);
    result
}

/// Vertical distance between the resting slots of `id` and `ancestor_id`.
/// None if either is not laid out or `id` sits above its ancestor.
pub fn offset_top(layout: &LayoutResult, id: &str, ancestor_id: &str) -> Option<u16> {
    let rect = layout.get(id)?;
    let ancestor = layout.get(ancestor_id)?;
    rect.y.checked_sub(ancestor.y)
}

/// Returns the height consumed in the parent's flow.
fn layout_element(element: &Element, x: u16, y: u16, width: u16, result: &mut LayoutResult) -> u16 {
    if element.hidden {
        return 0;
    }

    let content_height = match &element.content {
        Content::None => 0,
        Content::Text(text) => line_count(text) as u16,
        Content::Children(children) => layout_children(children, x, y, width, result),
    };

    let height = match element.height {
        Size::Fixed(h) => h,
        Size::Auto => content_height,
    };

    let width = match &element.content {
        Content::Text(text) => width.min(display_width(text) as u16),
        _ => width,
    };

    result.insert(element.id.clone(), Rect::new(x, y, width, height));

    if element.position == Position::Absolute {
        0
    } else {
        height
    }
}

fn layout_children(
    children: &[Element],
    x: u16,
    y: u16,
    width: u16,
    result: &mut LayoutResult,
) -> u16 {
    let mut cursor = y;
    for child in children {
        // Absolute children sit at the current flow position without
        // pushing later siblings down.
        let consumed = layout_element(child, x, cursor, width, result);
        cursor = cursor.saturating_add(consumed);
    }
    cursor - y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_takes_no_rows() {
        let root = Element::box_().id("root").child(Element::text("").id("t"));
        let result = layout(&root, 10);
        assert_eq!(result["t"].height, 0);
        assert_eq!(result["root"].height, 0);
    }
}
