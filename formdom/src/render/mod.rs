//! Text rendering of the visible document.
//!
//! Flow content is painted first, then absolutely positioned subtrees in
//! ascending `z_index`, so overlays cover what sits below them. Relative
//! offsets (and any animation running on them) shift an element away from
//! its resting slot; rows shifted above the document origin are clipped.

use std::time::Instant;

use crate::animation::{AnimationState, TransitionProperty};
use crate::document::Document;
use crate::element::Element;
use crate::layout::LayoutResult;
use crate::text::{char_width, truncate_to_width};
use crate::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    char: char,
    wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            wide_continuation: false,
        }
    }
}

struct Canvas {
    width: usize,
    rows: Vec<Vec<Cell>>,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            rows: vec![vec![Cell::default(); width]; height],
        }
    }

    fn put_str(&mut self, x: i32, y: i32, text: &str) {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return;
        };
        let Some(row) = self.rows.get_mut(y) else {
            return;
        };

        // Clear the whole run first so an overlay never leaves stale tails.
        for cell in row.iter_mut().skip(x) {
            *cell = Cell::default();
        }

        let mut col = x;
        for ch in truncate_to_width(text, self.width.saturating_sub(x)).chars() {
            let w = char_width(ch);
            if col + w > self.width {
                break;
            }
            row[col] = Cell {
                char: ch,
                wide_continuation: false,
            };
            for cont in row.iter_mut().skip(col + 1).take(w.saturating_sub(1)) {
                cont.wide_continuation = true;
            }
            col += w.max(1);
        }
    }

    fn into_lines(self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .rows
            .into_iter()
            .map(|row| {
                let line: String = row
                    .into_iter()
                    .filter(|c| !c.wide_continuation)
                    .map(|c| c.char)
                    .collect();
                line.trim_end().to_string()
            })
            .collect();
        while lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }
        lines
    }
}

struct Painter<'a> {
    layout: &'a LayoutResult,
    animations: &'a AnimationState,
    now: Instant,
    overlays: Vec<(i16, (i32, i32), &'a Element)>,
}

impl<'a> Painter<'a> {
    /// Current relative shift of an element, honouring running animations.
    fn shift(&self, element: &Element) -> (i32, i32) {
        if element.position == Position::Static {
            return (0, 0);
        }
        let top = self
            .animations
            .get_interpolated_at(&element.id, TransitionProperty::Top, self.now)
            .or(element.top)
            .unwrap_or(0);
        let left = self
            .animations
            .get_interpolated_at(&element.id, TransitionProperty::Left, self.now)
            .or(element.left)
            .unwrap_or(0);
        (i32::from(left), i32::from(top))
    }

    fn paint(&mut self, canvas: &mut Canvas, element: &'a Element, offset: (i32, i32)) {
        let Some(rect) = self.layout.get(&element.id) else {
            return;
        };

        let (dx, dy) = self.shift(element);
        let offset = (offset.0 + dx, offset.1 + dy);

        if let crate::element::Content::Text(text) = &element.content {
            for (i, line) in text.split('\n').enumerate() {
                canvas.put_str(
                    i32::from(rect.x) + offset.0,
                    i32::from(rect.y) + offset.1 + i as i32,
                    line,
                );
            }
        }

        for child in element.content.children() {
            if child.position == Position::Absolute {
                self.overlays.push((child.z_index, offset, child));
            } else {
                self.paint(canvas, child, offset);
            }
        }
    }
}

/// Render the visible document as text rows, `width` cells wide.
/// Trailing blanks are trimmed from every row and trailing empty rows dropped.
pub fn render_lines(doc: &Document, width: u16) -> Vec<String> {
    render_lines_at(doc, width, Instant::now())
}

/// Like [`render_lines`], sampling running animations at `now`.
pub fn render_lines_at(doc: &Document, width: u16, now: Instant) -> Vec<String> {
    let layout = doc.layout(width);
    let height = layout.values().map(|r| r.bottom()).max().unwrap_or(0);
    let mut canvas = Canvas::new(usize::from(width), usize::from(height));

    let mut painter = Painter {
        layout: &layout,
        animations: doc.animations(),
        now,
        overlays: Vec::new(),
    };
    painter.paint(&mut canvas, doc.root(), (0, 0));

    // Overlays may contain further overlays; paint until the queue drains.
    while !painter.overlays.is_empty() {
        let mut batch = std::mem::take(&mut painter.overlays);
        batch.sort_by_key(|(z, _, _)| *z);
        for (_, offset, element) in batch {
            painter.paint(&mut canvas, element, offset);
        }
    }

    canvas.into_lines()
}
