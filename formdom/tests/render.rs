use std::time::{Duration, Instant};

use formdom::render::{render_lines, render_lines_at};
use formdom::{Document, Element, Position, TransitionConfig, TransitionProperty};

fn lines(doc: &Document, width: u16) -> Vec<String> {
    render_lines(doc, width)
}

// ============================================================================
// Flow rendering
// ============================================================================

#[test]
fn test_render_text_rows() {
    let doc = Document::new(
        Element::box_()
            .child(Element::text("Hello"))
            .child(Element::text("World")),
    );
    assert_eq!(lines(&doc, 10), vec!["Hello", "World"]);
}

#[test]
fn test_render_skips_hidden() {
    let doc = Document::new(
        Element::box_()
            .child(Element::text("shown"))
            .child(Element::text("hidden").hidden(true))
            .child(Element::text("also shown")),
    );
    assert_eq!(lines(&doc, 20), vec!["shown", "also shown"]);
}

#[test]
fn test_render_truncates_to_width() {
    let doc = Document::new(Element::box_().child(Element::text("abcdefghij")));
    assert_eq!(lines(&doc, 5), vec!["abcd…"]);
}

#[test]
fn test_render_wide_characters() {
    let doc = Document::new(Element::box_().child(Element::text("日本語")));
    assert_eq!(lines(&doc, 10), vec!["日本語"]);
}

#[test]
fn test_render_empty_document() {
    let doc = Document::new(Element::box_());
    assert!(lines(&doc, 10).is_empty());
}

// ============================================================================
// Overlays and offsets
// ============================================================================

#[test]
fn test_absolute_overlay_covers_following_rows() {
    let doc = Document::new(
        Element::box_()
            .child(Element::text("head"))
            .child(
                Element::list()
                    .position(Position::Absolute)
                    .z_index(10)
                    .child(Element::text("menu a"))
                    .child(Element::text("menu b")),
            )
            .child(Element::text("below")),
    );
    assert_eq!(lines(&doc, 10), vec!["head", "menu a", "menu b"]);
}

#[test]
fn test_relative_top_shifts_paint_position() {
    let doc = Document::new(
        Element::box_()
            .child(Element::text("a"))
            .child(Element::text("b"))
            .child(
                Element::box_()
                    .position(Position::Relative)
                    .top(-1)
                    .child(Element::text("c")),
            ),
    );
    // "c" is painted over "b"'s row; its own slot is left blank
    assert_eq!(lines(&doc, 10), vec!["a", "c"]);
}

#[test]
fn test_animation_sampled_at_time() {
    let mut doc = Document::new(
        Element::box_()
            .child(Element::text("a"))
            .child(
                Element::box_()
                    .id("mover")
                    .position(Position::Relative)
                    .top(0)
                    .child(Element::text("b")),
            ),
    );

    let start = Instant::now();
    doc.animations_mut().start_at(
        "mover",
        TransitionProperty::Top,
        -1,
        0,
        TransitionConfig::linear(Duration::from_millis(100)),
        start,
    );

    assert_eq!(render_lines_at(&doc, 10, start), vec!["b"]);
    assert_eq!(
        render_lines_at(&doc, 10, start + Duration::from_millis(200)),
        vec!["a", "b"]
    );
}
