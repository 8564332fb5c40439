use formdom::render::render_lines;
use formdom::{Document, Element, Position};
use selectbox::builder::{OPTION_CONTAINER_Z_INDEX, SOURCE_DATA_KEY, VALUE_DATA_KEY};
use selectbox::{Error, Selectbox, Settings, Visibility};

fn still() -> Settings {
    Settings::default().with_animation(false)
}

fn form_with(select: Element) -> Document {
    Document::new(
        Element::form()
            .id("form")
            .child(Element::text("Pick one").id("caption"))
            .child(select)
            .child(Element::text("Footer").id("footer")),
    )
}

fn xyz() -> Element {
    Element::select("letter")
        .id("letter")
        .child(Element::option("Ex").id("x").value("x"))
        .child(Element::option("Why").id("y").value("y"))
        .child(Element::option("Zed").id("z").value("z"))
}

// ============================================================================
// Document structure
// ============================================================================

#[test]
fn test_mirror_inserted_right_after_source() {
    let mut doc = form_with(xyz());
    let sb = Selectbox::attach(&mut doc, "letter", &still()).unwrap();

    assert_eq!(doc.index_in_parent("letter"), Some(1));
    assert_eq!(doc.index_in_parent(&sb.mirror().root_id), Some(2));
    assert_eq!(doc.index_in_parent("footer"), Some(3));
}

#[test]
fn test_source_hidden_but_present_and_enabled() {
    let mut doc = form_with(xyz());
    Selectbox::attach(&mut doc, "letter", &still()).unwrap();

    let source = doc.get("letter").expect("source stays in the document");
    assert!(source.hidden);
    assert!(!source.has_attr("disabled"));
    assert!(!doc.is_visible("letter"));
}

#[test]
fn test_mirror_classes_and_data() {
    let mut doc = form_with(xyz());
    let sb = Selectbox::attach(&mut doc, "letter", &still()).unwrap();
    let mirror = sb.mirror();

    let root = doc.get(&mirror.root_id).unwrap();
    assert!(root.has_class("jSelectbox"));
    assert_eq!(root.get_data(SOURCE_DATA_KEY).map(String::as_str), Some("letter"));

    assert!(doc.get(&mirror.selection_id).unwrap().has_class("selected"));
    assert_eq!(doc.parent_id(&mirror.label_id).as_deref(), Some(mirror.selection_id.as_str()));

    let container = doc.get(&mirror.container_id).unwrap();
    assert!(container.has_class("optionContainer"));
    assert_eq!(container.position, Position::Absolute);
    assert_eq!(container.z_index, OPTION_CONTAINER_Z_INDEX);
}

#[test]
fn test_one_mirror_option_per_source_option_in_order() {
    let mut doc = form_with(xyz());
    let sb = Selectbox::attach(&mut doc, "letter", &still()).unwrap();
    let mirror = sb.mirror();

    assert_eq!(mirror.options.len(), 3);
    let expected = [("Ex", "x"), ("Why", "y"), ("Zed", "z")];
    for (ordinal, (option, (label, value))) in mirror.options.iter().zip(expected).enumerate() {
        assert_eq!(option.ordinal, ordinal);
        assert_eq!(doc.index_in_parent(&option.node_id), Some(ordinal));

        let node = doc.get(&option.node_id).unwrap();
        assert!(node.has_class("jOption"));
        assert_eq!(node.tag, "li");
        assert_eq!(node.text_content(), label);
        assert_eq!(node.get_data(VALUE_DATA_KEY).map(String::as_str), Some(value));
    }
}

#[test]
fn test_custom_classes_applied() {
    let settings = Settings::default()
        .with_select_class("fancy")
        .with_selection_class("current")
        .with_option_class("choice")
        .with_option_container_class("choices");
    let mut doc = form_with(xyz());
    Selectbox::attach(&mut doc, "letter", &settings).unwrap();

    assert_eq!(doc.find_by_class("fancy").len(), 1);
    assert_eq!(doc.find_by_class("current").len(), 1);
    assert_eq!(doc.find_by_class("choice").len(), 3);
    assert_eq!(doc.find_by_class("choices").len(), 1);
    assert!(doc.find_by_class("jSelectbox").is_empty());
}

#[test]
fn test_option_value_falls_back_to_label() {
    let mut doc = form_with(
        Element::select("c")
            .id("c")
            .child(Element::option("Red"))
            .child(Element::option("Green")),
    );
    let sb = Selectbox::attach(&mut doc, "c", &still()).unwrap();
    let node = doc.get(&sb.mirror().options[1].node_id).unwrap();
    assert_eq!(node.get_data(VALUE_DATA_KEY).map(String::as_str), Some("Green"));
}

#[test]
fn test_optgroup_options_flattened() {
    let mut doc = form_with(
        Element::select("fruit")
            .id("fruit")
            .child(Element::optgroup("Citrus").child(Element::option("Lime")).child(Element::option("Lemon")))
            .child(Element::optgroup("Stone").child(Element::option("Plum"))),
    );
    let sb = Selectbox::attach(&mut doc, "fruit", &still()).unwrap();
    assert_eq!(sb.mirror().options.len(), 3);
    assert_eq!(doc.text_content(&sb.mirror().container_id).as_deref(), Some("LimeLemonPlum"));
}

#[test]
fn test_starts_closed() {
    let mut doc = form_with(xyz());
    let sb = Selectbox::attach(&mut doc, "letter", &still()).unwrap();
    assert_eq!(sb.visibility(), Visibility::Closed);
    assert!(!doc.is_visible(&sb.mirror().container_id));
}

#[test]
fn test_rendered_closed_state() {
    let mut doc = form_with(xyz());
    Selectbox::attach(&mut doc, "letter", &still()).unwrap();
    assert_eq!(render_lines(&doc, 20), vec!["Pick one", "Ex", "Footer"]);
}

// ============================================================================
// Initial selection
// ============================================================================

#[test]
fn test_default_initial_selection_is_first() {
    let mut doc = form_with(xyz());
    let sb = Selectbox::attach(&mut doc, "letter", &still()).unwrap();

    assert_eq!(sb.display_text(&doc), "Ex");
    assert_eq!(sb.selected_index(), Some(0));
    assert!(doc.get("x").unwrap().is_selected());
    assert!(!doc.get("y").unwrap().is_selected());
    assert!(!doc.get("z").unwrap().is_selected());
}

#[test]
fn test_explicit_initial_selection_kept() {
    let mut doc = form_with(
        Element::select("letter")
            .id("letter")
            .child(Element::option("Ex").id("x"))
            .child(Element::option("Why").id("y").selected())
            .child(Element::option("Zed").id("z")),
    );
    let sb = Selectbox::attach(&mut doc, "letter", &still()).unwrap();

    assert_eq!(sb.display_text(&doc), "Why");
    assert_eq!(sb.selected_index(), Some(1));
    assert!(!doc.get("x").unwrap().is_selected());
    assert!(doc.get("y").unwrap().is_selected());
}

#[test]
fn test_several_marked_first_wins() {
    let mut doc = form_with(
        Element::select("letter")
            .id("letter")
            .child(Element::option("Ex").id("x"))
            .child(Element::option("Why").id("y").selected())
            .child(Element::option("Zed").id("z").selected()),
    );
    let sb = Selectbox::attach(&mut doc, "letter", &still()).unwrap();

    assert_eq!(sb.display_text(&doc), "Why");
    assert!(doc.get("y").unwrap().is_selected());
    assert!(!doc.get("z").unwrap().is_selected(), "left with a single selection");
}

#[test]
fn test_form_data_after_attach() {
    let mut doc = form_with(xyz());
    Selectbox::attach(&mut doc, "letter", &still()).unwrap();
    assert_eq!(doc.form_data("form"), vec![("letter".to_string(), "x".to_string())]);
}

// ============================================================================
// Empty source
// ============================================================================

#[test]
fn test_empty_source_gives_empty_mirror() {
    let mut doc = form_with(Element::select("none").id("none"));
    let sb = Selectbox::attach(&mut doc, "none", &still()).unwrap();

    assert!(sb.mirror().options.is_empty());
    assert!(doc.get(&sb.mirror().container_id).unwrap().content.children().is_empty());
    assert_eq!(sb.display_text(&doc), "");
    assert_eq!(sb.selected_index(), None);
    assert_eq!(sb.visibility(), Visibility::Closed);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_attach_missing_element() {
    let mut doc = form_with(xyz());
    let err = Selectbox::attach(&mut doc, "nope", &still()).unwrap_err();
    assert!(matches!(err, Error::SourceNotFound(id) if id == "nope"));
}

#[test]
fn test_attach_non_select() {
    let mut doc = form_with(xyz());
    let err = Selectbox::attach(&mut doc, "caption", &still()).unwrap_err();
    assert!(matches!(err, Error::NotASelect { ref tag, .. } if tag == "span"));
    assert_eq!(err.to_string(), "element \"caption\" is a <span>, not a <select>");
}

#[test]
fn test_attach_root_select() {
    let mut doc = Document::new(xyz());
    let err = Selectbox::attach(&mut doc, "letter", &still()).unwrap_err();
    assert!(matches!(err, Error::NoParent(_)));
    assert!(!doc.get("letter").unwrap().hidden, "source untouched");
}

#[test]
fn test_attach_twice_rejected() {
    let mut doc = form_with(xyz());
    Selectbox::attach(&mut doc, "letter", &still()).unwrap();
    let err = Selectbox::attach(&mut doc, "letter", &still()).unwrap_err();
    assert!(matches!(err, Error::AlreadyAttached(_)));
    assert_eq!(doc.find_by_class("jSelectbox").len(), 1);
}

// ============================================================================
// Detach
// ============================================================================

#[test]
fn test_detach_restores_source() {
    let mut doc = form_with(xyz());
    let mut sb = Selectbox::attach(&mut doc, "letter", &still()).unwrap();
    sb.select_index(&mut doc, 2);
    let root_id = sb.mirror().root_id.clone();

    let removed = sb.detach(&mut doc).expect("mirror removed");

    assert_eq!(removed.id, root_id);
    assert!(!doc.contains(&root_id));
    assert!(doc.is_visible("letter"));
    assert!(doc.get("z").unwrap().is_selected(), "selection survives");
    assert_eq!(doc.form_data("form"), vec![("letter".to_string(), "z".to_string())]);
}

#[test]
fn test_reattach_after_detach() {
    let mut doc = form_with(xyz());
    let sb = Selectbox::attach(&mut doc, "letter", &still()).unwrap();
    sb.detach(&mut doc);

    let sb = Selectbox::attach(&mut doc, "letter", &still()).unwrap();
    assert_eq!(doc.find_by_class("jSelectbox").len(), 1);
    assert_eq!(sb.display_text(&doc), "Ex");
}

// ============================================================================
// Many sources
// ============================================================================

#[test]
fn test_attach_all_mirrors_every_select() {
    let mut doc = Document::new(
        Element::form()
            .id("form")
            .child(xyz())
            .child(Element::select("b").id("b").child(Element::option("Only")))
            .child(Element::select("c").id("c")),
    );

    let boxes = selectbox::attach_all(&mut doc, &still()).unwrap();

    assert_eq!(boxes.len(), 3);
    let ids: Vec<&str> = boxes.iter().map(|b| b.source_id()).collect();
    assert_eq!(ids, vec!["letter", "b", "c"]);
    assert_eq!(doc.find_by_class("jSelectbox").len(), 3);
    assert_eq!(boxes.get("b").map(|b| b.display_text(&doc)).as_deref(), Some("Only"));
}

#[test]
fn test_attach_all_skips_mirrored() {
    let mut doc = Document::new(
        Element::form()
            .id("form")
            .child(xyz())
            .child(Element::select("b").id("b").child(Element::option("Only"))),
    );
    selectbox::attach(&mut doc, "letter", &still()).unwrap();

    let boxes = selectbox::attach_all(&mut doc, &still()).unwrap();

    assert_eq!(boxes.len(), 1);
    assert!(boxes.get("b").is_some());
    assert_eq!(doc.find_by_class("jSelectbox").len(), 2);
}
