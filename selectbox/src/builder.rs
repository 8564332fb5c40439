//! Builds the mirror element tree from a source control's options.

use formdom::{Element, Position};

use crate::settings::Settings;
use crate::source::{SourceControl, SourceOption};

/// Data key on the mirror root naming its source control.
pub const SOURCE_DATA_KEY: &str = "elem";
/// Data key on each mirror option holding the option's value.
pub const VALUE_DATA_KEY: &str = "value";
/// Stacking level of the option list, above sibling content.
pub const OPTION_CONTAINER_Z_INDEX: i16 = 9999;

/// A mirror option node and the source ordinal it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorOption {
    pub node_id: String,
    pub ordinal: usize,
}

/// Element IDs of a built mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mirror {
    pub root_id: String,
    /// Current-selection display region.
    pub selection_id: String,
    /// Inner node of the display that holds the label text.
    pub label_id: String,
    /// Option list.
    pub container_id: String,
    /// One entry per source option, in source order.
    pub options: Vec<MirrorOption>,
}

/// Build the mirror of `source`. The tree is returned detached: inserting it
/// into the document and hiding the source is up to the caller.
pub fn build(source: &SourceControl, options: &[SourceOption], settings: &Settings) -> (Element, Mirror) {
    let base = format!("{}-selectbox", source.id());
    let mirror = Mirror {
        root_id: base.clone(),
        selection_id: format!("{base}-selection"),
        label_id: format!("{base}-label"),
        container_id: format!("{base}-options"),
        options: (0..options.len())
            .map(|ordinal| MirrorOption {
                node_id: format!("{base}-option-{ordinal}"),
                ordinal,
            })
            .collect(),
    };

    let selection = Element::box_()
        .id(mirror.selection_id.clone())
        .class(settings.selection_class.clone())
        .clickable(true)
        .child(Element::box_().id(mirror.label_id.clone()));

    let items = options.iter().zip(&mirror.options).map(|(option, node)| {
        Element::item()
            .id(node.node_id.clone())
            .class(settings.option_class.clone())
            .position(Position::Relative)
            .clickable(true)
            .data(VALUE_DATA_KEY, option.value.clone())
            .child(Element::text(option.label.clone()))
    });

    let container = Element::list()
        .id(mirror.container_id.clone())
        .class(settings.option_container_class.clone())
        .position(Position::Absolute)
        .z_index(OPTION_CONTAINER_Z_INDEX)
        .children(items);

    let root = Element::box_()
        .id(mirror.root_id.clone())
        .class(settings.select_class.clone())
        .data(SOURCE_DATA_KEY, source.id())
        .child(selection)
        .child(container);

    log::debug!(
        "[selectbox] built mirror {} with {} options",
        mirror.root_id,
        mirror.options.len()
    );

    (root, mirror)
}
