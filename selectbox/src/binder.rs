//! Wires mirror nodes to transitions and performs the initial selection.

use std::collections::HashMap;

use formdom::Document;

use crate::builder::Mirror;
use crate::source::SourceOption;
use crate::state::StateController;

/// What a click on a bound node does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Select the source option at this ordinal.
    Pick(usize),
    /// Open the option list if closed, close it if open.
    Toggle,
}

/// Click handlers of one mirror, keyed by element ID.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    handlers: HashMap<String, Action>,
}

impl Bindings {
    /// Bind every mirror option to its stored ordinal and the selection
    /// display to the visibility toggle.
    pub fn new(mirror: &Mirror) -> Self {
        let mut handlers: HashMap<String, Action> = mirror
            .options
            .iter()
            .map(|option| (option.node_id.clone(), Action::Pick(option.ordinal)))
            .collect();
        handlers.insert(mirror.selection_id.clone(), Action::Toggle);
        Self { handlers }
    }

    pub fn action_for(&self, id: &str) -> Option<Action> {
        self.handlers.get(id).copied()
    }

    /// The action for a click on `target`: its own handler, or that of its
    /// nearest bound ancestor.
    pub fn resolve(&self, doc: &Document, target: &str) -> Option<Action> {
        if let Some(action) = self.action_for(target) {
            return Some(action);
        }
        doc.ancestors(target)
            .iter()
            .find_map(|id| self.action_for(id))
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Ordinal of the option a fresh selectbox starts on: the first one marked
/// selected, otherwise the first one.
pub fn initial_option(options: &[SourceOption]) -> Option<usize> {
    if options.is_empty() {
        return None;
    }
    Some(options.iter().position(|option| option.selected).unwrap_or(0))
}

/// Bind `mirror` and sync the display with the source's current selection.
pub fn bind(doc: &mut Document, controller: &mut StateController) -> Bindings {
    let bindings = Bindings::new(controller.mirror());

    let options = controller.source().options(doc);
    match initial_option(&options) {
        Some(ordinal) => controller.select(doc, ordinal, &options[ordinal]),
        // Nothing to select; just make sure the list starts hidden.
        None => controller.close(doc),
    }

    bindings
}
