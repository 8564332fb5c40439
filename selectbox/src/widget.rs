//! The attached selectbox and the collection type for many of them.

use std::sync::Arc;

use formdom::{Document, Element, Event, EventResult, MouseButton};

use crate::binder::{self, Action, Bindings};
use crate::builder::{self, Mirror};
use crate::error::{Error, Result};
use crate::settings::Settings;
use crate::source::{MIRROR_DATA_KEY, SourceControl, SourceOption};
use crate::state::{StateController, Visibility};

/// A stylable mirror of one native `select`.
///
/// The native control stays in the document, hidden, and keeps carrying the
/// selection a form submits. Each instance is independent: its settings are
/// captured at attach time and nothing is shared between instances.
#[derive(Debug)]
pub struct Selectbox {
    controller: StateController,
    bindings: Bindings,
}

impl Selectbox {
    /// Mirror the `select` with ID `source_id`.
    ///
    /// Builds the mirror, inserts it right after the source, hides the
    /// source, binds clicks, and selects the source's marked option (or its
    /// first option).
    pub fn attach(doc: &mut Document, source_id: &str, settings: &Settings) -> Result<Self> {
        let source = SourceControl::resolve(doc, source_id)?;
        if source.mirror_id(doc).is_some() {
            return Err(Error::AlreadyAttached(source_id.to_string()));
        }

        let options = source.options(doc);
        let (element, mirror) = builder::build(&source, &options, settings);

        if !doc.insert_after(source_id, element) {
            return Err(Error::NoParent(source_id.to_string()));
        }
        if let Some(native) = doc.get_mut(source_id) {
            native.hidden = true;
            native
                .data
                .insert(MIRROR_DATA_KEY.to_string(), mirror.root_id.clone());
        }

        let mut controller = StateController::new(Arc::new(settings.clone()), source, mirror);
        let bindings = binder::bind(doc, &mut controller);

        log::debug!(
            "[selectbox] attached to {source_id} ({} options)",
            options.len()
        );

        Ok(Self {
            controller,
            bindings,
        })
    }

    /// Route an event to this selectbox.
    ///
    /// Primary clicks on the selection display (or anything inside it)
    /// toggle the list; primary clicks on an option select it. Everything
    /// else is ignored.
    pub fn handle_event(&mut self, doc: &mut Document, event: &Event) -> EventResult {
        let Event::Click {
            target,
            button: MouseButton::Left,
        } = event
        else {
            return EventResult::Ignored;
        };

        match self.bindings.resolve(doc, target) {
            Some(Action::Toggle) => {
                self.controller.toggle(doc);
                EventResult::Consumed
            }
            Some(Action::Pick(ordinal)) => {
                if !self.controller.select_index(doc, ordinal) {
                    log::warn!(
                        "[selectbox] {} has no option {ordinal}",
                        self.controller.source().id()
                    );
                }
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    pub fn open(&mut self, doc: &mut Document) {
        self.controller.open(doc);
    }

    pub fn close(&mut self, doc: &mut Document) {
        self.controller.close(doc);
    }

    pub fn toggle(&mut self, doc: &mut Document) {
        self.controller.toggle(doc);
    }

    /// Select the option at `ordinal`, as a click on its mirror node would.
    pub fn select_index(&mut self, doc: &mut Document, ordinal: usize) -> bool {
        self.controller.select_index(doc, ordinal)
    }

    /// Select the first option whose value is `value`.
    pub fn select_value(&mut self, doc: &mut Document, value: &str) -> bool {
        let ordinal = self
            .controller
            .source()
            .options(doc)
            .iter()
            .position(|o| o.value == value);
        match ordinal {
            Some(ordinal) => self.controller.select_index(doc, ordinal),
            None => false,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.controller.visibility()
    }

    pub fn is_open(&self) -> bool {
        self.visibility() == Visibility::Open
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.controller.selected()
    }

    pub fn selected_option(&self, doc: &Document) -> Option<SourceOption> {
        let ordinal = self.selected_index()?;
        self.controller.source().option_at(doc, ordinal)
    }

    pub fn selected_value(&self, doc: &Document) -> Option<String> {
        self.selected_option(doc).map(|o| o.value)
    }

    /// Text currently shown in the selection display.
    pub fn display_text(&self, doc: &Document) -> String {
        doc.text_content(&self.mirror().label_id)
            .unwrap_or_default()
    }

    pub fn source_id(&self) -> &str {
        self.controller.source().id()
    }

    pub fn mirror(&self) -> &Mirror {
        self.controller.mirror()
    }

    pub fn settings(&self) -> &Settings {
        self.controller.settings()
    }

    /// Whether `id` is the mirror root or inside it.
    pub fn owns(&self, doc: &Document, id: &str) -> bool {
        let root = &self.mirror().root_id;
        id == root || doc.ancestors(id).iter().any(|a| a == root)
    }

    /// Remove the mirror and show the source again. The source keeps its
    /// current selection.
    pub fn detach(self, doc: &mut Document) -> Option<Element> {
        let mirror = self.controller.mirror();
        doc.animations_mut().cancel(&mirror.root_id);
        let removed = doc.remove(&mirror.root_id);

        if let Some(native) = doc.get_mut(self.controller.source().id()) {
            native.hidden = false;
            native.data.remove(MIRROR_DATA_KEY);
        }

        log::debug!("[selectbox] detached from {}", self.source_id());
        removed
    }
}

/// Every selectbox attached to one document.
#[derive(Debug, Default)]
pub struct Selectboxes {
    boxes: Vec<Selectbox>,
}

impl Selectboxes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirror every `select` in the document, in document order. Controls
    /// that already have a mirror are skipped.
    pub fn attach_all(doc: &mut Document, settings: &Settings) -> Result<Self> {
        let ids: Vec<String> = doc
            .find_by_tag("select")
            .into_iter()
            .filter(|el| el.get_data(MIRROR_DATA_KEY).is_none())
            .map(|el| el.id.clone())
            .collect();

        let mut boxes = Self::new();
        for id in ids {
            boxes.push(Selectbox::attach(doc, &id, settings)?);
        }
        Ok(boxes)
    }

    pub fn push(&mut self, selectbox: Selectbox) {
        self.boxes.push(selectbox);
    }

    /// Give the event to the selectbox owning its target.
    pub fn handle_event(&mut self, doc: &mut Document, event: &Event) -> EventResult {
        let target = event.target();
        match self.boxes.iter_mut().find(|b| b.owns(doc, target)) {
            Some(selectbox) => selectbox.handle_event(doc, event),
            None => EventResult::Ignored,
        }
    }

    pub fn get(&self, source_id: &str) -> Option<&Selectbox> {
        self.boxes.iter().find(|b| b.source_id() == source_id)
    }

    pub fn get_mut(&mut self, source_id: &str) -> Option<&mut Selectbox> {
        self.boxes.iter_mut().find(|b| b.source_id() == source_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Selectbox> {
        self.boxes.iter()
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}
