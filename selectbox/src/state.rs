//! Visibility and selection transitions.

use std::sync::Arc;

use formdom::layout::offset_top;
use formdom::{Document, Easing, TransitionConfig, TransitionProperty};

use crate::builder::Mirror;
use crate::settings::Settings;
use crate::source::{SourceControl, SourceOption};

/// Whether the option list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

/// Owns the open/closed flag and the selected ordinal of one selectbox,
/// and applies every transition to the document.
///
/// The flag is the authority on visibility; the option list's `hidden` flag
/// in the document only follows it.
#[derive(Debug)]
pub struct StateController {
    settings: Arc<Settings>,
    source: SourceControl,
    mirror: Mirror,
    visibility: Visibility,
    selected: Option<usize>,
}

impl StateController {
    pub fn new(settings: Arc<Settings>, source: SourceControl, mirror: Mirror) -> Self {
        Self {
            settings,
            source,
            mirror,
            visibility: Visibility::Closed,
            selected: None,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn source(&self) -> &SourceControl {
        &self.source
    }

    pub fn mirror(&self) -> &Mirror {
        &self.mirror
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Show the option list and, when enabled, cascade the options into
    /// place. Opening an open list changes nothing.
    pub fn open(&mut self, doc: &mut Document) {
        if self.visibility == Visibility::Open {
            log::trace!("[selectbox] {} already open", self.mirror.root_id);
            return;
        }
        if !doc.show(&self.mirror.container_id) {
            log::warn!("[selectbox] {} is no longer in the document", self.mirror.root_id);
            return;
        }
        self.visibility = Visibility::Open;
        log::debug!("[selectbox] open {}", self.mirror.root_id);

        if self.settings.animation {
            self.cascade(doc);
        }
    }

    /// Hide the option list. Idempotent.
    pub fn close(&mut self, doc: &mut Document) {
        doc.hide(&self.mirror.container_id);
        if self.visibility == Visibility::Open {
            log::debug!("[selectbox] close {}", self.mirror.root_id);
        }
        self.visibility = Visibility::Closed;
    }

    pub fn toggle(&mut self, doc: &mut Document) {
        match self.visibility {
            Visibility::Open => self.close(doc),
            Visibility::Closed => self.open(doc),
        }
    }

    /// Make the option at `ordinal` the selection: show its label, close the
    /// list, and move the source's selected flag onto it.
    ///
    /// `option` is trusted to be the source option at `ordinal`.
    pub fn select(&mut self, doc: &mut Document, ordinal: usize, option: &SourceOption) {
        doc.set_text(&self.mirror.label_id, option.label.clone());
        self.close(doc);

        if !self.source.mark_selected(doc, ordinal) {
            log::warn!(
                "[selectbox] could not mark option {ordinal} selected on {}",
                self.source.id()
            );
        }
        self.selected = Some(ordinal);
        log::debug!(
            "[selectbox] {} selected {:?} ({ordinal})",
            self.source.id(),
            option.value
        );
    }

    /// Select the source option at `ordinal`. False if there is none.
    pub fn select_index(&mut self, doc: &mut Document, ordinal: usize) -> bool {
        match self.source.option_at(doc, ordinal) {
            Some(option) => {
                self.select(doc, ordinal, &option);
                true
            }
            None => false,
        }
    }

    /// Start every option one resting-offset above its slot and slide it
    /// back down. Purely visual: each option's `top` is already 0.
    fn cascade(&self, doc: &mut Document) {
        let layout = doc.layout(u16::MAX);
        let config = TransitionConfig::new(self.settings.animation_duration, Easing::Swing);

        for option in &self.mirror.options {
            let Some(offset) = offset_top(&layout, &option.node_id, &self.mirror.container_id)
            else {
                continue;
            };
            let offset = i16::try_from(offset).unwrap_or(i16::MAX);

            if let Some(node) = doc.get_mut(&option.node_id) {
                node.top = Some(0);
            }
            doc.animations_mut()
                .start(&option.node_id, TransitionProperty::Top, -offset, 0, config);
        }
    }
}
