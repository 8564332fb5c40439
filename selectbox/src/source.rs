//! Read and write access to the native `select` behind a selectbox.

use formdom::Document;
use formdom::document::{select_option_at, select_options};

use crate::error::{Error, Result};

/// One option of the source control, as read from the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOption {
    /// Element ID of the `option`.
    pub id: String,
    pub label: String,
    pub value: String,
    pub selected: bool,
}

/// Non-owning handle to a `select` element.
///
/// Holds only the element ID; the element itself stays in the document and
/// outlives any widget built on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceControl {
    id: String,
}

impl SourceControl {
    /// Check that `id` names a `select` in `doc`.
    pub fn resolve(doc: &Document, id: &str) -> Result<Self> {
        let element = doc
            .get(id)
            .ok_or_else(|| Error::SourceNotFound(id.to_string()))?;
        if element.tag != "select" {
            return Err(Error::NotASelect {
                id: id.to_string(),
                tag: element.tag.clone(),
            });
        }
        Ok(Self { id: id.to_string() })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Options in document order. Empty if the control left the document.
    pub fn options(&self, doc: &Document) -> Vec<SourceOption> {
        let Some(select) = doc.get(&self.id) else {
            return Vec::new();
        };
        select_options(select)
            .into_iter()
            .map(|option| SourceOption {
                id: option.id.clone(),
                label: option.text_content(),
                value: option.option_value(),
                selected: option.is_selected(),
            })
            .collect()
    }

    pub fn option_at(&self, doc: &Document, ordinal: usize) -> Option<SourceOption> {
        self.options(doc).into_iter().nth(ordinal)
    }

    /// Ordinal of the first option marked selected.
    pub fn selected_index(&self, doc: &Document) -> Option<usize> {
        self.options(doc).iter().position(|o| o.selected)
    }

    /// Clear the selected flag on every option, then set it on the option at
    /// `ordinal`.
    ///
    /// Only this control's own options are touched. Returns false when the
    /// control left the document or has no option at `ordinal`.
    pub fn mark_selected(&self, doc: &mut Document, ordinal: usize) -> bool {
        match doc.get_mut(&self.id) {
            Some(select) => select_option_at(select, ordinal),
            None => false,
        }
    }

    /// Whether the control is currently mirrored, and by which root.
    pub fn mirror_id(&self, doc: &Document) -> Option<String> {
        doc.get(&self.id)?.get_data(MIRROR_DATA_KEY).cloned()
    }
}

/// Data key on the source naming its mirror root.
pub const MIRROR_DATA_KEY: &str = "mirror";
