//! Attachment errors

use thiserror::Error;

/// Why a selectbox could not be attached to an element.
///
/// Transitions on an attached selectbox never fail; only setup does.
#[derive(Debug, Error)]
pub enum Error {
    /// No element with this ID exists in the document.
    #[error("no element with id {0:?}")]
    SourceNotFound(String),

    /// The element exists but is not a `select`.
    #[error("element {id:?} is a <{tag}>, not a <select>")]
    NotASelect { id: String, tag: String },

    /// The element is the document root, so the mirror has nowhere to go.
    #[error("element {0:?} has no parent to insert the mirror into")]
    NoParent(String),

    /// The element already has a mirror.
    #[error("element {0:?} is already mirrored")]
    AlreadyAttached(String),

    /// Caller-supplied JSON overrides could not be parsed.
    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
