//! Stylable mirrors of native `select` controls.
//!
//! A selectbox rebuilds a `select`'s options out of plain container elements
//! that can be styled freely, hides the native control, and keeps the two in
//! sync: clicking a mirror option moves the native control's selected flag,
//! and the native control's initial selection is shown by the mirror. The
//! hidden control stays in the form, so submission is unchanged.
//!
//! ```
//! use formdom::{Document, Element, Event};
//! use selectbox::Settings;
//!
//! let mut doc = Document::new(
//!     Element::form().id("form").child(
//!         Element::select("size")
//!             .id("size")
//!             .child(Element::option("Small").value("s"))
//!             .child(Element::option("Large").value("l")),
//!     ),
//! );
//!
//! let mut size = selectbox::attach(&mut doc, "size", &Settings::default()).unwrap();
//! assert_eq!(size.display_text(&doc), "Small");
//!
//! let second = size.mirror().options[1].node_id.clone();
//! size.handle_event(&mut doc, &Event::click(second));
//! assert_eq!(doc.form_data("form"), vec![("size".to_string(), "l".to_string())]);
//! ```

pub mod binder;
pub mod builder;
pub mod error;
pub mod settings;
pub mod source;
pub mod state;
mod widget;

pub use error::{Error, Result};
pub use settings::{Settings, SettingsOverrides};
pub use source::{SourceControl, SourceOption};
pub use state::Visibility;
pub use widget::{Selectbox, Selectboxes};

use formdom::Document;

/// Mirror the `select` with ID `source_id`. See [`Selectbox::attach`].
pub fn attach(doc: &mut Document, source_id: &str, settings: &Settings) -> Result<Selectbox> {
    Selectbox::attach(doc, source_id, settings)
}

/// Mirror every `select` in the document. See [`Selectboxes::attach_all`].
pub fn attach_all(doc: &mut Document, settings: &Settings) -> Result<Selectboxes> {
    Selectboxes::attach_all(doc, settings)
}
