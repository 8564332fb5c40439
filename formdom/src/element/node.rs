use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{Position, Size};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,
    pub classes: Vec<String>,

    // Content
    pub content: Content,

    // Markup attributes (`name`, `value`, `selected`, ...)
    pub attrs: HashMap<String, String>,

    // Visibility (`display: none` when true)
    pub hidden: bool,

    // Layout
    pub height: Size,

    // Positioning
    pub position: Position,
    pub top: Option<i16>,
    pub left: Option<i16>,
    pub z_index: i16,

    // Interaction
    pub clickable: bool,

    // Custom data storage (back-references, option values, etc.)
    pub data: HashMap<String, String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            classes: Vec::new(),
            content: Content::None,
            attrs: HashMap::new(),
            hidden: false,
            height: Size::Auto,
            position: Position::Static,
            top: None,
            left: None,
            z_index: 0,
            clickable: false,
            data: HashMap::new(),
        }
    }

    pub fn box_() -> Self {
        Self::new("div")
    }

    pub fn list() -> Self {
        Self::new("ul")
    }

    pub fn item() -> Self {
        Self::new("li")
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new("span").content(Content::Text(content.into()))
    }

    pub fn form() -> Self {
        Self::new("form")
    }

    /// A native single-choice control. Add `option` (or `optgroup`) children.
    pub fn select(name: impl Into<String>) -> Self {
        Self::new("select").attr("name", name)
    }

    /// An option of a `select`. Its value defaults to its label text.
    pub fn option(label: impl Into<String>) -> Self {
        Self::new("option").content(Content::Text(label.into()))
    }

    pub fn optgroup(label: impl Into<String>) -> Self {
        Self::new("optgroup").attr("label", label)
    }

    pub fn input(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new("input").attr("name", name).attr("value", value)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    // Content
    pub fn content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    /// Replace the content with a single text run.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }

    /// Concatenated text of this element and all of its descendants.
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(text) => text.clone(),
            Content::Children(children) => children.iter().map(Element::text_content).collect(),
        }
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&String> {
        self.attrs.get(name)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.remove(name)
    }

    /// Set the `value` attribute of an option or input.
    pub fn value(self, value: impl Into<String>) -> Self {
        self.attr("value", value)
    }

    /// Mark an option as selected in markup.
    pub fn selected(self) -> Self {
        self.attr("selected", "selected")
    }

    pub fn is_selected(&self) -> bool {
        self.has_attr("selected")
    }

    /// The submitted value of an option: its `value` attribute, falling back
    /// to its text.
    pub fn option_value(&self) -> String {
        self.get_attr("value")
            .cloned()
            .unwrap_or_else(|| self.text_content())
    }

    // Visibility
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    // Layout
    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    // Positioning
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn top(mut self, top: i16) -> Self {
        self.top = Some(top);
        self
    }

    pub fn left(mut self, left: i16) -> Self {
        self.left = Some(left);
        self
    }

    pub fn z_index(mut self, z_index: i16) -> Self {
        self.z_index = z_index;
        self
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }
}
