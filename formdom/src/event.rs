/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse click on an element
    Click { target: String, button: MouseButton },
    /// Mouse moved over an element
    Hover { target: String },
}

impl Event {
    /// A primary-button click on `target`.
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
            button: MouseButton::Left,
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Self::Click { target, .. } | Self::Hover { target } => target,
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Whether a handler acted on an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The event was handled and should not propagate further.
    Consumed,
    /// Nobody handled the event.
    Ignored,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }
}
