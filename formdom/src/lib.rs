pub mod animation;
pub mod document;
pub mod element;
pub mod event;
pub mod layout;
pub mod render;
pub mod text;
pub mod transitions;
pub mod types;

pub use animation::{AnimationState, TransitionProperty};
pub use document::Document;
pub use element::Element;
pub use event::{Event, EventResult, MouseButton};
pub use layout::{LayoutResult, Rect};
pub use transitions::{Easing, TransitionConfig};
pub use types::*;
