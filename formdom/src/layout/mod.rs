mod flow;
mod rect;

pub use flow::{layout, offset_top, LayoutResult};
pub use rect::Rect;
