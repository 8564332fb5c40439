mod enums;

pub use enums::{Position, Size};
