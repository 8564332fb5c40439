#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Fixed(u16),
    #[default]
    Auto,
}

/// How an element participates in flow layout.
///
/// `Relative` elements keep their slot in the flow but are painted shifted by
/// their `top`/`left` offsets. `Absolute` elements are laid out at their static
/// position without consuming flow space, and paint above flow content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
}
