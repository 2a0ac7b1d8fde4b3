/// Per-corner round/square flags for a rectangle.
///
/// Corners follow CSS order: top-left, top-right, bottom-right, bottom-left.
/// `true` means the corner is rounded, `false` means it stays square.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Corners {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_right: bool,
    pub bottom_left: bool,
}

impl Corners {
    /// All four corners rounded.
    pub const ALL: Corners = Corners::new(true, true, true, true);

    /// No rounding.
    pub const NONE: Corners = Corners::new(false, false, false, false);

    #[inline]
    pub const fn new(top_left: bool, top_right: bool, bottom_right: bool, bottom_left: bool) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }
}

impl Default for Corners {
    fn default() -> Self {
        Self::ALL
    }
}
