//! Paint model shared between the widget layer and renderers.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - composite mode (normal painting vs. alpha erase)
//!
//! Geometry types remain in `coords` and `path`.

pub mod color;

pub use color::Color;

/// How a fill combines with what is already in the target.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum BlendMode {
    /// Paint over existing content.
    #[default]
    SourceOver,
    /// Erase existing content wherever the shape covers it (`DST_OUT`).
    ///
    /// The source color only contributes its alpha.
    DestinationOut,
}

/// Fill state for a path: color, composite mode and anti-aliasing.
///
/// Kept small and `Copy` so widgets can cache a handful of them and rebuild
/// only when their colors change.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub blend: BlendMode,
    pub anti_alias: bool,
}

impl Paint {
    /// Anti-aliased source-over fill.
    #[inline]
    pub fn solid(color: Color) -> Self {
        Self { color, blend: BlendMode::SourceOver, anti_alias: true }
    }

    /// Opaque destination-out fill that punches fully transparent holes.
    ///
    /// Aliased so separator edges stay crisp.
    #[inline]
    pub fn eraser() -> Self {
        Self {
            color: Color::from_premul(0.0, 0.0, 0.0, 1.0),
            blend: BlendMode::DestinationOut,
            anti_alias: false,
        }
    }

    #[inline]
    pub fn is_eraser(&self) -> bool {
        self.blend == BlendMode::DestinationOut
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::solid(color)
    }
}
