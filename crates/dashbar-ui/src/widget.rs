use std::time::Duration;

use dashbar_engine::coords::{Rect, Vec2};

use crate::constraints::Constraints;
use crate::painter::Painter;

/// The core trait every UI component implements.
///
/// The frame loop calls, in order: [`advance`](Widget::advance) once per
/// tick, then (when something changed) [`measure`](Widget::measure),
/// [`resize`](Widget::resize) and [`paint`](Widget::paint).
///
/// # Implementing a custom widget
///
/// ```rust,ignore
/// use dashbar_ui::prelude::*;
///
/// pub struct Swatch { color: Color }
///
/// impl Widget for Swatch {
///     fn measure(&self, constraints: Constraints) -> Vec2 {
///         constraints.constrain(Vec2::new(16.0, 16.0))
///     }
///     fn paint(&self, painter: &mut Painter, rect: Rect) {
///         painter.fill_round_rect(RoundRectSpec::uniform(rect, 4.0, Corners::ALL), self.color);
///     }
/// }
/// ```
pub trait Widget: 'static {
    /// Compute the size this widget wants given the available space.
    ///
    /// Must be deterministic: calling `measure` twice with the same arguments
    /// must return the same result.
    fn measure(&self, constraints: Constraints) -> Vec2;

    /// Draw this widget into `painter` within the bounds of `rect`.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// Notifies the widget of the size it will be painted at.
    ///
    /// Called before every paint; implementations should ignore repeats.
    fn resize(&mut self, _size: Vec2) {}

    /// Advances running animations by `dt`. Returns `true` when the widget
    /// produced a new value and must be repainted.
    fn advance(&mut self, _dt: Duration) -> bool {
        false
    }

    /// Returns and clears a pending repaint request raised by a setter.
    fn take_redraw(&mut self) -> bool {
        false
    }
}
