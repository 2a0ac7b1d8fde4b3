use dashbar_engine::coords::{Rect, Vec2};
use dashbar_engine::scene::DrawList;
use dashbar_engine::time::FrameTime;

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::Widget;

/// Top-level coordinator that owns the `DrawList` reused across frames.
///
/// The renderer lives in the application and receives the `&mut DrawList`
/// returned by [`frame`](Self::frame).
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
///
/// // In your frame callback:
/// if ui.advance(&mut bar, clock.tick()) {
///     let draw_list = ui.frame(&mut bar, viewport);
///     render_into(draw_list, &mut pixmap)?;
/// }
/// ```
pub struct UiScene {
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self { draw_list: DrawList::new() }
    }

    /// Drives animations for one tick and collects repaint requests.
    ///
    /// Returns `true` when the root must be repainted this frame.
    pub fn advance<W: Widget>(&mut self, root: &mut W, time: FrameTime) -> bool {
        let animated = root.advance(time.dt);
        let requested = root.take_redraw();
        if animated || requested {
            log::trace!("frame {}: repaint requested", time.frame_index);
        }
        animated || requested
    }

    /// Measure, size, and paint `root` for this frame.
    ///
    /// The root is measured against `viewport` and painted at the origin with
    /// its measured size. The returned `&mut DrawList` is owned by the
    /// `UiScene` and valid until the next call to `frame`.
    #[must_use]
    pub fn frame<W: Widget>(&mut self, root: &mut W, viewport: Vec2) -> &mut DrawList {
        self.draw_list.clear();

        let size = Constraints::loose(viewport).constrain(root.measure(Constraints::loose(viewport)));
        root.resize(size);

        {
            let mut painter = Painter::new(&mut self.draw_list);
            root.paint(&mut painter, Rect::from_origin_size(Vec2::zero(), size));
        }

        debug_assert!(self.draw_list.is_balanced(), "widget left a layer open");
        &mut self.draw_list
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}
