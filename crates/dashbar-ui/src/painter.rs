use dashbar_engine::paint::Paint;
use dashbar_engine::path::{build_round_rect_path, Path, RoundRectSpec};
use dashbar_engine::scene::DrawList;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with the capabilities widgets rely on:
/// filling a path with any [`Paint`] (including the destination-out
/// [`Paint::eraser`]) and bracketing work in an off-screen layer so erasure
/// only affects the widget's own pixels.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Fills `path` with `paint`. Empty paths are ignored.
    pub fn fill_path(&mut self, path: Path, paint: impl Into<Paint>) {
        self.draw_list.fill_path(path, paint.into());
    }

    /// Builds and fills a per-corner rounded rectangle.
    pub fn fill_round_rect(&mut self, spec: RoundRectSpec, paint: impl Into<Paint>) {
        self.fill_path(build_round_rect_path(&spec), paint);
    }

    // ── layers ────────────────────────────────────────────────────────────

    /// Begin an off-screen layer. Must be paired with [`pop_layer`](Self::pop_layer).
    pub fn push_layer(&mut self) {
        self.draw_list.push_layer();
    }

    /// Composite the most recent layer onto the one below.
    pub fn pop_layer(&mut self) {
        self.draw_list.pop_layer();
    }

    /// Runs `f` inside a balanced layer.
    pub fn with_layer(&mut self, f: impl FnOnce(&mut Painter<'_>)) {
        self.push_layer();
        f(self);
        self.pop_layer();
    }
}
