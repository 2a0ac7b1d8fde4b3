use crate::paint::Paint;
use crate::path::Path;

use super::{DrawCmd, FillPathCmd};

/// Recorded draw stream for a frame.
///
/// Commands are painted in insertion order. There is no z-sorting: layer
/// brackets depend on the exact sequence.
///
/// # Layers
///
/// Use [`push_layer`](Self::push_layer) / [`pop_layer`](Self::pop_layer) to
/// isolate a group whose erasing fills must not punch through content drawn
/// before the group.
///
/// ```ignore
/// draw_list.push_layer();
/// draw_list.fill_path(background, Paint::solid(gray));
/// draw_list.fill_path(gap, Paint::eraser());
/// draw_list.pop_layer();
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
    layer_depth: usize,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.layer_depth = 0;
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Records a path fill. Empty paths are dropped at record time.
    #[inline]
    pub fn fill_path(&mut self, path: Path, paint: Paint) {
        if path.is_empty() {
            return;
        }
        self.items.push(DrawCmd::FillPath(FillPathCmd::new(path, paint)));
    }

    /// Begins an off-screen layer. Must be paired with [`pop_layer`](Self::pop_layer).
    #[inline]
    pub fn push_layer(&mut self) {
        self.layer_depth += 1;
        self.items.push(DrawCmd::PushLayer);
    }

    /// Ends the most recent layer started by [`push_layer`](Self::push_layer).
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_layer`.
    #[inline]
    pub fn pop_layer(&mut self) {
        debug_assert!(self.layer_depth > 0, "pop_layer called without matching push_layer");
        if self.layer_depth == 0 {
            return;
        }
        self.layer_depth -= 1;
        self.items.push(DrawCmd::PopLayer);
    }

    /// `true` when every `push_layer` has a matching `pop_layer`.
    #[inline]
    pub fn is_balanced(&self) -> bool {
        self.layer_depth == 0
    }
}
