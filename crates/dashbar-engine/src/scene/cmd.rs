use crate::paint::Paint;
use crate::path::Path;

/// Path fill payload.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPathCmd {
    pub path: Path,
    pub paint: Paint,
}

impl FillPathCmd {
    #[inline]
    pub fn new(path: Path, paint: Paint) -> Self {
        Self { path, paint }
    }
}

/// Renderer-agnostic draw command stream.
///
/// Layers bracket a run of commands that render into a transparent
/// off-screen buffer which is composited (source-over) onto its parent at
/// `PopLayer`. Destination-out fills inside a layer only erase what that
/// layer has accumulated.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillPath(FillPathCmd),
    PushLayer,
    PopLayer,
}
