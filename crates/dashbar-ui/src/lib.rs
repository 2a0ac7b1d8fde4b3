//! Dashbar UI: widgets on top of `dashbar-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use dashbar_ui::prelude::*;
//!
//! let mut scene = UiScene::new();
//! let mut bar = DashedProgressBar::new();
//! bar.set_max_dash_count(5);
//! bar.set_current_dash_count(2);
//!
//! // Once per frame:
//! let ft = clock.tick();
//! if scene.advance(&mut bar, ft) {
//!     let draw_list = scene.frame(&mut bar, viewport);
//!     // hand draw_list to a renderer
//! }
//! ```
//!
//! # Threading
//!
//! Widgets are single-threaded state machines. Setters, `advance` and
//! `paint` must all be called from the thread that drives the frame loop;
//! concurrent mutation is a precondition violation and is not guarded.

pub mod config;
pub mod constraints;
pub mod error;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything needed to build and drive widgets.
pub mod prelude {
    pub use crate::config::DashedProgressConfig;
    pub use crate::constraints::Constraints;
    pub use crate::error::ConfigError;
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::widget::Widget;
    pub use crate::widgets::dashed_progress::{
        AnimatorState, DashLayout, DashPaints, DashedProgressBar, ProgressAnimator,
    };

    // Re-export the engine primitives everyone needs.
    pub use dashbar_engine::coords::{Corners, Rect, Vec2};
    pub use dashbar_engine::paint::{BlendMode, Color, Paint};
    pub use dashbar_engine::path::{build_round_rect_path, Path, RoundRectSpec};
    pub use dashbar_engine::time::{Easing, FrameClock, FrameTime};
}
