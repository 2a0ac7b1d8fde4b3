//! Built-in widgets.

pub mod dashed_progress;
