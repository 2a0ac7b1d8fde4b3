//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - keep paint order equal to recording order
//! - scope destination-out erasure to off-screen layers

mod cmd;
mod list;

pub use cmd::{DrawCmd, FillPathCmd};
pub use list::DrawList;
