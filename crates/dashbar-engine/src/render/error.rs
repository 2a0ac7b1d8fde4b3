use std::fmt;

/// Errors raised while preparing a raster target.
///
/// Drawing itself never fails: empty or degenerate paths are skipped.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The requested pixmap has a zero dimension or is too large to allocate.
    InvalidTargetSize { width: u32, height: u32 },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidTargetSize { width, height } => {
                write!(f, "cannot allocate a {width}x{height} render target")
            }
        }
    }
}

impl std::error::Error for RenderError {}
