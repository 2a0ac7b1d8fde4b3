use std::f32::consts::PI;

/// Interpolation curves mapping linear progress in `[0, 1]` to eased progress.
///
/// All curves are monotonic and fix both endpoints.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Easing {
    Linear,
    /// Symmetric cosine curve `cos((t + 1)π) / 2 + 0.5`: slow, fast, slow.
    #[default]
    AccelerateDecelerate,
    /// Cubic ease-in-out: flatter ends and a steeper middle than the cosine curve.
    CubicInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }

    /// Parses the attribute-sheet spelling of a curve.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(Easing::Linear),
            "accelerate_decelerate" | "ease_in_out" => Some(Easing::AccelerateDecelerate),
            "cubic_in_out" => Some(Easing::CubicInOut),
            _ => None,
        }
    }
}
