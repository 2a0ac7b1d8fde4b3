use dashbar_engine::coords::Vec2;

/// Layout constraints passed down from the host during measure.
///
/// A widget may return any size in `[min, max]`. Hosts enforce their own
/// policy by calling [`Constraints::constrain`] on the returned size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Tight: widget must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Loose: widget can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// No constraint: widget can take any positive size.
    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::zero(), max: Vec2::new(f32::INFINITY, f32::INFINITY) }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constrain_clamps_below_min() {
        let c = Constraints { min: Vec2::new(10.0, 10.0), max: Vec2::new(100.0, 100.0) };
        assert_eq!(c.constrain(Vec2::new(5.0, 3.0)), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn constrain_clamps_above_max() {
        let c = Constraints::loose(Vec2::new(50.0, 50.0));
        assert_eq!(c.constrain(Vec2::new(200.0, 200.0)), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn tight_forces_size() {
        let c = Constraints::tight(Vec2::new(30.0, 4.0));
        assert_eq!(c.constrain(Vec2::new(1.0, 100.0)), Vec2::new(30.0, 4.0));
    }

    #[test]
    fn unbounded_keeps_size() {
        let v = Vec2::new(1234.0, 5.0);
        assert_eq!(Constraints::unbounded().constrain(v), v);
    }
}
