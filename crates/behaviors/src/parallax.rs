use foundation::geometry::{Point, Viewport};

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ParallaxOffset {
    pub x: f64,
    pub y: f64,
}

/// Pointer-driven background drift.
///
/// The pointer position is normalized to `[-0.5, 0.5]` around the viewport
/// center and multiplied by `strength`, so the default strength of 12 moves
/// the background at most 6px either way.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Parallax {
    strength: f64,
    scale: f64,
}

impl Parallax {
    pub fn new(strength: f64, scale: f64) -> Self {
        Self { strength, scale }
    }

    pub fn offset(&self, pointer: Point, viewport: Viewport) -> ParallaxOffset {
        match viewport.normalize(pointer) {
            Some(n) => ParallaxOffset {
                x: n.x * self.strength,
                y: n.y * self.strength,
            },
            None => ParallaxOffset::default(),
        }
    }

    /// CSS `transform` value for `offset`.
    pub fn transform(&self, offset: ParallaxOffset) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            offset.x, offset.y, self.scale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Parallax, ParallaxOffset};
    use foundation::geometry::{Point, Viewport};
    use pretty_assertions::assert_eq;

    fn parallax() -> Parallax {
        Parallax::new(12.0, 1.05)
    }

    #[test]
    fn center_has_no_offset() {
        let vp = Viewport::new(1440.0, 900.0);
        let offset = parallax().offset(vp.center(), vp);
        assert_eq!(offset, ParallaxOffset { x: 0.0, y: 0.0 });
        assert_eq!(
            parallax().transform(offset),
            "translate(0px, 0px) scale(1.05)"
        );
    }

    #[test]
    fn top_left_is_maximum_negative_offset() {
        let vp = Viewport::new(1440.0, 900.0);
        let offset = parallax().offset(Point::new(0.0, 0.0), vp);
        assert_eq!(offset, ParallaxOffset { x: -6.0, y: -6.0 });
        assert_eq!(
            parallax().transform(offset),
            "translate(-6px, -6px) scale(1.05)"
        );
    }

    #[test]
    fn bottom_right_is_maximum_positive_offset() {
        let vp = Viewport::new(1000.0, 500.0);
        let offset = parallax().offset(Point::new(1000.0, 500.0), vp);
        assert_eq!(offset, ParallaxOffset { x: 6.0, y: 6.0 });
    }

    #[test]
    fn zero_sized_viewport_does_not_move() {
        let offset = parallax().offset(Point::new(10.0, 10.0), Viewport::new(0.0, 0.0));
        assert_eq!(offset, ParallaxOffset::default());
    }
}
