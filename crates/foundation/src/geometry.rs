/// Point in CSS pixels, relative to the viewport's top-left corner.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Visible area of the browser window in CSS pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }

    /// Maps `p` into `[-0.5, 0.5]` on both axes, `(0, 0)` at the center.
    ///
    /// Returns `None` for a degenerate (zero, negative or non-finite) viewport.
    pub fn normalize(&self, p: Point) -> Option<Point> {
        if !(self.width.is_finite() && self.height.is_finite()) {
            return None;
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some(Point::new(p.x / self.width - 0.5, p.y / self.height - 0.5))
    }
}

/// Axis-aligned box as reported by `getBoundingClientRect`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ClientRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl ClientRect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Viewport};

    #[test]
    fn normalize_maps_center_to_origin() {
        let vp = Viewport::new(1200.0, 800.0);
        assert_eq!(vp.normalize(vp.center()), Some(Point::new(0.0, 0.0)));
        assert_eq!(
            vp.normalize(Point::new(0.0, 0.0)),
            Some(Point::new(-0.5, -0.5))
        );
        assert_eq!(
            vp.normalize(Point::new(1200.0, 800.0)),
            Some(Point::new(0.5, 0.5))
        );
    }

    #[test]
    fn degenerate_viewport_has_no_normal_space() {
        assert_eq!(Viewport::new(0.0, 800.0).normalize(Point::default()), None);
        assert_eq!(
            Viewport::new(f64::INFINITY, 1.0).normalize(Point::default()),
            None
        );
    }
}
