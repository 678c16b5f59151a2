#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point on the circle of `radius` around `self`, `degrees` clockwise from +x
    /// (screen coordinates, y grows downward).
    /// Cosine and sine are snapped to zero at right angles, so points on the axes land
    /// exactly on the anchored edge.
    pub fn on_circle(&self, radius: f64, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::new(
            self.x + radius * snap_to_zero(cos),
            self.y + radius * snap_to_zero(sin),
        )
    }

    /// Drops the fractional part of both coordinates, the way pointer events are
    /// reduced to whole pixels before hit testing.
    pub fn truncated(&self) -> Self {
        Self::new(self.x.trunc(), self.y.trunc())
    }
}

const TRIG_EPSILON: f64 = 1e-12;

fn snap_to_zero(v: f64) -> f64 {
    if v.abs() < TRIG_EPSILON { 0.0 } else { v }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_center(center: Point, half_width: f64, half_height: f64) -> Self {
        Self::new(
            center.x - half_width,
            center.y - half_height,
            center.x + half_width,
            center.y + half_height,
        )
    }

    /// Smallest rect enclosing every point, `None` for an empty iterator.
    pub fn enclosing(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Self::new(p.x, p.y, p.x, p.y),
                Some(r) => Self::new(
                    r.left.min(p.x),
                    r.top.min(p.y),
                    r.right.max(p.x),
                    r.bottom.max(p.y),
                ),
            })
        })
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Half-open containment: left and top edges are inside, right and bottom are not.
    pub fn contains(&self, p: Point) -> bool {
        !self.is_empty()
            && p.x >= self.left
            && p.x < self.right
            && p.y >= self.top
            && p.y < self.bottom
    }

    /// Grows the rect by `amount` on every side; negative values shrink it.
    pub fn outset(&self, amount: f64) -> Self {
        Self::new(
            self.left - amount,
            self.top - amount,
            self.right + amount,
            self.bottom + amount,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Padding {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(9.0, 9.0)));
        assert!(!r.contains(Point::new(10.0, 5.0)));
        assert!(!r.contains(Point::new(5.0, 10.0)));
        assert!(!Rect::default().contains(Point::default()));
    }

    #[test]
    fn test_enclosing() {
        let r = Rect::enclosing([Point::new(3.0, -1.0), Point::new(-2.0, 4.0)]).unwrap();
        assert_eq!(r, Rect::new(-2.0, -1.0, 3.0, 4.0));
        assert!(Rect::enclosing(std::iter::empty()).is_none());
    }

    #[test]
    fn test_on_circle_uses_screen_angles() {
        let c = Point::new(10.0, 10.0);
        let down = c.on_circle(5.0, 90.0);
        assert!((down.x - 10.0).abs() < 1e-9);
        assert!((down.y - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_on_circle_is_exact_on_the_axes() {
        let anchor = Point::new(0.0, 200.0);
        assert_eq!(anchor.on_circle(100.0, 90.0), Point::new(0.0, 300.0));
        assert_eq!(anchor.on_circle(100.0, 270.0), Point::new(0.0, 100.0));
        assert_eq!(anchor.on_circle(33.0, 450.0).x, 0.0);

        let top = Point::new(200.0, 0.0);
        assert_eq!(top.on_circle(100.0, 180.0), Point::new(100.0, 0.0));
        assert_eq!(top.on_circle(100.0, 360.0), Point::new(300.0, 0.0));
    }
}
