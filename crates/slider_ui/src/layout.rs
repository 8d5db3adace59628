//! Geometry primitives shared by the host and the overlay core.

/// A 2D point in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// An axis-aligned rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check whether a point lies inside (edges inclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Check whether two rectangles share any interior area.
    ///
    /// Rectangles that merely touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        other.right() > self.x
            && other.x < self.right()
            && other.bottom() > self.y
            && other.y < self.bottom()
    }

    /// Get the center point of this rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Distance from a point to the nearest edge or corner.
    ///
    /// Zero when the point is inside.
    pub fn distance_to(&self, point: Point) -> f32 {
        let dx = (self.x - point.x).max(point.x - self.right()).max(0.0);
        let dy = (self.y - point.y).max(point.y - self.bottom()).max(0.0);
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_contains_is_edge_inclusive() {
        let b = Bounds::new(10.0, 10.0, 20.0, 10.0);
        assert!(b.contains(Point::new(10.0, 10.0)));
        assert!(b.contains(Point::new(30.0, 20.0)));
        assert!(!b.contains(Point::new(30.1, 15.0)));
    }

    #[test]
    fn test_overlaps() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Bounds::new(9.5, 9.5, 10.0, 10.0)));
        assert!(a.overlaps(&Bounds::new(0.3, 0.0, 10.0, 10.0)));
        // Touching edges only
        assert!(!a.overlaps(&Bounds::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Bounds::new(50.0, 50.0, 10.0, 10.0)));
    }

    #[test]
    fn test_distance_inside_is_zero() {
        let b = Bounds::new(0.0, 0.0, 100.0, 20.0);
        assert_eq!(b.distance_to(Point::new(50.0, 10.0)), 0.0);
    }

    #[test]
    fn test_distance_to_edge_and_corner() {
        let b = Bounds::new(0.0, 0.0, 100.0, 20.0);
        // Straight above the top edge
        assert!(approx_eq(b.distance_to(Point::new(50.0, -30.0)), 30.0));
        // Right of the right edge
        assert!(approx_eq(b.distance_to(Point::new(110.0, 5.0)), 10.0));
        // Diagonal from the bottom-right corner (3-4-5 triangle)
        assert!(approx_eq(b.distance_to(Point::new(103.0, 24.0)), 5.0));
    }

    #[test]
    fn test_center() {
        let b = Bounds::new(10.0, 20.0, 100.0, 40.0);
        assert_eq!(b.center(), Point::new(60.0, 40.0));
    }
}
