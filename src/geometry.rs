//! Plane geometry for bead silhouettes and pointer hit testing.
//!
//! Bead shapes are octagons in surface coordinates: top and bottom edges at
//! one third of the bead width, vertical side edges at full width spanning
//! the middle third of the bead height, diagonals joining them. Hit testing
//! is an even-odd point-in-polygon walk with a bounding-box fast path.
//!
//! At this scale (at most 19 rods x 5 beads) scanning every polygon per
//! pointer event is plenty fast; no spatial index is kept.

// =============================================================================
// Point
// =============================================================================

/// A point in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// =============================================================================
// Polygon
// =============================================================================

/// A closed polygon with a cached bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
    min: Point,
    max: Point,
}

impl Polygon {
    /// Create a polygon from its vertices (in order, implicitly closed).
    ///
    /// # Panics
    ///
    /// Panics if fewer than 3 vertices are given.
    pub fn new(points: Vec<Point>) -> Self {
        assert!(points.len() >= 3, "polygon needs at least 3 vertices");

        let mut min = points[0];
        let mut max = points[0];
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }

        Self { points, min, max }
    }

    /// The bead silhouette: an octagon centered at (cx, cy).
    ///
    /// Vertices clockwise from the top-left: top and bottom edges span one
    /// third of `width`, the vertical side edges sit at full width across
    /// the middle third of `height`.
    pub fn bead(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        let nw = width / 6.0; // half of the narrow top/bottom edges
        let sh = height / 6.0; // half-height of the full-width side band

        Self::new(vec![
            Point::new(cx - nw, cy - hh),
            Point::new(cx + nw, cy - hh),
            Point::new(cx + hw, cy - sh),
            Point::new(cx + hw, cy + sh),
            Point::new(cx + nw, cy + hh),
            Point::new(cx - nw, cy + hh),
            Point::new(cx - hw, cy + sh),
            Point::new(cx - hw, cy - sh),
        ])
    }

    /// The polygon's vertices.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Bounding box as (min, max) corners.
    #[inline]
    pub fn bounds(&self) -> (Point, Point) {
        (self.min, self.max)
    }

    /// Even-odd containment test.
    ///
    /// Points exactly on an edge may land either way; at bead scale the
    /// pointer can never meaningfully distinguish that, so no epsilon
    /// handling is done.
    pub fn contains(&self, p: Point) -> bool {
        // Bounding-box reject
        if p.x < self.min.x || p.x > self.max.x || p.y < self.min.y || p.y > self.max.y {
            return false;
        }

        // Crossing-number walk over the edge list
        let n = self.points.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let pi = self.points[i];
            let pj = self.points[j];
            if (pi.y > p.y) != (pj.y > p.y) {
                let x_cross = pj.x + (p.y - pj.y) * (pi.x - pj.x) / (pi.y - pj.y);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn octagon() -> Polygon {
        Polygon::bead(10.0, 10.0, 6.0, 6.0)
    }

    #[test]
    fn test_bead_has_eight_vertices() {
        assert_eq!(octagon().points().len(), 8);
    }

    #[test]
    fn test_bead_bounds() {
        let (min, max) = octagon().bounds();
        assert_eq!((min.x, min.y), (7.0, 7.0));
        assert_eq!((max.x, max.y), (13.0, 13.0));
    }

    #[test]
    fn test_center_is_inside() {
        assert!(octagon().contains(Point::new(10.0, 10.0)));
    }

    #[test]
    fn test_outside_bbox_is_rejected() {
        let poly = octagon();
        assert!(!poly.contains(Point::new(0.0, 0.0)));
        assert!(!poly.contains(Point::new(10.0, 14.0)));
        assert!(!poly.contains(Point::new(14.0, 10.0)));
    }

    #[test]
    fn test_side_band_is_full_width() {
        // On the horizontal midline the octagon extends to full half-width.
        let poly = octagon();
        assert!(poly.contains(Point::new(12.9, 10.0)));
        assert!(poly.contains(Point::new(7.1, 10.0)));
    }

    #[test]
    fn test_corners_are_cut() {
        // Near the top the shape narrows to one third width, so a point at
        // full width but top height falls outside the diagonal.
        let poly = octagon();
        assert!(!poly.contains(Point::new(12.9, 7.2)));
        assert!(!poly.contains(Point::new(7.1, 12.8)));
        // While the narrow top edge itself is still inside.
        assert!(poly.contains(Point::new(10.0, 7.2)));
    }

    #[test]
    fn test_tall_bead_scales() {
        let poly = Polygon::bead(50.0, 20.0, 12.0, 4.0);
        assert!(poly.contains(Point::new(55.0, 20.0)));
        assert!(!poly.contains(Point::new(55.0, 18.2)));
        assert!(poly.contains(Point::new(50.0, 18.2)));
    }

    #[test]
    #[should_panic(expected = "at least 3 vertices")]
    fn test_degenerate_polygon_panics() {
        let _ = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
    }
}
