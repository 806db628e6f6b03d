//! Point and line intersection tests.
//!
//! `point_in_polygon` is the HOT PATH: the grid tiler calls it once per
//! lattice point, which is tens of thousands of times per composition.

use crate::geometry::{Point, Segment};

/// Below this determinant two lines are treated as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-3;

// ============================================================================
// POINT IN POLYGON (Ray Casting Algorithm)
// ============================================================================
//
// ## Rust Lesson #8: References & Slices
//
// `&[Point]` is a borrowed view of contiguous points. It accepts a
// `Vec<Point>`, an array, or a `Polygon`'s vertex list without copying.

/// Test if a point is inside a polygon using ray casting.
///
/// Casts a ray towards +x and counts edge crossings. Edge `(v[j], v[i])`
/// counts when exactly one endpoint has `y > p.y` and the edge crosses the
/// ray's line strictly to the right of `p.x`. Odd crossings = inside.
///
/// Points exactly on the boundary may land either way.
#[inline]
pub fn point_in_polygon(p: Point, polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;

    for i in 0..n {
        let (xi, yi) = (polygon[i].x, polygon[i].y);
        let (xj, yj) = (polygon[j].x, polygon[j].y);

        if ((yi > p.y) != (yj > p.y)) && (p.x < (xj - xi) * (p.y - yi) / (yj - yi) + xi) {
            inside = !inside;
        }

        j = i;
    }

    inside
}

// ============================================================================
// LINE-LINE INTERSECTION
// ============================================================================

/// Intersection of the infinite lines through two segments.
///
/// Uses the two-line determinant form. Returns `None` when the lines are
/// (nearly) parallel, i.e. `|det| < PARALLEL_EPSILON`.
pub fn line_intersection(a: &Segment, b: &Segment) -> Option<Point> {
    let (x1, y1, x2, y2) = (a.p1.x, a.p1.y, a.p2.x, a.p2.y);
    let (x3, y3, x4, y4) = (b.p1.x, b.p1.y, b.p2.x, b.p2.y);

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;
    Some(a.point_at(t))
}
