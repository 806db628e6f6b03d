//! The lens: where two overlapping circles intersect.
//!
//! The outline is two arcs glued at the circles' intersection points. Each
//! arc is the part of its circle that lies inside the other circle, which is
//! the arc bulging toward the other circle's center. For unequal circles
//! that arc can be the *major* one (more than half the circle), so the arc
//! is picked by direction, never by length.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::geometry::{Circle, Point};

/// Samples per lens arc.
pub const LENS_ARC_SEGMENTS: usize = 50;

/// Wrap an angle into `[-π, π)`.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Interpolate from `a1` to `a2` along the shorter way round.
#[inline]
pub fn lerp_angle(a1: f64, a2: f64, t: f64) -> f64 {
    a1 + normalize_angle(a2 - a1) * t
}

/// The two points where the circles' boundaries cross.
///
/// `None` when the circles are apart or tangent (`d ≥ r1 + r2`), or one
/// contains the other (`d ≤ |r1 − r2|`, which includes concentric circles).
pub fn circle_intersections(c1: &Circle, c2: &Circle) -> Option<(Point, Point)> {
    let (r1, r2) = (c1.radius(), c2.radius());
    let d = c1.center.distance(c2.center);
    if d >= r1 + r2 || d <= (r1 - r2).abs() {
        return None;
    }

    let dx = c2.center.x - c1.center.x;
    let dy = c2.center.y - c1.center.y;

    // Distance from c1 to the chord, along the center line. Negative when
    // the chord sits behind c1.
    let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    let h = (r1 * r1 - a * a).max(0.0).sqrt();

    let base = Point::new(c1.center.x + a * dx / d, c1.center.y + a * dy / d);
    let first = Point::new(base.x + h * dy / d, base.y - h * dx / d);
    let second = Point::new(base.x - h * dy / d, base.y + h * dx / d);
    Some((first, second))
}

/// One side of the lens: an arc of one circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensArc {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    /// Signed angular extent; the sign gives the direction of travel.
    pub sweep: f64,
}

impl LensArc {
    /// Build the arc of `circle` from `from` to `to` (both on the circle)
    /// that bulges toward `toward`.
    fn toward(circle: &Circle, from: Point, to: Point, toward: Point) -> Self {
        let start = circle.center.angle_to(from);
        let end = circle.center.angle_to(to);
        let facing = circle.center.angle_to(toward);

        let mut sweep = normalize_angle(end - start);
        let mid = lerp_angle(start, end, 0.5);
        if normalize_angle(facing - mid).abs() > FRAC_PI_2 {
            // The short way faces away: go round the long way instead.
            sweep -= sweep.signum() * TAU;
        }

        Self { center: circle.center, radius: circle.radius(), start_angle: start, sweep }
    }

    #[inline]
    pub fn angle_at(&self, t: f64) -> f64 {
        self.start_angle + self.sweep * t
    }

    #[inline]
    pub fn point_at(&self, t: f64) -> Point {
        self.center.offset(self.angle_at(t), self.radius)
    }

    /// `segments + 1` points from start to end.
    pub fn sample(&self, segments: usize) -> impl Iterator<Item = Point> + '_ {
        let n = segments.max(1);
        (0..=n).map(move |i| self.point_at(i as f64 / n as f64))
    }
}

/// A resolved lens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lens {
    /// `(first, second)` as returned by [`circle_intersections`].
    pub intersections: (Point, Point),
    /// Circle 1's arc (first → second), then circle 2's (second → first).
    pub arcs: [LensArc; 2],
}

impl Lens {
    /// Resolve the lens of two circles, `None` if they don't properly
    /// overlap.
    pub fn resolve(c1: &Circle, c2: &Circle) -> Option<Lens> {
        let (first, second) = circle_intersections(c1, c2)?;
        let arcs = [
            LensArc::toward(c1, first, second, c2.center),
            LensArc::toward(c2, second, first, c1.center),
        ];
        Some(Lens { intersections: (first, second), arcs })
    }

    /// Closed outline, `segments + 1` samples per arc.
    ///
    /// The joints appear twice (once at the end of one arc and once at the
    /// start of the next); fills don't care.
    pub fn outline(&self, segments: usize) -> Vec<Point> {
        let [a, b] = &self.arcs;
        a.sample(segments).chain(b.sample(segments)).collect()
    }
}

/// Lens outline with [`LENS_ARC_SEGMENTS`] per arc, or `None` when the
/// circles don't properly overlap.
pub fn lens_outline(c1: &Circle, c2: &Circle) -> Option<Vec<Point>> {
    Lens::resolve(c1, c2).map(|lens| lens.outline(LENS_ARC_SEGMENTS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::signed_area_of_points;
    use proptest::prelude::*;

    fn circle(x: f64, y: f64, r: f64) -> Circle {
        Circle::new(Point::new(x, y), r).unwrap()
    }

    /// Area of the intersection of two circles at distance `d`.
    fn analytic_lens_area(r1: f64, r2: f64, d: f64) -> f64 {
        let alpha = ((d * d + r1 * r1 - r2 * r2) / (2.0 * d * r1)).acos();
        let beta = ((d * d + r2 * r2 - r1 * r1) / (2.0 * d * r2)).acos();
        let k = ((-d + r1 + r2) * (d + r1 - r2) * (d - r1 + r2) * (d + r1 + r2)).sqrt();
        r1 * r1 * alpha + r2 * r2 * beta - 0.5 * k
    }

    fn inside(p: Point, c: &Circle) -> bool {
        p.distance(c.center) <= c.radius() * (1.0 + 1e-9) + 1e-9
    }

    #[test]
    fn normalize_wraps() {
        assert!((normalize_angle(1.5 * PI) - -FRAC_PI_2).abs() < 1e-12);
        assert!((normalize_angle(-FRAC_PI_2) - -FRAC_PI_2).abs() < 1e-12);
        assert!((normalize_angle(TAU + 0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn lerp_angle_takes_short_way() {
        let mid = lerp_angle(PI - 0.1, -PI + 0.1, 0.5);
        assert!((normalize_angle(mid) - -PI).abs() < 1e-9 || (normalize_angle(mid) - PI).abs() < 1e-9);
    }

    #[test]
    fn disjoint_circles_have_no_lens() {
        assert!(lens_outline(&circle(0.0, 0.0, 5.0), &circle(11.0, 0.0, 5.0)).is_none());
    }

    #[test]
    fn tangent_circles_have_no_lens() {
        assert!(circle_intersections(&circle(0.0, 0.0, 5.0), &circle(10.0, 0.0, 5.0)).is_none());
        assert!(circle_intersections(&circle(0.0, 0.0, 5.0), &circle(2.0, 0.0, 3.0)).is_none());
    }

    #[test]
    fn nested_circles_have_no_lens() {
        assert!(lens_outline(&circle(0.0, 0.0, 10.0), &circle(1.0, 1.0, 2.0)).is_none());
        assert!(lens_outline(&circle(3.0, 3.0, 4.0), &circle(3.0, 3.0, 4.0)).is_none());
    }

    #[test]
    fn equal_circles_meet_on_bisector() {
        let (c1, c2) = (circle(0.0, 0.0, 5.0), circle(6.0, 0.0, 5.0));
        let (p, q) = circle_intersections(&c1, &c2).unwrap();
        assert!((p.x - 3.0).abs() < 1e-12 && (q.x - 3.0).abs() < 1e-12);
        assert!((p.y.abs() - 4.0).abs() < 1e-12 && (q.y.abs() - 4.0).abs() < 1e-12);
        assert!(p.y * q.y < 0.0);
    }

    #[test]
    fn symmetric_lens_outline() {
        let (c1, c2) = (circle(0.0, 0.0, 5.0), circle(6.0, 0.0, 5.0));
        let outline = lens_outline(&c1, &c2).unwrap();
        assert_eq!(outline.len(), 2 * (LENS_ARC_SEGMENTS + 1));

        for (k, p) in outline.iter().enumerate() {
            let on_c1 = (p.distance(c1.center) - 5.0).abs() < 1e-9;
            let on_c2 = (p.distance(c2.center) - 5.0).abs() < 1e-9;
            assert!(on_c1 || on_c2, "vertex {} {:?} on neither circle", k, p);
        }

        let n = outline.len() as f64;
        let cx = outline.iter().map(|p| p.x).sum::<f64>() / n;
        assert!(cx > 0.0 && cx < 6.0);
        assert!((cx - 3.0).abs() < 1e-9);

        let area = signed_area_of_points(&outline).abs();
        let expected = analytic_lens_area(5.0, 5.0, 6.0);
        assert!((area - expected).abs() / expected < 0.01, "area {} vs {}", area, expected);
    }

    #[test]
    fn major_arc_lens() {
        // The chord sits behind c1, so c1's share of the outline is more
        // than half its circumference.
        let (c1, c2) = (circle(0.0, 0.0, 3.0), circle(2.0, 0.0, 4.0));
        let lens = Lens::resolve(&c1, &c2).unwrap();
        assert!(lens.arcs[0].sweep.abs() > PI);
        assert!(lens.arcs[1].sweep.abs() < PI);

        let outline = lens.outline(LENS_ARC_SEGMENTS);
        assert!(outline.iter().all(|p| inside(*p, &c1) && inside(*p, &c2)));

        let area = signed_area_of_points(&outline).abs();
        let expected = analytic_lens_area(3.0, 4.0, 2.0);
        assert!((area - expected).abs() / expected < 0.01, "area {} vs {}", area, expected);
    }

    #[test]
    fn arcs_join_at_intersections() {
        let (c1, c2) = (circle(10.0, 20.0, 30.0), circle(40.0, 35.0, 22.0));
        let lens = Lens::resolve(&c1, &c2).unwrap();
        let (first, second) = lens.intersections;
        let [a, b] = lens.arcs;

        assert!(a.point_at(0.0).distance(first) < 1e-9);
        assert!(a.point_at(1.0).distance(second) < 1e-9);
        assert!(b.point_at(0.0).distance(second) < 1e-9);
        assert!(b.point_at(1.0).distance(first) < 1e-9);
    }

    proptest! {
        #[test]
        fn outline_lies_inside_both_disks(
            r1 in 1.0f64..200.0,
            r2 in 1.0f64..200.0,
            t in 0.01f64..0.99,
            dir in 0.0f64..TAU,
            cx in -300.0f64..300.0,
            cy in -300.0f64..300.0,
        ) {
            let lo = (r1 - r2).abs();
            let hi = r1 + r2;
            let d = lo + t * (hi - lo);
            let c1 = circle(cx, cy, r1);
            let c2 = Circle::new(c1.center.offset(dir, d), r2).unwrap();

            let outline = lens_outline(&c1, &c2);
            prop_assert!(outline.is_some());
            let tol = 1e-7 * r1.max(r2);
            for p in outline.unwrap() {
                prop_assert!(p.distance(c1.center) <= r1 + tol);
                prop_assert!(p.distance(c2.center) <= r2 + tol);
            }
        }
    }
}
