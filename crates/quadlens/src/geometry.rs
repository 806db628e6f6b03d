//! Core geometry types for quadlens.
//!
//! Everything lives in canvas space: origin at the top-left corner,
//! Y growing downward, all coordinates `f64`.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! `#[derive(Debug, Clone, Copy, PartialEq)]` asks the compiler to write the
//! boring impls for us. Small value types like `Point` get `Copy` so they
//! can be passed around freely without `.clone()` noise.

use crate::error::GeometryError;
use crate::intersect::point_in_polygon;

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// An oriented line segment from `p1` to `p2`.
///
/// Segments built from the canvas boundary have both endpoints on the
/// perimeter (within [`crate::edges::EDGE_TOLERANCE`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

/// The drawing rectangle. The origin is always (0, 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    width: f64,
    height: f64,
}

/// One of the four canvas corners, in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// A circle. The radius is always positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    radius: f64,
}

/// A simple polygon given by its ordered vertices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation towards `other` (t = 0 is self, t = 1 is other).
    #[inline]
    pub fn lerp(&self, other: Point, t: f64) -> Point {
        Point::new(
            self.x + t * (other.x - self.x),
            self.y + t * (other.y - self.y),
        )
    }

    /// Angle of the direction from self to `other`, in radians.
    #[inline]
    pub fn angle_to(&self, other: Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// The point `distance` away from self in direction `angle`.
    #[inline]
    pub fn offset(&self, angle: f64, distance: f64) -> Point {
        Point::new(
            self.x + angle.cos() * distance,
            self.y + angle.sin() * distance,
        )
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Segment {
    #[inline]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Point at parameter `t` along the segment (0 = p1, 1 = p2).
    #[inline]
    pub fn point_at(&self, t: f64) -> Point {
        self.p1.lerp(self.p2, t)
    }

    /// Direction angle from p1 to p2.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.p1.angle_to(self.p2)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.p1.distance(self.p2)
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        self.point_at(0.5)
    }

    #[inline]
    pub fn endpoints(&self) -> [Point; 2] {
        [self.p1, self.p2]
    }
}

impl Canvas {
    /// Create a canvas, rejecting empty or non-finite dimensions.
    pub fn new(width: f64, height: f64) -> Result<Self, GeometryError> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(GeometryError::InvalidCanvas { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Position of a corner on this canvas.
    pub fn corner(&self, corner: Corner) -> Point {
        match corner {
            Corner::TopLeft => Point::new(0.0, 0.0),
            Corner::TopRight => Point::new(self.width, 0.0),
            Corner::BottomRight => Point::new(self.width, self.height),
            Corner::BottomLeft => Point::new(0.0, self.height),
        }
    }

    /// True when the point lies strictly inside (not on the boundary).
    pub fn contains_strictly(&self, p: Point) -> bool {
        p.x > 0.0 && p.x < self.width && p.y > 0.0 && p.y < self.height
    }

    /// The canvas outline as a polygon, corners in drawing order.
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(Corner::ALL.iter().map(|&c| self.corner(c)).collect())
    }
}

impl Default for Canvas {
    /// The 600x600 reference canvas.
    fn default() -> Self {
        Self { width: 600.0, height: 600.0 }
    }
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// Position of this corner in [`Corner::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 1,
            Corner::BottomRight => 2,
            Corner::BottomLeft => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomRight => "bottom-right",
            Corner::BottomLeft => "bottom-left",
        }
    }
}

impl Circle {
    /// Create a circle; the radius must be finite and positive.
    pub fn new(center: Point, radius: f64) -> Result<Self, GeometryError> {
        if !radius.is_finite() || radius <= 0.0 || !center.is_finite() {
            return Err(GeometryError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Point on the circle at `angle`.
    #[inline]
    pub fn point_at(&self, angle: f64) -> Point {
        self.center.offset(angle, self.radius)
    }
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Get the bounding box as (min_x, min_y, max_x, max_y).
    ///
    /// ## Rust Lesson #6: Option<T>
    ///
    /// An empty polygon has no bounding box, so we say so in the type
    /// instead of returning a made-up rectangle.
    pub fn bounding_box(&self) -> Option<(f64, f64, f64, f64)> {
        if self.vertices.is_empty() {
            return None;
        }

        let min_x = self.vertices.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let min_y = self.vertices.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_x = self.vertices.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let max_y = self.vertices.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

        Some((min_x, min_y, max_x, max_y))
    }

    /// Center of the bounding box.
    #[inline]
    pub fn center(&self) -> Option<Point> {
        self.bounding_box().map(|(min_x, min_y, max_x, max_y)| {
            Point::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0)
        })
    }

    /// Ray-casting membership, see [`point_in_polygon`].
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        point_in_polygon(p, &self.vertices)
    }

    /// Signed area (shoelace). Positive for counter-clockwise winding in
    /// a Y-up frame, which is clockwise on screen.
    pub fn signed_area(&self) -> f64 {
        signed_area_of_points(&self.vertices)
    }

    /// Unsigned area.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Arithmetic mean of the vertices.
    pub fn vertex_centroid(&self) -> Option<Point> {
        if self.vertices.is_empty() {
            return None;
        }
        let n = self.vertices.len() as f64;
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Some(Point::new(sx / n, sy / n))
    }
}

/// Calculate signed area of a point sequence using the shoelace formula.
pub fn signed_area_of_points(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += points[i].x * points[j].y;
        area -= points[j].x * points[i].y;
    }
    area / 2.0
}
