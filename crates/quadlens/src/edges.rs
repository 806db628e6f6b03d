//! Canvas edges: classifying boundary points and finding where a line
//! leaves the canvas.

use crate::error::GeometryError;
use crate::geometry::{Canvas, Point, Segment};

/// How close (in canvas units) a point must be to an edge to sit on it.
pub const EDGE_TOLERANCE: f64 = 0.1;

/// Direction components smaller than this are treated as zero, so a
/// near-vertical line never divides by a near-zero `cos`.
pub const AXIS_EPSILON: f64 = 1e-3;

/// Which canvas edge a boundary point lies on.
///
/// ## Rust Lesson #10: Enums (Sum Types)
///
/// `Unknown` is an explicit variant rather than a `None` because callers
/// compare labels pairwise; it must never be treated as a real edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeLabel {
    Top,
    Bottom,
    Left,
    Right,
    /// A corner (two edges within tolerance) or a point off the boundary.
    Unknown,
}

impl EdgeLabel {
    /// True for the four real edges.
    pub fn is_known(&self) -> bool {
        !matches!(self, EdgeLabel::Unknown)
    }

    /// The edge across the canvas.
    pub fn opposite(&self) -> Option<EdgeLabel> {
        match self {
            EdgeLabel::Top => Some(EdgeLabel::Bottom),
            EdgeLabel::Bottom => Some(EdgeLabel::Top),
            EdgeLabel::Left => Some(EdgeLabel::Right),
            EdgeLabel::Right => Some(EdgeLabel::Left),
            EdgeLabel::Unknown => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EdgeLabel::Top => "top",
            EdgeLabel::Bottom => "bottom",
            EdgeLabel::Left => "left",
            EdgeLabel::Right => "right",
            EdgeLabel::Unknown => "unknown",
        }
    }
}

/// Classify a boundary point by the edge it lies on.
///
/// Edges are checked in the order top, bottom, left, right. A single match
/// within [`EDGE_TOLERANCE`] is the answer; no match (off the boundary) or
/// several matches (a corner) give [`EdgeLabel::Unknown`].
pub fn classify_edge(p: Point, canvas: &Canvas) -> EdgeLabel {
    let checks = [
        (EdgeLabel::Top, p.y.abs()),
        (EdgeLabel::Bottom, (p.y - canvas.height()).abs()),
        (EdgeLabel::Left, p.x.abs()),
        (EdgeLabel::Right, (p.x - canvas.width()).abs()),
    ];

    let mut found = EdgeLabel::Unknown;
    for (label, distance) in checks {
        if distance < EDGE_TOLERANCE {
            if found.is_known() {
                return EdgeLabel::Unknown;
            }
            found = label;
        }
    }
    found
}

/// Edge labels of a segment's two endpoints.
pub fn segment_edges(segment: &Segment, canvas: &Canvas) -> [EdgeLabel; 2] {
    [classify_edge(segment.p1, canvas), classify_edge(segment.p2, canvas)]
}

/// True if the segment runs top↔bottom or left↔right (either direction).
pub fn connects_opposite_edges(segment: &Segment, canvas: &Canvas) -> bool {
    let [e1, e2] = segment_edges(segment, canvas);
    e1.opposite() == Some(e2)
}

/// True if the two segments end on any common edge.
///
/// `Unknown` endpoints are ignored: a failed classification is not an edge.
pub fn connects_same_edges(a: &Segment, b: &Segment, canvas: &Canvas) -> bool {
    let edges_a = segment_edges(a, canvas);
    let edges_b = segment_edges(b, canvas);

    edges_a
        .iter()
        .filter(|e| e.is_known())
        .any(|e| edges_b.contains(e))
}

/// Where the infinite line through `origin` at `angle` leaves the canvas.
///
/// Each of the four boundary lines is intersected with the line
/// `origin + t·(cos, sin)`; hits whose other coordinate falls outside the
/// canvas are dropped. The returned segment runs from the hit with the
/// smallest `t` to the one with the largest, so for an interior origin the
/// origin lies between its endpoints.
///
/// Fewer than two hits can only happen for an origin outside (or exactly on
/// the corner of) the canvas and is reported as
/// [`GeometryError::TooFewCrossings`].
pub fn edge_intersections(origin: Point, angle: f64, canvas: &Canvas) -> Result<Segment, GeometryError> {
    let dx = angle.cos();
    let dy = angle.sin();
    let (w, h) = (canvas.width(), canvas.height());

    // (point, t) candidates; at most four
    let mut hits: Vec<(Point, f64)> = Vec::with_capacity(4);

    if dx.abs() > AXIS_EPSILON {
        for x in [0.0, w] {
            let t = (x - origin.x) / dx;
            let y = origin.y + t * dy;
            if (0.0..=h).contains(&y) {
                hits.push((Point::new(x, y), t));
            }
        }
    }

    if dy.abs() > AXIS_EPSILON {
        for y in [0.0, h] {
            let t = (y - origin.y) / dy;
            let x = origin.x + t * dx;
            if (0.0..=w).contains(&x) {
                hits.push((Point::new(x, y), t));
            }
        }
    }

    if hits.len() < 2 {
        return Err(GeometryError::TooFewCrossings {
            found: hits.len(),
            origin_x: origin.x,
            origin_y: origin.y,
        });
    }

    hits.sort_by(|a, b| a.1.total_cmp(&b.1));

    let first = hits[0].0;
    let last = hits[hits.len() - 1].0;
    Ok(Segment::new(first, last))
}
