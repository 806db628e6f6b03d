//! Splitting the canvas into four corner regions with two perpendicular
//! lines.
//!
//! The first line is built to run between opposite edges. The second is
//! searched for: it goes through a random point of the first line at a
//! right angle, and must also run between opposite edges without touching
//! either edge the first line uses. Where they cross is the composition's
//! "heart"; every region is a corner, its two nearest line endpoints, and
//! the heart.

use std::f64::consts::FRAC_PI_2;

use log::{debug, warn};

use crate::edges::{EDGE_TOLERANCE, connects_opposite_edges, connects_same_edges, edge_intersections};
use crate::error::GeometryError;
use crate::geometry::{Canvas, Corner, Point, Polygon, Segment};
use crate::intersect::line_intersection;
use crate::rng::RandomSource;

/// Attempts the line-pair search makes before settling.
pub const MAX_PAIR_ATTEMPTS: usize = 100;

/// Which pair of edges the first line connects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOrientation {
    /// Top edge to bottom edge.
    Vertical,
    /// Left edge to right edge.
    Horizontal,
}

/// Tuning for [`build_perpendicular_lines_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct LinePairConfig {
    /// Line 1 crosses each edge within `[dim * inset, dim * (1 - inset)]`.
    pub inset_fraction: f64,
    /// Where on line 1 the perpendicular is anchored, as a parameter range.
    pub t_range: (f64, f64),
    pub max_attempts: usize,
    /// Force line 1's orientation instead of a coin flip.
    pub orientation: Option<LineOrientation>,
}

impl Default for LinePairConfig {
    fn default() -> Self {
        Self {
            // 100px on the 600px reference canvas
            inset_fraction: 1.0 / 6.0,
            t_range: (0.2, 0.8),
            max_attempts: MAX_PAIR_ATTEMPTS,
            orientation: None,
        }
    }
}

/// The two partition lines.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePair {
    pub line1: Segment,
    pub line2: Segment,
    /// Direction of line 1, in radians. Line 2 runs at `angle1 + π/2`.
    pub angle1: f64,
    /// Candidates tried for line 2.
    pub attempts: usize,
    /// Set when no candidate satisfied the edge constraints and the last one
    /// was kept anyway. Line 2 may then end on adjacent or shared edges.
    pub degraded: bool,
}

impl LinePair {
    pub fn angle2(&self) -> f64 {
        self.angle1 + FRAC_PI_2
    }
}

/// A canvas corner and the quadrilateral anchored on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub corner: Corner,
    /// `[corner, nearest endpoint, intersection, second endpoint]`
    pub polygon: Polygon,
}

/// Output of [`partition_into_corners`].
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    pub intersection: Point,
    /// Between zero and four regions, in corner order.
    pub regions: Vec<Region>,
}

/// A full partition of the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub canvas: Canvas,
    pub lines: LinePair,
    /// Where the two lines cross (the heart).
    pub intersection: Point,
    pub regions: Vec<Region>,
}

/// Build two perpendicular lines with the default configuration.
pub fn build_perpendicular_lines<R: RandomSource + ?Sized>(
    canvas: &Canvas,
    rng: &mut R,
) -> Result<LinePair, GeometryError> {
    build_perpendicular_lines_with(canvas, &LinePairConfig::default(), rng)
}

/// Build two perpendicular lines.
///
/// Line 1 connects two opposite edges by construction. Line 2 is retried
/// up to `config.max_attempts` times; if none passes, the last candidate is
/// returned with `degraded` set rather than failing.
pub fn build_perpendicular_lines_with<R: RandomSource + ?Sized>(
    canvas: &Canvas,
    config: &LinePairConfig,
    rng: &mut R,
) -> Result<LinePair, GeometryError> {
    let (t_lo, t_hi) = config.t_range;
    if !(t_lo.is_finite() && t_hi.is_finite()) || t_lo > t_hi || t_lo <= 0.0 || t_hi >= 1.0 {
        return Err(GeometryError::InvalidRange { name: "anchor", lo: t_lo, hi: t_hi });
    }
    let inset = config.inset_fraction;
    if !inset.is_finite() || !(0.0..0.5).contains(&inset) {
        return Err(GeometryError::InvalidRange { name: "inset", lo: inset, hi: 1.0 - inset });
    }

    let orientation = config.orientation.unwrap_or_else(|| {
        if rng.chance(0.5) {
            LineOrientation::Vertical
        } else {
            LineOrientation::Horizontal
        }
    });

    let (w, h) = (canvas.width(), canvas.height());
    let line1 = match orientation {
        LineOrientation::Vertical => {
            let x1 = rng.uniform(w * inset, w * (1.0 - inset));
            let x2 = rng.uniform(w * inset, w * (1.0 - inset));
            Segment::new(Point::new(x1, 0.0), Point::new(x2, h))
        }
        LineOrientation::Horizontal => {
            let y1 = rng.uniform(h * inset, h * (1.0 - inset));
            let y2 = rng.uniform(h * inset, h * (1.0 - inset));
            Segment::new(Point::new(0.0, y1), Point::new(w, y2))
        }
    };

    let angle1 = line1.angle();
    let angle2 = angle1 + FRAC_PI_2;

    // ## Rust Lesson #17: Loops that produce values
    //
    // `line2` is always assigned inside the loop before we read it, but the
    // compiler can't prove the loop runs, so we seed it with line 1.
    let mut line2 = line1;
    let mut attempts = 0;
    let mut found = false;

    while attempts < config.max_attempts.max(1) {
        attempts += 1;
        let anchor = line1.point_at(rng.uniform(t_lo, t_hi));
        line2 = edge_intersections(anchor, angle2, canvas)?;

        if connects_opposite_edges(&line2, canvas) && !connects_same_edges(&line1, &line2, canvas) {
            found = true;
            break;
        }
    }

    if found {
        debug!("line pair found after {} attempt(s)", attempts);
    } else {
        warn!(
            "no perpendicular line connected free opposite edges in {} attempts; using last candidate",
            attempts
        );
    }

    Ok(LinePair { line1, line2, angle1, attempts, degraded: !found })
}

/// Split the canvas into corner regions.
///
/// The lines' intersection comes from the determinant formula, falling back
/// to the canvas center for (nearly) parallel lines. For each corner, the
/// line endpoints lying on one of the corner's two edges are sorted by
/// distance and the nearest two kept. A corner with fewer than two such
/// endpoints gets no region.
pub fn partition_into_corners(line1: &Segment, line2: &Segment, canvas: &Canvas) -> Partition {
    let intersection = line_intersection(line1, line2).unwrap_or_else(|| canvas.center());

    let endpoints = [line1.p1, line1.p2, line2.p1, line2.p2];

    let regions = Corner::ALL
        .iter()
        .filter_map(|&corner| {
            let corner_pt = canvas.corner(corner);
            let [near1, near2] = nearest_edge_points(corner_pt, &endpoints)?;
            Some(Region {
                corner,
                polygon: Polygon::new(vec![corner_pt, near1, intersection, near2]),
            })
        })
        .collect();

    Partition { intersection, regions }
}

/// The two endpoints closest to `corner` among those on its edges.
fn nearest_edge_points(corner: Point, endpoints: &[Point]) -> Option<[Point; 2]> {
    let mut shared: Vec<Point> = endpoints
        .iter()
        .copied()
        .filter(|p| (p.x - corner.x).abs() < EDGE_TOLERANCE || (p.y - corner.y).abs() < EDGE_TOLERANCE)
        .collect();

    shared.sort_by(|a, b| a.distance(corner).total_cmp(&b.distance(corner)));

    match shared.as_slice() {
        [first, second, ..] => Some([*first, *second]),
        _ => None,
    }
}

/// Build the lines and the regions in one go.
pub fn build_composition<R: RandomSource + ?Sized>(
    canvas: Canvas,
    rng: &mut R,
) -> Result<Composition, GeometryError> {
    build_composition_with(canvas, &LinePairConfig::default(), rng)
}

/// [`build_composition`] with explicit line-pair tuning.
pub fn build_composition_with<R: RandomSource + ?Sized>(
    canvas: Canvas,
    config: &LinePairConfig,
    rng: &mut R,
) -> Result<Composition, GeometryError> {
    let lines = build_perpendicular_lines_with(&canvas, config, rng)?;
    let Partition { intersection, regions } = partition_into_corners(&lines.line1, &lines.line2, &canvas);

    if regions.len() < Corner::ALL.len() {
        debug!("partition produced {} region(s)", regions.len());
    }

    Ok(Composition { canvas, lines, intersection, regions })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::{EdgeLabel, classify_edge};
    use crate::rng::Rng;

    fn canvas() -> Canvas {
        Canvas::new(600.0, 600.0).unwrap()
    }

    #[test]
    fn line1_spans_opposite_edges() {
        let c = canvas();
        for seed in 0..200 {
            let mut rng = Rng::new(seed);
            let pair = build_perpendicular_lines(&c, &mut rng).unwrap();
            assert!(connects_opposite_edges(&pair.line1, &c), "seed {}", seed);
        }
    }

    #[test]
    fn line1_crossings_stay_inset() {
        let c = canvas();
        for seed in 0..200 {
            let mut rng = Rng::new(seed);
            let pair = build_perpendicular_lines(&c, &mut rng).unwrap();
            for p in pair.line1.endpoints() {
                let along = match classify_edge(p, &c) {
                    EdgeLabel::Top | EdgeLabel::Bottom => p.x,
                    EdgeLabel::Left | EdgeLabel::Right => p.y,
                    EdgeLabel::Unknown => panic!("line 1 endpoint {:?} not on an edge", p),
                };
                assert!((100.0..=500.0).contains(&along), "seed {}: {:?}", seed, p);
            }
        }
    }

    #[test]
    fn lines_are_perpendicular() {
        let c = canvas();
        for seed in 0..100 {
            let mut rng = Rng::new(seed);
            let pair = build_perpendicular_lines(&c, &mut rng).unwrap();
            let d1 = (pair.line1.p2.x - pair.line1.p1.x, pair.line1.p2.y - pair.line1.p1.y);
            let d2 = (pair.line2.p2.x - pair.line2.p1.x, pair.line2.p2.y - pair.line2.p1.y);
            let cos = (d1.0 * d2.0 + d1.1 * d2.1) / (pair.line1.length() * pair.line2.length());
            assert!(cos.abs() < 1e-9, "seed {}: cos = {}", seed, cos);
        }
    }

    #[test]
    fn line2_almost_always_valid() {
        let c = canvas();
        let trials = 1000;
        let mut valid = 0;
        for seed in 0..trials {
            let mut rng = Rng::new(seed);
            let pair = build_perpendicular_lines(&c, &mut rng).unwrap();
            if connects_opposite_edges(&pair.line2, &c) {
                valid += 1;
                assert!(!connects_same_edges(&pair.line1, &pair.line2, &c) || pair.degraded);
            }
        }
        assert!(valid * 100 >= trials * 99, "only {}/{} valid", valid, trials);
    }

    #[test]
    fn degraded_pair_is_flagged_not_fatal() {
        // A vertical line 1 on a 1px-tall strip is nearly horizontal, so
        // every perpendicular runs top→bottom again: no candidate can pass.
        let c = Canvas::new(1000.0, 1.0).unwrap();
        let config = LinePairConfig {
            orientation: Some(LineOrientation::Vertical),
            ..LinePairConfig::default()
        };
        let mut rng = Rng::new(3);
        let pair = build_perpendicular_lines_with(&c, &config, &mut rng).unwrap();

        assert!(pair.degraded);
        assert_eq!(pair.attempts, MAX_PAIR_ATTEMPTS);
        assert!(connects_same_edges(&pair.line1, &pair.line2, &c));

        let partition = partition_into_corners(&pair.line1, &pair.line2, &c);
        assert!(partition.regions.len() <= 4);
        for region in &partition.regions {
            assert_eq!(region.polygon.len(), 4);
        }
    }

    #[test]
    fn forced_horizontal_on_strip_succeeds() {
        let c = Canvas::new(1000.0, 1.0).unwrap();
        let config = LinePairConfig {
            orientation: Some(LineOrientation::Horizontal),
            ..LinePairConfig::default()
        };
        let mut rng = Rng::new(3);
        let pair = build_perpendicular_lines_with(&c, &config, &mut rng).unwrap();
        assert!(!pair.degraded);
        assert!(connects_opposite_edges(&pair.line2, &c));
    }

    #[test]
    fn bad_config_is_rejected() {
        let c = canvas();
        let mut rng = Rng::new(1);
        let config = LinePairConfig { t_range: (0.9, 0.1), ..LinePairConfig::default() };
        assert!(build_perpendicular_lines_with(&c, &config, &mut rng).is_err());
        let config = LinePairConfig { inset_fraction: 0.7, ..LinePairConfig::default() };
        assert!(build_perpendicular_lines_with(&c, &config, &mut rng).is_err());
    }

    #[test]
    fn cross_partition_has_four_quadrilaterals() {
        let c = canvas();
        let line1 = Segment::new(Point::new(300.0, 0.0), Point::new(300.0, 600.0));
        let line2 = Segment::new(Point::new(0.0, 200.0), Point::new(600.0, 200.0));
        let partition = partition_into_corners(&line1, &line2, &c);

        assert!(partition.intersection.distance(Point::new(300.0, 200.0)) < 1e-9);
        assert_eq!(partition.regions.len(), 4);

        let top_left = &partition.regions[0];
        assert_eq!(top_left.corner, Corner::TopLeft);
        let expected = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 200.0),
            Point::new(300.0, 200.0),
            Point::new(300.0, 0.0),
        ];
        assert_eq!(top_left.polygon.len(), 4);
        for (got, want) in top_left.polygon.vertices.iter().zip(expected) {
            assert!(got.distance(want) < 1e-9, "{:?} != {:?}", got, want);
        }

        // The four regions tile the canvas
        let total: f64 = partition.regions.iter().map(|r| r.polygon.area()).sum();
        assert!((total - 600.0 * 600.0).abs() < 1e-6);
    }

    #[test]
    fn corner_without_two_endpoints_is_omitted() {
        let c = Canvas::new(100.0, 100.0).unwrap();
        // Line 2 runs top→right, leaving the bottom-left corner a single
        // endpoint on its edges.
        let line1 = Segment::new(Point::new(0.0, 50.0), Point::new(100.0, 50.0));
        let line2 = Segment::new(Point::new(50.0, 0.0), Point::new(100.0, 25.0));
        let partition = partition_into_corners(&line1, &line2, &c);

        assert_eq!(partition.regions.len(), 3);
        assert!(partition.regions.iter().all(|r| r.corner != Corner::BottomLeft));
    }

    #[test]
    fn parallel_lines_fall_back_to_center() {
        let c = canvas();
        let line1 = Segment::new(Point::new(0.0, 100.0), Point::new(600.0, 100.0));
        let line2 = Segment::new(Point::new(0.0, 400.0), Point::new(600.0, 400.0));
        let partition = partition_into_corners(&line1, &line2, &c);
        assert_eq!(partition.intersection, c.center());
    }

    #[test]
    fn random_compositions_tile_the_canvas() {
        let c = canvas();
        for seed in 0..200 {
            let mut rng = Rng::new(seed);
            let comp = build_composition(c, &mut rng).unwrap();
            if comp.lines.degraded {
                continue;
            }
            assert_eq!(comp.regions.len(), 4, "seed {}", seed);
            assert!(c.contains_strictly(comp.intersection), "seed {}", seed);
            let total: f64 = comp.regions.iter().map(|r| r.polygon.area()).sum();
            assert!((total - 360_000.0).abs() < 1e-3, "seed {}: area {}", seed, total);
        }
    }

    #[test]
    fn composition_is_deterministic() {
        let c = canvas();
        let a = build_composition(c, &mut Rng::new(99)).unwrap();
        let b = build_composition(c, &mut Rng::new(99)).unwrap();
        assert_eq!(a, b);
    }
}
