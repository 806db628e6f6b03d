//! Sketchy/hand-drawn fills.
//!
//! [`SketchyRenderer`] wraps another back-end and redraws every shape as a
//! few slightly different polygons, RoughJS style:
//! - vertex randomization (roughness)
//! - edge bowing (a displaced midpoint per edge)
//! - multiple passes
//!
//! Circles are stamped as flattened polygons so they wobble too.
//!
//! # Example
//! ```
//! use quadlens::geometry::{Canvas, Point};
//! use quadlens::palette::Color;
//! use quadlens::render::Renderer;
//! use quadlens::sketchy::{SketchyConfig, SketchyRenderer};
//! use quadlens::svg::SvgRenderer;
//!
//! let canvas = Canvas::new(100.0, 100.0).unwrap();
//! let config = SketchyConfig::default().with_passes(3).with_seed(7);
//! let mut brush = SketchyRenderer::new(SvgRenderer::new(&canvas), config);
//! brush.fill_polygon(
//!     &[Point::new(10.0, 10.0), Point::new(90.0, 10.0), Point::new(50.0, 80.0)],
//!     Color::rgb(0, 0, 0),
//! );
//! assert_eq!(brush.into_inner().len(), 3);
//! ```

use crate::geometry::{Canvas, Circle, Point};
use crate::palette::Color;
use crate::render::{Renderer, flatten_circle};
use crate::rng::Rng;

/// Circles are flattened coarser than the plain renderer does; the jitter
/// hides the facets.
const SKETCH_CIRCLE_TOLERANCE: f64 = 0.5;

/// Configuration for the sketchy effect.
#[derive(Clone, Debug, PartialEq)]
pub struct SketchyConfig {
    /// Vertex jitter (0.0 = clean, 1.0+ = rough)
    pub roughness: f64,
    /// Maximum perpendicular offset of each edge's midpoint
    pub bowing: f64,
    /// How many times each shape is drawn
    pub passes: usize,
    pub seed: u64,
}

impl Default for SketchyConfig {
    fn default() -> Self {
        Self {
            roughness: 1.0,
            bowing: 1.0,
            passes: 2,
            seed: 0,
        }
    }
}

impl SketchyConfig {
    pub fn with_roughness(mut self, roughness: f64) -> Self {
        self.roughness = roughness;
        self
    }

    pub fn with_bowing(mut self, bowing: f64) -> Self {
        self.bowing = bowing;
        self
    }

    pub fn with_passes(mut self, passes: usize) -> Self {
        self.passes = passes;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Brush back-end: forwards jittered polygons to an inner renderer.
#[derive(Debug)]
pub struct SketchyRenderer<R: Renderer> {
    inner: R,
    config: SketchyConfig,
    rng: Rng,
}

impl<R: Renderer> SketchyRenderer<R> {
    pub fn new(inner: R, config: SketchyConfig) -> Self {
        let rng = Rng::new(config.seed);
        Self { inner, config, rng }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

/// One jittered copy of a closed outline.
///
/// Every edge gets a bowed midpoint, so the result has twice as many
/// vertices as the input.
pub fn sketchify_polygon(vertices: &[Point], config: &SketchyConfig, rng: &mut Rng) -> Vec<Point> {
    let n = vertices.len();
    let mut out = Vec::with_capacity(n * 2);

    // Jitter every vertex once so shared corners stay shared
    let jittered: Vec<Point> = vertices
        .iter()
        .map(|p| {
            Point::new(
                p.x + config.roughness * rng.next_signed(),
                p.y + config.roughness * rng.next_signed(),
            )
        })
        .collect();

    for i in 0..n {
        let a = jittered[i];
        let b = jittered[(i + 1) % n];
        out.push(a);

        let (dx, dy) = (b.x - a.x, b.y - a.y);
        let length = (dx * dx + dy * dy).sqrt();
        if length < 0.001 {
            continue;
        }

        // Longer edges bow less per unit length
        let dampen = 1.0 / (length / 50.0 + 1.0);
        let bow = config.bowing * rng.next_signed() * dampen;
        let mid = a.lerp(b, 0.5);
        out.push(Point::new(mid.x - dy / length * bow, mid.y + dx / length * bow));
    }

    out
}

impl<R: Renderer> Renderer for SketchyRenderer<R> {
    fn fill_polygon(&mut self, vertices: &[Point], color: Color) {
        if vertices.len() < 3 {
            return;
        }
        for _ in 0..self.config.passes.max(1) {
            let stroke = sketchify_polygon(vertices, &self.config, &mut self.rng);
            self.inner.fill_polygon(&stroke, color);
        }
    }

    fn fill_circle(&mut self, circle: &Circle, color: Color) {
        let outline = flatten_circle(circle, SKETCH_CIRCLE_TOLERANCE);
        self.fill_polygon(&outline, color);
    }

    fn fill_background(&mut self, canvas: &Canvas, color: Color) {
        // A wobbly background would leave gaps at the canvas edge.
        self.inner.fill_background(canvas, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Collect {
        polygons: Vec<Vec<Point>>,
        backgrounds: usize,
    }

    impl Renderer for Collect {
        fn fill_polygon(&mut self, vertices: &[Point], _color: Color) {
            self.polygons.push(vertices.to_vec());
        }

        fn fill_background(&mut self, _canvas: &Canvas, _color: Color) {
            self.backgrounds += 1;
        }
    }

    fn triangle() -> Vec<Point> {
        vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(50.0, 80.0)]
    }

    #[test]
    fn sketchify_doubles_vertices() {
        let mut rng = Rng::new(1);
        let out = sketchify_polygon(&triangle(), &SketchyConfig::default(), &mut rng);
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn jitter_is_bounded() {
        let config = SketchyConfig::default().with_roughness(2.0).with_bowing(0.0);
        let mut rng = Rng::new(9);
        let tri = triangle();
        let out = sketchify_polygon(&tri, &config, &mut rng);
        for (orig, got) in tri.iter().zip(out.iter().step_by(2)) {
            assert!((orig.x - got.x).abs() <= 2.0);
            assert!((orig.y - got.y).abs() <= 2.0);
        }
    }

    #[test]
    fn zero_roughness_is_identity_at_vertices() {
        let config = SketchyConfig::default().with_roughness(0.0).with_bowing(0.0);
        let mut rng = Rng::new(3);
        let out = sketchify_polygon(&triangle(), &config, &mut rng);
        assert_eq!(out[0], Point::new(0.0, 0.0));
        assert_eq!(out[2], Point::new(100.0, 0.0));
        assert_eq!(out[1], Point::new(50.0, 0.0));
    }

    #[test]
    fn each_pass_reaches_inner() {
        let config = SketchyConfig::default().with_passes(3);
        let mut brush = SketchyRenderer::new(Collect::default(), config);
        brush.fill_polygon(&triangle(), Color::gray(0));
        assert_eq!(brush.inner().polygons.len(), 3);
        // Passes differ
        assert_ne!(brush.inner().polygons[0], brush.inner().polygons[1]);
    }

    #[test]
    fn circles_become_polygons() {
        let mut brush = SketchyRenderer::new(Collect::default(), SketchyConfig::default().with_passes(1));
        let circle = Circle::new(Point::new(50.0, 50.0), 20.0).unwrap();
        brush.fill_circle(&circle, Color::gray(0));
        let polys = &brush.inner().polygons;
        assert_eq!(polys.len(), 1);
        assert!(polys[0].len() > 8);
    }

    #[test]
    fn background_passes_through() {
        let canvas = Canvas::new(10.0, 10.0).unwrap();
        let mut brush = SketchyRenderer::new(Collect::default(), SketchyConfig::default());
        brush.fill_background(&canvas, Color::gray(40));
        let inner = brush.into_inner();
        assert_eq!(inner.backgrounds, 1);
        assert!(inner.polygons.is_empty());
    }

    #[test]
    fn same_seed_same_strokes() {
        let run = |seed| {
            let mut brush = SketchyRenderer::new(Collect::default(), SketchyConfig::default().with_seed(seed));
            brush.fill_polygon(&triangle(), Color::gray(0));
            brush.into_inner().polygons
        };
        assert_eq!(run(5), run(5));
        assert_ne!(run(5), run(6));
    }
}
