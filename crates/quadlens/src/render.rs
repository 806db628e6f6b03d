//! Drawing a scene through a back-end.
//!
//! The geometry never knows how it will be drawn. A back-end implements
//! [`Renderer`]; [`render_scene`] walks the scene in painter's order:
//!
//! 1. background
//! 2. region tiles, in corner order
//! 3. circle 1 overlay, then circle 1
//! 4. circle 2, then its overlay
//! 5. lens, then its overlay

use lyon_geom::{Angle, Arc, point, vector};

use crate::geometry::{Canvas, Circle, Point};
use crate::palette::{BACKGROUND, CIRCLE_ONE, CIRCLE_TWO, Color, LENS};
use crate::lens::LENS_ARC_SEGMENTS;
use crate::scene::Scene;

/// Tolerance used when a back-end stamps circles as polygons.
pub const CIRCLE_TOLERANCE: f64 = 0.1;

/// A drawing back-end.
///
/// ## Rust Lesson #12: Traits with default methods
///
/// Only `fill_polygon` is required. A back-end that can draw circles
/// natively (like SVG) overrides `fill_circle`; one that can't inherits a
/// version that flattens the circle into a polygon.
pub trait Renderer {
    /// Fill a closed polygon. Fewer than three vertices draws nothing.
    fn fill_polygon(&mut self, vertices: &[Point], color: Color);

    fn fill_circle(&mut self, circle: &Circle, color: Color) {
        let outline = flatten_circle(circle, CIRCLE_TOLERANCE);
        self.fill_polygon(&outline, color);
    }

    fn fill_background(&mut self, canvas: &Canvas, color: Color) {
        self.fill_polygon(&canvas.to_polygon().vertices, color);
    }
}

/// Approximate a circle by a polygon whose edges stay within `tolerance`
/// of the true boundary.
pub fn flatten_circle(circle: &Circle, tolerance: f64) -> Vec<Point> {
    let r = circle.radius();
    let arc = Arc {
        center: point(circle.center.x, circle.center.y),
        radii: vector(r, r),
        start_angle: Angle::radians(0.0),
        sweep_angle: Angle::two_pi(),
        x_rotation: Angle::zero(),
    };

    let mut points = Vec::new();
    // Each segment's end is the next one's start; the last end closes the
    // loop back onto the first point, so only ends are kept.
    arc.for_each_flattened(tolerance.max(1e-6), &mut |segment| {
        points.push(Point::new(segment.to.x, segment.to.y));
    });
    points
}

/// What to draw besides the required layers.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub background: Color,
    /// Draw the translucent overlays around circles and lens.
    pub overlays: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { background: BACKGROUND, overlays: true }
    }
}

/// Draw a scene onto a back-end.
pub fn render_scene<R: Renderer + ?Sized>(scene: &Scene, options: &RenderOptions, renderer: &mut R) {
    renderer.fill_background(scene.canvas(), options.background);

    let grid_angle = scene.composition.lines.angle1;
    for region in &scene.regions {
        for placement in &region.placements {
            let vertices = region.shape.place(placement.position, placement.size, grid_angle);
            renderer.fill_polygon(&vertices, scene.palette.get(placement.color_index));
        }
    }

    let overlay = |c: Color| c.with_alpha(scene.overlay_alpha);
    let [c1, c2] = &scene.circles;

    if options.overlays {
        renderer.fill_circle(c1, overlay(CIRCLE_ONE));
    }
    renderer.fill_circle(c1, CIRCLE_ONE);

    renderer.fill_circle(c2, CIRCLE_TWO);
    if options.overlays {
        renderer.fill_circle(c2, overlay(CIRCLE_TWO));
    }

    if let Some(lens) = &scene.lens {
        let outline = lens.outline(LENS_ARC_SEGMENTS);
        renderer.fill_polygon(&outline, LENS);
        if options.overlays {
            renderer.fill_polygon(&outline, overlay(LENS));
        }
    }
}
