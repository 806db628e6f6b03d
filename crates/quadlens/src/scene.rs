//! A complete composition: partition, tiled regions, two circles and their
//! lens.
//!
//! `generate_scene` is the only place that decides the order of random
//! draws, so a seed reproduces a scene exactly:
//!
//! 1. cell size per corner
//! 2. the line pair
//! 3. density per corner
//! 4. each region's placements, in corner order
//! 5. circle 1 (distance, direction, radius), then circle 2

use std::f64::consts::TAU;

use log::{debug, info};

use crate::error::GeometryError;
use crate::geometry::{Canvas, Circle, Corner, Polygon};
use crate::lens::Lens;
use crate::palette::{OVERLAY_ALPHA, Palette};
use crate::partition::{Composition, LinePairConfig, build_composition_with};
use crate::rng::RandomSource;
use crate::shapes::ShapeKind;
use crate::tiling::{Placement, TileParams, tile_region};

/// How one corner region is tiled.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionStyle {
    pub shape: ShapeKind,
    /// Cell size is drawn uniformly from this range.
    pub cell_size: (f64, f64),
    /// Density is drawn from this range, then reduced by
    /// [`SceneConfig::density_reduce`].
    pub density: (f64, f64),
}

/// Placement of the two circles relative to the heart.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleConfig {
    /// Distance of circle 1's center from the heart.
    pub heart_distance: (f64, f64),
    /// Circle 1's radius exceeds its distance from the heart by this much,
    /// so the heart is always inside it.
    pub radius_margin: (f64, f64),
    /// Distance between the centers, as multiples of circle 1's radius.
    pub second_distance: (f64, f64),
    /// Circle 2's radius, as multiples of circle 1's radius.
    pub second_radius: (f64, f64),
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            heart_distance: (20.0, 80.0),
            radius_margin: (10.0, 60.0),
            second_distance: (1.0, 1.5),
            second_radius: (0.5, 1.0),
        }
    }
}

/// Everything that shapes a scene apart from the seed.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub canvas: Canvas,
    pub palette: Palette,
    /// One style per corner, in [`Corner::ALL`] order.
    pub regions: [RegionStyle; 4],
    pub density_reduce: f64,
    pub circles: CircleConfig,
    pub overlay_alpha: u8,
    pub lines: LinePairConfig,
}

impl SceneConfig {
    /// Defaults on a canvas of a different size.
    pub fn with_canvas(canvas: Canvas) -> Self {
        Self { canvas, ..Self::default() }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        let style = |corner: Corner, cell_size, density| RegionStyle {
            shape: ShapeKind::for_corner(corner),
            cell_size,
            density,
        };
        Self {
            canvas: Canvas::default(),
            palette: Palette::vending(),
            regions: [
                style(Corner::TopLeft, (30.0, 90.0), (1.7, 2.3)),
                style(Corner::TopRight, (20.0, 80.0), (1.8, 2.2)),
                style(Corner::BottomRight, (50.0, 90.0), (1.6, 2.4)),
                style(Corner::BottomLeft, (35.0, 85.0), (1.9, 2.1)),
            ],
            density_reduce: 0.4,
            circles: CircleConfig::default(),
            overlay_alpha: OVERLAY_ALPHA,
            lines: LinePairConfig::default(),
        }
    }
}

/// A region with its placements.
#[derive(Debug, Clone, PartialEq)]
pub struct TiledRegion {
    pub corner: Corner,
    pub polygon: Polygon,
    pub shape: ShapeKind,
    pub params: TileParams,
    pub placements: Vec<Placement>,
}

/// A generated composition, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub composition: Composition,
    pub palette: Palette,
    pub regions: Vec<TiledRegion>,
    pub circles: [Circle; 2],
    /// `None` when the circles don't properly overlap.
    pub lens: Option<Lens>,
    pub overlay_alpha: u8,
}

impl Scene {
    pub fn canvas(&self) -> &Canvas {
        &self.composition.canvas
    }

    /// Total number of placed shapes.
    pub fn placement_count(&self) -> usize {
        self.regions.iter().map(|r| r.placements.len()).sum()
    }
}

fn sample_range<R: RandomSource + ?Sized>(
    rng: &mut R,
    name: &'static str,
    (lo, hi): (f64, f64),
) -> Result<f64, GeometryError> {
    if !(lo.is_finite() && hi.is_finite()) || lo > hi {
        return Err(GeometryError::InvalidRange { name, lo, hi });
    }
    Ok(rng.uniform(lo, hi))
}

/// Generate a scene.
///
/// # Errors
/// Bad ranges in `config` ([`GeometryError::InvalidRange`]), densities
/// reduced to zero or below ([`GeometryError::InvalidSpacing`]), or a broken
/// geometric invariant.
pub fn generate_scene<R: RandomSource + ?Sized>(config: &SceneConfig, rng: &mut R) -> Result<Scene, GeometryError> {
    let mut cell_sizes = [0.0; 4];
    for (slot, style) in cell_sizes.iter_mut().zip(&config.regions) {
        *slot = sample_range(rng, "cell size", style.cell_size)?;
    }

    let composition = build_composition_with(config.canvas, &config.lines, rng)?;

    let mut densities = [0.0; 4];
    for (slot, style) in densities.iter_mut().zip(&config.regions) {
        *slot = sample_range(rng, "density", style.density)? - config.density_reduce;
    }

    let grid_angle = composition.lines.angle1;
    let mut regions = Vec::with_capacity(composition.regions.len());
    for region in &composition.regions {
        let i = region.corner.index();
        let params = TileParams::new(grid_angle, cell_sizes[i], densities[i]);
        let placements: Vec<Placement> =
            tile_region(&region.polygon, &params, config.palette.len(), rng)?.collect();
        debug!("{} region: {} placements", region.corner.name(), placements.len());

        regions.push(TiledRegion {
            corner: region.corner,
            polygon: region.polygon.clone(),
            shape: config.regions[i].shape,
            params,
            placements,
        });
    }

    let circles = place_circles(&composition, &config.circles, rng)?;
    let lens = Lens::resolve(&circles[0], &circles[1]);
    if lens.is_none() {
        debug!("circles do not overlap; no lens");
    }

    let scene = Scene {
        composition,
        palette: config.palette.clone(),
        regions,
        circles,
        lens,
        overlay_alpha: config.overlay_alpha,
    };
    info!(
        "scene: {} region(s), {} placements, lens {}",
        scene.regions.len(),
        scene.placement_count(),
        if scene.lens.is_some() { "present" } else { "absent" }
    );
    Ok(scene)
}

fn place_circles<R: RandomSource + ?Sized>(
    composition: &Composition,
    config: &CircleConfig,
    rng: &mut R,
) -> Result<[Circle; 2], GeometryError> {
    let heart = composition.intersection;

    let dist = sample_range(rng, "heart distance", config.heart_distance)?;
    let dir = rng.uniform(0.0, TAU);
    let (m_lo, m_hi) = config.radius_margin;
    let r1 = sample_range(rng, "radius margin", (dist + m_lo, dist + m_hi))?;
    let c1 = Circle::new(heart.offset(dir, dist), r1)?;

    let (d_lo, d_hi) = config.second_distance;
    let dist2 = sample_range(rng, "second distance", (r1 * d_lo, r1 * d_hi))?;
    let dir2 = rng.uniform(0.0, TAU);
    let (s_lo, s_hi) = config.second_radius;
    let r2 = sample_range(rng, "second radius", (r1 * s_lo, r1 * s_hi))?;
    let c2 = Circle::new(c1.center.offset(dir2, dist2), r2)?;

    Ok([c1, c2])
}
