//! # quadlens
//!
//! Generative compositions built from two perpendicular lines, four tiled
//! corner regions, and two overlapping circles with a lens between them.
//!
//! ## Rust Lesson #7: Modules
//!
//! Rust modules are like ES6 modules but more explicit:
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level
//!
//! The geometry modules (`edges`, `partition`, `tiling`, `lens`) never
//! draw anything; `render` and its back-ends (`svg`, `sketchy`) never make
//! geometric decisions. `scene` ties the two halves together.

pub mod edges;
pub mod error;
pub mod geometry;
pub mod intersect;
pub mod lens;
pub mod palette;
pub mod partition;
pub mod render;
pub mod rng;
pub mod scene;
pub mod shapes;
pub mod sketchy;
pub mod svg;
pub mod tiling;

// Re-export common types at crate root for convenience.
pub use edges::{EdgeLabel, classify_edge, connects_opposite_edges, connects_same_edges, edge_intersections};
pub use error::{GeometryError, PaletteError, RenderError};
pub use geometry::{Canvas, Circle, Corner, Point, Polygon, Segment};
pub use intersect::{line_intersection, point_in_polygon};
pub use lens::{Lens, circle_intersections, lens_outline};
pub use palette::{Color, Palette};
pub use partition::{
    Composition, LineOrientation, LinePair, LinePairConfig, Partition, Region, build_composition,
    build_perpendicular_lines, partition_into_corners,
};
pub use render::{RenderOptions, Renderer, render_scene};
pub use rng::{RandomSource, Rng};
pub use scene::{Scene, SceneConfig, generate_scene};
pub use shapes::ShapeKind;
pub use sketchy::{SketchyConfig, SketchyRenderer};
pub use svg::SvgRenderer;
pub use tiling::{Lattice, Placement, TileParams, Tiles, tile_region};
