//! Error types for quadlens.
//!
//! ## Rust Lesson #20: Error Handling
//!
//! Rust uses `Result<T, E>` instead of exceptions. Each enum below names
//! the ways an operation can fail; callers bubble them up with `?`.
//!
//! Expected "nothing here" outcomes (two circles that don't overlap, a
//! corner with no region) are `Option`s, not errors.

use std::fmt;

/// Failures of the geometry core.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Canvas dimensions must be finite and positive.
    InvalidCanvas { width: f64, height: f64 },
    /// Circle radius must be finite and positive.
    InvalidRadius(f64),
    /// Grid cell size and density must be finite and positive.
    InvalidSpacing { cell_size: f64, density: f64 },
    /// The tiler needs at least one color to pick from.
    EmptyPalette,
    /// A line through an interior point crossed the boundary fewer than
    /// twice. This is a broken invariant, not bad user input.
    TooFewCrossings { found: usize, origin_x: f64, origin_y: f64 },
    /// A configured sampling range has `lo > hi` or non-finite bounds.
    InvalidRange { name: &'static str, lo: f64, hi: f64 },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidCanvas { width, height } => {
                write!(f, "invalid canvas size {}x{}", width, height)
            }
            GeometryError::InvalidRadius(r) => write!(f, "invalid circle radius {}", r),
            GeometryError::InvalidSpacing { cell_size, density } => write!(
                f,
                "invalid grid spacing (cell size {}, density {})",
                cell_size, density
            ),
            GeometryError::EmptyPalette => write!(f, "palette has no colors"),
            GeometryError::TooFewCrossings { found, origin_x, origin_y } => write!(
                f,
                "geometry invariant violated: line through ({:.3}, {:.3}) crosses the canvas boundary {} time(s)",
                origin_x, origin_y, found
            ),
            GeometryError::InvalidRange { name, lo, hi } => {
                write!(f, "invalid {} range [{}, {}]", name, lo, hi)
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Failures while producing output.
#[derive(Debug)]
pub enum RenderError {
    /// Writing the SVG document failed.
    Svg(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Svg(msg) => write!(f, "SVG write error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Failures while reading colors and palettes.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// A color string could not be parsed.
    BadColor(String),
    /// No built-in palette has this name.
    UnknownPalette(String),
    /// A palette needs at least one color.
    Empty,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::BadColor(s) => write!(f, "cannot parse color '{}'", s),
            PaletteError::UnknownPalette(name) => write!(f, "unknown palette '{}'", name),
            PaletteError::Empty => write!(f, "palette has no colors"),
        }
    }
}

impl std::error::Error for PaletteError {}
