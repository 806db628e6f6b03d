//! Shape templates stamped at each tile placement.

use std::f64::consts::PI;

use crate::geometry::{Corner, Point};

/// The polygon drawn at each placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Triangle,
    Square,
    Hexagon,
    Diamond,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Triangle,
        ShapeKind::Square,
        ShapeKind::Hexagon,
        ShapeKind::Diamond,
    ];

    /// The default shape for a corner region.
    pub fn for_corner(corner: Corner) -> Self {
        Self::ALL[corner.index()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Triangle => "triangle",
            ShapeKind::Square => "square",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Diamond => "diamond",
        }
    }

    /// Look up a shape by (case-insensitive) name.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        Self::ALL.into_iter().find(|s| s.name() == lower)
    }

    /// Vertices around the local origin for a shape of the given size.
    pub fn vertices(&self, size: f64) -> Vec<Point> {
        match self {
            ShapeKind::Triangle => {
                let h = size * 3f64.sqrt() / 2.0;
                vec![
                    Point::new(0.0, -size * 0.6),
                    Point::new(-size * 0.5, h * 0.4),
                    Point::new(size * 0.5, h * 0.4),
                ]
            }
            ShapeKind::Square => {
                let half = size * 0.5;
                vec![
                    Point::new(-half, -half),
                    Point::new(half, -half),
                    Point::new(half, half),
                    Point::new(-half, half),
                ]
            }
            ShapeKind::Hexagon => {
                let r = size * 0.5;
                (0..6)
                    .map(|i| {
                        let a = i as f64 * PI / 3.0 - PI / 2.0;
                        Point::new(a.cos() * r, a.sin() * r)
                    })
                    .collect()
            }
            ShapeKind::Diamond => vec![
                Point::new(0.0, -size * 0.5),
                Point::new(size * 0.4, 0.0),
                Point::new(0.0, size * 0.5),
                Point::new(-size * 0.4, 0.0),
            ],
        }
    }

    /// Vertices rotated by `rotation` radians, then moved to `center`.
    pub fn place(&self, center: Point, size: f64, rotation: f64) -> Vec<Point> {
        let (sin_r, cos_r) = rotation.sin_cos();
        self.vertices(size)
            .into_iter()
            .map(|p| {
                Point::new(
                    center.x + p.x * cos_r - p.y * sin_r,
                    center.y + p.x * sin_r + p.y * cos_r,
                )
            })
            .collect()
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
