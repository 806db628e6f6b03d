//! YAML scene configs.
//!
//! Every field is optional; whatever is missing keeps the built-in default.
//! Regions are addressed by corner name, so a file can restyle just one.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use quadlens::{Canvas, Corner, Palette, SceneConfig, ShapeKind};

/// Printed by `quadlens example-config`.
pub const EXAMPLE_CONFIG: &str = r##"# quadlens scene config. Every key is optional.
canvas:
  width: 600
  height: 600

# A built-in palette name, or a list of colors
palette: vending
# palette: ["#264653", "#2a9d8f", "#e9c46a", "#f4a261", "#e76f51"]

# Subtracted from every sampled density
density_reduce: 0.4

# Alpha (0-255) of the overlays around circles and lens
overlay_alpha: 50

regions:
  - corner: top-left
    shape: triangle
    cell_size: [30, 90]
    density: [1.7, 2.3]
  - corner: bottom-right
    shape: hexagon
    cell_size: [50, 90]

circles:
  heart_distance: [20, 80]
  radius_margin: [10, 60]
  second_distance: [1.0, 1.5]
  second_radius: [0.5, 1.0]
"##;

/// A scene config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneFile {
    #[serde(default)]
    pub canvas: Option<CanvasSize>,

    #[serde(default)]
    pub palette: Option<PaletteSpec>,

    #[serde(default)]
    pub density_reduce: Option<f64>,

    #[serde(default)]
    pub overlay_alpha: Option<u8>,

    #[serde(default)]
    pub regions: Vec<RegionSpec>,

    #[serde(default)]
    pub circles: Option<CircleSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

/// Either a built-in palette name or an explicit color list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaletteSpec {
    Named(String),
    Colors(Vec<String>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionSpec {
    /// top-left, top-right, bottom-right or bottom-left
    pub corner: String,
    #[serde(default)]
    pub shape: Option<String>,
    #[serde(default)]
    pub cell_size: Option<[f64; 2]>,
    #[serde(default)]
    pub density: Option<[f64; 2]>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CircleSpec {
    #[serde(default)]
    pub heart_distance: Option<[f64; 2]>,
    #[serde(default)]
    pub radius_margin: Option<[f64; 2]>,
    #[serde(default)]
    pub second_distance: Option<[f64; 2]>,
    #[serde(default)]
    pub second_radius: Option<[f64; 2]>,
}

fn pair([lo, hi]: [f64; 2]) -> (f64, f64) {
    (lo, hi)
}

impl SceneFile {
    /// Load a config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Write the file's values over `config`.
    pub fn apply(&self, config: &mut SceneConfig) -> Result<()> {
        if let Some(canvas) = &self.canvas {
            config.canvas = Canvas::new(canvas.width, canvas.height)?;
        }

        match &self.palette {
            Some(PaletteSpec::Named(name)) => config.palette = Palette::builtin(name)?,
            Some(PaletteSpec::Colors(colors)) => config.palette = Palette::parse("custom", colors.as_slice())?,
            None => {}
        }

        if let Some(reduce) = self.density_reduce {
            config.density_reduce = reduce;
        }
        if let Some(alpha) = self.overlay_alpha {
            config.overlay_alpha = alpha;
        }

        for spec in &self.regions {
            let corner = Corner::ALL
                .into_iter()
                .find(|c| c.name() == spec.corner)
                .ok_or_else(|| anyhow!("unknown corner '{}'", spec.corner))?;
            let style = &mut config.regions[corner.index()];

            if let Some(name) = &spec.shape {
                style.shape = ShapeKind::from_name(name).ok_or_else(|| anyhow!("unknown shape '{}'", name))?;
            }
            if let Some(range) = spec.cell_size {
                style.cell_size = pair(range);
            }
            if let Some(range) = spec.density {
                style.density = pair(range);
            }
        }

        if let Some(circles) = &self.circles {
            let c = &mut config.circles;
            if let Some(r) = circles.heart_distance {
                c.heart_distance = pair(r);
            }
            if let Some(r) = circles.radius_margin {
                c.radius_margin = pair(r);
            }
            if let Some(r) = circles.second_distance {
                c.second_distance = pair(r);
            }
            if let Some(r) = circles.second_radius {
                c.second_radius = pair(r);
            }
        }

        Ok(())
    }
}
