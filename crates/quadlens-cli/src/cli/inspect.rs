//! Inspect command - dump the scene geometry as JSON.
//!
//! Placements are summarized per region (count plus grid parameters)
//! rather than listed; a default scene has a few hundred of them.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use quadlens::{Circle, Point, Scene, Segment};

use super::common::SceneArgs;

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    #[command(flatten)]
    pub scene: SceneArgs,

    /// Indent the JSON
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Serialize)]
pub struct SceneReport {
    pub seed: u64,
    pub canvas: [f64; 2],
    pub palette: String,
    pub lines: LinesReport,
    pub intersection: [f64; 2],
    pub regions: Vec<RegionReport>,
    pub circles: Vec<CircleReport>,
    pub lens: Option<LensReport>,
    pub placement_count: usize,
}

#[derive(Debug, Serialize)]
pub struct LinesReport {
    pub line1: [[f64; 2]; 2],
    pub line2: [[f64; 2]; 2],
    pub angle1: f64,
    pub attempts: usize,
    pub degraded: bool,
}

#[derive(Debug, Serialize)]
pub struct RegionReport {
    pub corner: &'static str,
    pub shape: &'static str,
    pub vertices: Vec<[f64; 2]>,
    pub area: f64,
    pub cell_size: f64,
    pub density: f64,
    pub placements: usize,
}

#[derive(Debug, Serialize)]
pub struct CircleReport {
    pub center: [f64; 2],
    pub radius: f64,
}

#[derive(Debug, Serialize)]
pub struct LensReport {
    pub intersections: [[f64; 2]; 2],
    pub sweeps: [f64; 2],
}

fn xy(p: Point) -> [f64; 2] {
    [p.x, p.y]
}

fn segment(s: &Segment) -> [[f64; 2]; 2] {
    [xy(s.p1), xy(s.p2)]
}

fn circle(c: &Circle) -> CircleReport {
    CircleReport { center: xy(c.center), radius: c.radius() }
}

impl SceneReport {
    pub fn new(scene: &Scene, seed: u64) -> Self {
        let canvas = scene.canvas();
        let lines = &scene.composition.lines;

        Self {
            seed,
            canvas: [canvas.width(), canvas.height()],
            palette: scene.palette.name.clone(),
            lines: LinesReport {
                line1: segment(&lines.line1),
                line2: segment(&lines.line2),
                angle1: lines.angle1,
                attempts: lines.attempts,
                degraded: lines.degraded,
            },
            intersection: xy(scene.composition.intersection),
            regions: scene
                .regions
                .iter()
                .map(|r| RegionReport {
                    corner: r.corner.name(),
                    shape: r.shape.name(),
                    vertices: r.polygon.vertices.iter().copied().map(xy).collect(),
                    area: r.polygon.area(),
                    cell_size: r.params.cell_size,
                    density: r.params.density,
                    placements: r.placements.len(),
                })
                .collect(),
            circles: scene.circles.iter().map(circle).collect(),
            lens: scene.lens.as_ref().map(|lens| {
                let (first, second) = lens.intersections;
                LensReport {
                    intersections: [xy(first), xy(second)],
                    sweeps: [lens.arcs[0].sweep, lens.arcs[1].sweep],
                }
            }),
            placement_count: scene.placement_count(),
        }
    }
}

pub fn cmd_inspect(args: &InspectArgs) -> Result<()> {
    let (scene, seed) = args.scene.build()?;
    let report = SceneReport::new(&scene, seed);

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);
    Ok(())
}
