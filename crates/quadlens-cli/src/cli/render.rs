//! Render command - write a composition as SVG, optionally rasterized to PNG.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Args;
use log::debug;

use quadlens::{RenderOptions, Renderer, Scene, SketchyConfig, SketchyRenderer, SvgRenderer, render_scene};

use super::common::SceneArgs;

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub scene: SceneArgs,

    /// Output SVG file ("-" for stdout)
    #[arg(short, long, default_value = "composition.svg")]
    pub output: String,

    /// Hand-drawn look: jittered, multi-pass outlines
    #[arg(long)]
    pub sketchy: bool,

    /// Sketchy jitter, in canvas units
    #[arg(long, default_value_t = 1.5)]
    pub roughness: f64,

    /// Sketchy strokes per shape
    #[arg(long, default_value_t = 2)]
    pub passes: usize,

    /// Skip the translucent circle and lens overlays
    #[arg(long)]
    pub no_overlays: bool,

    /// Also write a PNG
    #[arg(long)]
    pub png: Option<PathBuf>,

    /// PNG scale factor
    #[arg(long, default_value_t = 1.0)]
    pub png_scale: f64,
}

pub fn cmd_render(args: &RenderArgs) -> Result<()> {
    let (scene, seed) = args.scene.build()?;
    let options = RenderOptions { overlays: !args.no_overlays, ..RenderOptions::default() };
    let title = format!("quadlens seed {}", seed);

    let svg = if args.sketchy {
        let config = SketchyConfig::default()
            .with_roughness(args.roughness)
            .with_passes(args.passes)
            .with_seed(seed);
        let mut renderer = SketchyRenderer::new(SvgRenderer::new(scene.canvas()), config);
        draw(&scene, &options, &mut renderer);
        renderer.into_inner().finish(&title)?
    } else {
        let mut renderer = SvgRenderer::new(scene.canvas());
        draw(&scene, &options, &mut renderer);
        renderer.finish(&title)?
    };

    if args.output == "-" {
        io::stdout().write_all(svg.as_bytes()).context("writing SVG to stdout")?;
    } else {
        fs::write(&args.output, &svg).with_context(|| format!("writing {}", args.output))?;
        eprintln!("Wrote: {} (seed {}, {} shapes)", args.output, seed, scene.placement_count());
    }

    if let Some(png_path) = &args.png {
        let canvas = scene.canvas();
        generate_png(&svg, png_path, args.png_scale, canvas.width(), canvas.height())?;
        eprintln!("Wrote: {}", png_path.display());
    }

    Ok(())
}

fn draw<R: Renderer>(scene: &Scene, options: &RenderOptions, renderer: &mut R) {
    render_scene(scene, options, renderer);
    debug!("rendered {} shapes in {} regions", scene.placement_count(), scene.regions.len());
}

/// Rasterize SVG content with resvg.
fn generate_png(svg_content: &str, png_path: &Path, scale: f64, width: f64, height: f64) -> Result<()> {
    use tiny_skia::{Pixmap, Transform};

    if !(scale.is_finite() && scale > 0.0) {
        return Err(anyhow!("PNG scale must be positive, got {}", scale));
    }

    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg_content, &options).context("parsing generated SVG")?;

    let pixmap_width = (width * scale).ceil() as u32;
    let pixmap_height = (height * scale).ceil() as u32;
    let mut pixmap = Pixmap::new(pixmap_width, pixmap_height)
        .ok_or_else(|| anyhow!("could not create a {}x{} pixmap", pixmap_width, pixmap_height))?;

    let transform = Transform::from_scale(scale as f32, scale as f32);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap.save_png(png_path).with_context(|| format!("writing {}", png_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10" viewBox="0 0 10 10"><rect width="10" height="10" fill="#ff0000"/></svg>"##;

    #[test]
    fn png_is_scaled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        generate_png(SQUARE, &path, 2.0, 10.0, 10.0).unwrap();

        let pixmap = tiny_skia::Pixmap::load_png(&path).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (20, 20));
    }

    #[test]
    fn bad_scale_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(generate_png(SQUARE, &dir.path().join("x.png"), 0.0, 10.0, 10.0).is_err());
    }
}
