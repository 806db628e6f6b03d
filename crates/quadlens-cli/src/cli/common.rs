//! Common utilities shared across CLI commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use log::info;

use quadlens::{Canvas, Palette, Rng, Scene, SceneConfig, generate_scene};

use super::config::SceneFile;

/// Options that decide which scene gets generated.
#[derive(Args, Debug, Clone, Default)]
pub struct SceneArgs {
    /// Canvas width (default 600, or the config file's value)
    #[arg(long)]
    pub width: Option<f64>,

    /// Canvas height (default 600, or the config file's value)
    #[arg(long)]
    pub height: Option<f64>,

    /// Random seed; omit for a fresh composition every run
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// YAML scene config (see `quadlens example-config`)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Built-in palette name (see `quadlens palettes`)
    #[arg(short, long)]
    pub palette: Option<String>,
}

impl SceneArgs {
    /// Resolve the scene config: defaults, then the config file, then flags.
    pub fn scene_config(&self) -> Result<SceneConfig> {
        let mut config = SceneConfig::default();

        if let Some(path) = &self.config {
            let file = SceneFile::load(path)?;
            file.apply(&mut config)
                .with_context(|| format!("invalid config {}", path.display()))?;
        }

        if self.width.is_some() || self.height.is_some() {
            let width = self.width.unwrap_or(config.canvas.width());
            let height = self.height.unwrap_or(config.canvas.height());
            config.canvas = Canvas::new(width, height)?;
        }

        if let Some(name) = &self.palette {
            config.palette = Palette::builtin(name)?;
        }

        Ok(config)
    }

    /// The seed to use: the given one, or a fresh random one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random::<u64>)
    }

    /// Build the scene. Returns the seed so callers can report it.
    pub fn build(&self) -> Result<(Scene, u64)> {
        let config = self.scene_config()?;
        let seed = self.resolve_seed();
        info!("seed {}", seed);

        let mut rng = Rng::new(seed);
        let scene = generate_scene(&config, &mut rng).with_context(|| format!("generating scene (seed {})", seed))?;
        if scene.composition.lines.degraded {
            log::warn!("seed {} produced a degraded line pair; some corners may be empty", seed);
        }
        Ok((scene, seed))
    }
}
