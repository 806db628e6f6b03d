//! quadlens - generate partition/lens compositions
//!
//! Usage:
//!   quadlens render [-o out.svg] [--seed N] [--png out.png]  Write a composition
//!   quadlens inspect [--seed N] [--pretty]                    Dump scene geometry as JSON
//!   quadlens palettes                                         List built-in palettes
//!   quadlens example-config                                   Print an example YAML config

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

use cli::{InspectArgs, RenderArgs};

#[derive(Parser)]
#[command(name = "quadlens", version)]
#[command(about = "Perpendicular lines, tiled corners and a circle lens")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate a composition and write it as SVG (and optionally PNG)
    Render(RenderArgs),
    /// Generate a composition and print its geometry as JSON
    Inspect(InspectArgs),
    /// List built-in palettes
    Palettes,
    /// Print an example scene config (YAML)
    ExampleConfig,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cmd = Cmd::parse();
    match cmd.action {
        Action::Render(args) => cli::cmd_render(&args),
        Action::Inspect(args) => cli::cmd_inspect(&args),
        Action::Palettes => cli::cmd_palettes(),
        Action::ExampleConfig => {
            print!("{}", cli::EXAMPLE_CONFIG);
            Ok(())
        }
    }
}
