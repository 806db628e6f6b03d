//! CLI command implementations.
//!
//! - `render` - write a composition as SVG/PNG
//! - `inspect` - print the scene geometry as JSON
//! - `palettes` - list built-in palettes
//!
//! Every command that builds a scene shares [`SceneArgs`].

pub mod common;
pub mod config;
pub mod inspect;
pub mod palettes;
pub mod render;

pub use common::SceneArgs;
pub use config::EXAMPLE_CONFIG;
pub use inspect::{InspectArgs, cmd_inspect};
pub use palettes::cmd_palettes;
pub use render::{RenderArgs, cmd_render};
