// cli.rs - Command-line interface configuration
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// Nine animated cubes with an orbiting camera
    Grid,
    /// Font-loaded 3D text with a torus field
    Text,
    /// Static wireframe icosahedron
    Wireframe,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "orbit-scenes")]
#[command(about = "Animated demo scenes on wgpu", long_about = None)]
pub struct Cli {
    /// Scene to run
    #[arg(long = "scene", value_enum, default_value = "grid")]
    pub scene: SceneKind,

    /// Disable the debug panel overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
