pub mod animation;
pub mod assets;
pub mod camera;
pub mod cli;
pub mod clock;
pub mod context;
pub mod controls;
pub mod font;
pub mod geometry;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod text;
pub mod viewport;

pub use scenes::{create_grid_scene, create_text_scene, create_wireframe_scene};
