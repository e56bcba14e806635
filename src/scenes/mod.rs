mod grid;
mod text;
mod wireframe;

pub use grid::{create_grid_scene, CAMERA_ORBIT_RADIUS, CENTER_OBJECT, CUBE_POSITIONS};
pub use text::{create_text_scene, populate_text_scene, DONUT_COUNT, MESSAGE};
pub use wireframe::create_wireframe_scene;
