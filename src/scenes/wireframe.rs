use glam::Vec3;

use crate::camera::Camera;
use crate::context::SceneContext;
use crate::geometry::Geometry;
use crate::scene::{Material, Scene};
use crate::viewport::Viewport;

/// Single static wireframe icosahedron
pub fn create_wireframe_scene(viewport: Viewport) -> SceneContext {
    let mut scene = Scene::new();
    let icosahedron = scene.add_geometry(Geometry::icosahedron(1.0));
    scene.add_object(Vec3::ZERO, icosahedron, Material::wireframe([1.0, 1.0, 1.0]));

    let camera = Camera::new(Vec3::new(1.0, 1.0, 2.0), viewport.aspect());
    SceneContext::new(scene, camera, viewport)
}
