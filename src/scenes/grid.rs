use std::f32::consts::FRAC_PI_4;

use glam::Vec3;

use crate::animation::{AnimationFunction, Axis, OrbitPlane};
use crate::camera::{Camera, OrbitRig};
use crate::context::SceneContext;
use crate::geometry::Geometry;
use crate::scene::{Material, Scene};
use crate::viewport::Viewport;

/// 3x3x3 corner-and-center layout shared by all nine cubes
pub const CUBE_POSITIONS: [[f32; 3]; 9] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
    [0.0, 0.0, 0.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
];

/// Index of the cube the debug panel sliders drive
pub const CENTER_OBJECT: usize = 4;

pub const CAMERA_ORBIT_RADIUS: f32 = 12.0;
pub const CAMERA_HEIGHT: f32 = 6.0;

const YELLOW: [f32; 3] = [1.0, 0.847, 0.0];
const BLUE: [f32; 3] = [0.0, 0.482, 1.0];
const RED: [f32; 3] = [1.0, 0.0, 0.0];

/// Nine animated cubes with the camera circling the whole arrangement
pub fn create_grid_scene(viewport: Viewport) -> SceneContext {
    let mut scene = Scene::new();
    let cube = scene.add_geometry(Geometry::cuboid(1.0, 1.0, 1.0, 2));

    for (i, base) in CUBE_POSITIONS.iter().enumerate() {
        let base = Vec3::from_array(*base);
        // Depth layer picks the material: wireframe middle, solid
        // front and back
        let material = if base.z == 0.0 {
            Material::wireframe(YELLOW)
        } else if base.z == 1.0 {
            Material::solid(BLUE)
        } else {
            Material::solid(RED)
        };

        let object = scene.add_object(base, cube, material);
        object.animation = animation_for(i);
        if i == 8 {
            object.spin = Some(Axis::Y);
        }
    }

    let camera = Camera::new(
        Vec3::new(6.0, CAMERA_HEIGHT, 12.0),
        viewport.aspect(),
    );
    let mut context = SceneContext::new(scene, camera, viewport);
    context.rig = Some(OrbitRig {
        radius: CAMERA_ORBIT_RADIUS,
        phase: FRAC_PI_4,
        height: CAMERA_HEIGHT,
    });
    context
}

fn animation_for(index: usize) -> AnimationFunction {
    match index {
        0 | 7 => AnimationFunction::orbit(OrbitPlane::Xy),
        1 => AnimationFunction::orbit(OrbitPlane::Yx),
        2 => AnimationFunction::orbit(OrbitPlane::Yz),
        3 | 5 => AnimationFunction::orbit(OrbitPlane::Xz),
        6 => AnimationFunction::TangentSweep { phase: 0.0 },
        8 => AnimationFunction::Swing {
            axis: Axis::X,
            amplitude: 1.0,
            phase: 0.0,
        },
        _ => AnimationFunction::Static,
    }
}
