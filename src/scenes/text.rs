use std::collections::hash_map::RandomState;
use std::f32::consts::PI;
use std::hash::{BuildHasher, Hash, Hasher};
use std::path::Path;

use anyhow::Result;
use glam::Vec3;

use crate::assets::{load_png, load_typeface, AssetLoad};
use crate::camera::Camera;
use crate::context::{FontTask, SceneContext};
use crate::font::TypefaceFont;
use crate::geometry::Geometry;
use crate::scene::{Material, Scene};
use crate::text::{text_geometry, TextParams};
use crate::viewport::Viewport;

pub const MESSAGE: &str = "Hello wgpu!";
pub const DONUT_COUNT: usize = 500;

pub const FONT_PATH: &str = "assets/fonts/helvetiker_regular.typeface.json";
pub const MATCAP_PATH: &str = "assets/matcaps/8.png";

/// Matcap-shaded 3D text surrounded by a field of toruses.
///
/// The scene starts empty; the font and matcap loads run on worker
/// threads and the frame loop picks their results up in a later tick.
/// A failed font load leaves the scene permanently empty.
pub fn create_text_scene(viewport: Viewport) -> SceneContext {
    let scene = Scene::new();
    let camera = Camera::new(Vec3::new(1.0, 1.0, 2.0), viewport.aspect());
    let mut context = SceneContext::new(scene, camera, viewport);

    context.font_task = Some(FontTask {
        load: AssetLoad::spawn(|| load_typeface(Path::new(FONT_PATH))),
        on_load: populate_text_scene,
    });
    context.matcap_load = Some(AssetLoad::spawn(|| load_png(Path::new(MATCAP_PATH))));
    context
}

/// Build and insert the centered text mesh plus the decorative torus
/// field. Placement uses hashed indices so the scatter needs no RNG
/// dependency.
pub fn populate_text_scene(scene: &mut Scene, font: &TypefaceFont) -> Result<()> {
    let text = text_geometry(font, MESSAGE, &TextParams::default())?;
    let text_handle = scene.add_geometry(text);
    scene.add_object(Vec3::ZERO, text_handle, Material::Matcap);

    let donut = scene.add_geometry(Geometry::torus(0.3, 0.2, 20, 45));
    let hasher_builder = RandomState::new();
    for i in 0..DONUT_COUNT {
        let mut hasher = hasher_builder.build_hasher();
        i.hash(&mut hasher);
        let hash = hasher.finish();
        let fraction = |shift: u32| ((hash >> shift) % 1000) as f32 / 1000.0;

        let position = Vec3::new(
            (fraction(0) - 0.5) * 15.0,
            (fraction(10) - 0.5) * 15.0,
            (fraction(20) - 0.5) * 15.0,
        );
        let object = scene.add_object(position, donut, Material::Matcap);
        object.rotation = Vec3::new(
            fraction(30) * PI,
            fraction(40) * PI,
            fraction(50) * PI,
        );
        object.scale = Vec3::splat(fraction(54));
    }

    println!("Text scene populated: {} objects", scene.len());
    Ok(())
}
