use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::animation::{AnimationFunction, Axis};
use crate::geometry::Geometry;

/// Index into the scene's geometry pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryHandle(pub usize);

/// How an object is shaded
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Unlit solid color, optionally drawn as wireframe
    Basic { color: [f32; 3], wireframe: bool },
    /// Matcap-textured shading
    Matcap,
}

impl Material {
    pub fn solid(color: [f32; 3]) -> Self {
        Material::Basic {
            color,
            wireframe: false,
        }
    }

    pub fn wireframe(color: [f32; 3]) -> Self {
        Material::Basic {
            color,
            wireframe: true,
        }
    }
}

/// One renderable object: a base position plus the animation strategy
/// that displaces it every tick.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub index: usize,
    pub base: Vec3,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    pub geometry: GeometryHandle,
    pub material: Material,
    pub animation: AnimationFunction,
    pub spin: Option<Axis>,
}

impl SceneObject {
    pub fn new(index: usize, base: Vec3, geometry: GeometryHandle, material: Material) -> Self {
        Self {
            index,
            base,
            position: base,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            geometry,
            material,
            animation: AnimationFunction::Static,
            spin: None,
        }
    }

    /// Recompute position and rotation for elapsed time `t`
    pub fn advance(&mut self, t: f32) {
        self.position = self.base + self.animation.offset(t);
        if let Some(axis) = self.spin {
            self.rotation = axis.unit() * t;
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

/// Flat object list plus the geometry pool they index into
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    geometries: Vec<Geometry>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_geometry(&mut self, geometry: Geometry) -> GeometryHandle {
        self.geometries.push(geometry);
        GeometryHandle(self.geometries.len() - 1)
    }

    pub fn geometry(&self, handle: GeometryHandle) -> &Geometry {
        &self.geometries[handle.0]
    }

    /// Add an object built with the next free index
    pub fn add_object(
        &mut self,
        base: Vec3,
        geometry: GeometryHandle,
        material: Material,
    ) -> &mut SceneObject {
        let index = self.objects.len();
        self.objects
            .push(SceneObject::new(index, base, geometry, material));
        &mut self.objects[index]
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [SceneObject] {
        &mut self.objects
    }

    pub fn object_mut(&mut self, index: usize) -> Option<&mut SceneObject> {
        self.objects.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Apply every object's animation for elapsed time `t`
    pub fn advance(&mut self, t: f32) {
        for object in &mut self.objects {
            object.advance(t);
        }
    }
}
