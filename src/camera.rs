use glam::{Mat4, Vec3};

/// Default vertical field of view, radians (75 degrees)
pub const DEFAULT_FOV_Y: f32 = 75.0 * std::f32::consts::PI / 180.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 100.0;

/// Perspective camera looking at a target point.
///
/// Aspect is derived from the viewport and must be refreshed through
/// `set_aspect` before the next render whenever the viewport changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(position: Vec3, aspect: f32) -> Self {
        Self {
            position,
            target: Vec3::ZERO,
            fov_y: DEFAULT_FOV_Y,
            aspect,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }

    /// Update the aspect ratio after a viewport change
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Animates the camera on a fixed-radius horizontal orbit:
/// `x = R cos(t + phase)`, `z = R sin(t + phase)`, constant height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitRig {
    pub radius: f32,
    pub phase: f32,
    pub height: f32,
}

impl OrbitRig {
    pub fn apply(&self, camera: &mut Camera, t: f32) {
        let angle = t + self.phase;
        camera.position = Vec3::new(
            self.radius * angle.cos(),
            self.height,
            self.radius * angle.sin(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn rig_keeps_camera_on_circle() {
        let rig = OrbitRig {
            radius: 12.0,
            phase: FRAC_PI_4,
            height: 6.0,
        };
        let mut camera = Camera::new(Vec3::new(6.0, 6.0, 12.0), 1.0);

        for i in 0..200 {
            let t = i as f32 * 0.1;
            rig.apply(&mut camera, t);

            let horizontal = camera.position.x * camera.position.x
                + camera.position.z * camera.position.z;
            assert!(
                (horizontal - 144.0).abs() < 1e-3,
                "left R=12 circle at t={}: {}",
                t,
                horizontal
            );
            assert_eq!(camera.position.y, 6.0);
        }
    }

    #[test]
    fn set_aspect_changes_projection() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), 1.0);
        let square = camera.projection_matrix();

        camera.set_aspect(2.0);
        let wide = camera.projection_matrix();

        assert_ne!(square, wide);
        assert_eq!(camera.aspect, 2.0);
    }

    #[test]
    fn view_matrix_looks_at_target() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 10.0), 1.0);
        camera.target = Vec3::ZERO;

        // A point at the target projects onto the view axis
        let view_space = camera.view_matrix() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(view_space.x.abs() < 1e-6);
        assert!(view_space.y.abs() < 1e-6);
        assert!((view_space.z + 10.0).abs() < 1e-5);
    }
}
