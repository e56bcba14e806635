use glam::Vec3;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use crate::camera::Camera;

pub const ROTATE_SPEED: f32 = 0.005;
pub const ZOOM_STEP: f32 = 0.95;
pub const MIN_DISTANCE: f32 = 0.5;
pub const MAX_DISTANCE: f32 = 80.0;

/// Damped orbit camera controls.
///
/// Pointer drags and scroll input accumulate as pending deltas; every tick
/// `update` folds a damped fraction of them into the camera's spherical
/// position around the target and decays the remainder, so motion eases
/// out instead of stopping dead. With no pending input the camera is left
/// exactly where it is, which lets a scene rig animate the position
/// underneath the controls.
#[derive(Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub damping: f32,
    pending_yaw: f32,
    pending_pitch: f32,
    pending_zoom: f32,
    dragging: bool,
    last_cursor: Option<(f32, f32)>,
}

impl OrbitControls {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            damping: 0.05,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            pending_zoom: 1.0,
            dragging: false,
            last_cursor: None,
        }
    }

    /// Feed a winit window event into the control state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.dragging = *state == ElementState::Pressed;
                if !self.dragging {
                    self.last_cursor = None;
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let cursor = (position.x as f32, position.y as f32);
                if self.dragging {
                    if let Some((last_x, last_y)) = self.last_cursor {
                        self.pending_yaw += (cursor.0 - last_x) * ROTATE_SPEED;
                        self.pending_pitch += (cursor.1 - last_y) * ROTATE_SPEED;
                    }
                }
                self.last_cursor = Some(cursor);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 40.0,
                };
                if lines > 0.0 {
                    self.pending_zoom *= ZOOM_STEP;
                } else if lines < 0.0 {
                    self.pending_zoom /= ZOOM_STEP;
                }
            }
            _ => {}
        }
    }

    /// Damped convergence step; call once per tick
    pub fn update(&mut self, camera: &mut Camera) {
        let offset = camera.position - self.target;
        let radius = offset.length().max(1e-4);

        let mut yaw = offset.x.atan2(offset.z);
        let mut pitch = (offset.y / radius).clamp(-1.0, 1.0).asin();

        yaw -= self.pending_yaw * self.damping;
        pitch += self.pending_pitch * self.damping;

        // Keep the camera off the poles so look_at stays well-defined
        let pitch_limit = std::f32::consts::FRAC_PI_2 - 0.01;
        pitch = pitch.clamp(-pitch_limit, pitch_limit);

        let zoom = 1.0 + (self.pending_zoom - 1.0) * self.damping;
        let radius = (radius * zoom).clamp(MIN_DISTANCE, MAX_DISTANCE);

        camera.position = self.target
            + Vec3::new(
                radius * pitch.cos() * yaw.sin(),
                radius * pitch.sin(),
                radius * pitch.cos() * yaw.cos(),
            );
        camera.target = self.target;

        // Ease the remaining input toward rest
        let decay = 1.0 - self.damping;
        self.pending_yaw *= decay;
        self.pending_pitch *= decay;
        self.pending_zoom = 1.0 + (self.pending_zoom - 1.0) * decay;
    }

    /// Whether any input is still being damped out
    pub fn is_settled(&self) -> bool {
        self.pending_yaw.abs() < 1e-6
            && self.pending_pitch.abs() < 1e-6
            && (self.pending_zoom - 1.0).abs() < 1e-6
    }

    #[cfg(test)]
    pub(crate) fn inject_rotation(&mut self, yaw: f32, pitch: f32) {
        self.pending_yaw += yaw;
        self.pending_pitch += pitch;
    }
}
