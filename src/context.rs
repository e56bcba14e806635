use winit::event::WindowEvent;

use crate::assets::{AssetLoad, TextureData};
use crate::camera::{Camera, OrbitRig};
use crate::clock::SceneClock;
use crate::controls::OrbitControls;
use crate::font::TypefaceFont;
use crate::scene::Scene;
use crate::viewport::Viewport;

/// Scene mutation to run when a font finishes loading
pub type FontCallback = fn(&mut Scene, &TypefaceFont) -> anyhow::Result<()>;

/// Pending font load plus the population step it unlocks
pub struct FontTask {
    pub load: AssetLoad<TypefaceFont>,
    pub on_load: FontCallback,
}

/// Events surfaced to the app layer by a tick
pub enum TickEvent {
    /// A matcap texture finished decoding and should be uploaded
    MatcapReady(TextureData),
}

/// Owns everything one scene needs per frame: objects, camera, orbit
/// rig, controls, viewport, clock and in-flight asset loads. `advance`
/// is the per-tick update; rendering and rescheduling stay in the app
/// layer.
pub struct SceneContext {
    pub scene: Scene,
    pub camera: Camera,
    pub rig: Option<OrbitRig>,
    pub controls: OrbitControls,
    pub viewport: Viewport,
    pub clock: SceneClock,
    pub font_task: Option<FontTask>,
    pub matcap_load: Option<AssetLoad<TextureData>>,
}

impl SceneContext {
    pub fn new(scene: Scene, camera: Camera, viewport: Viewport) -> Self {
        let target = camera.target;
        Self {
            scene,
            camera,
            rig: None,
            controls: OrbitControls::new(target),
            viewport,
            clock: SceneClock::new(),
            font_task: None,
            matcap_load: None,
        }
    }

    /// One frame of scene state: poll asset loads, apply object
    /// animations, animate the rig, run the damped control update.
    pub fn advance(&mut self, t: f32) -> Vec<TickEvent> {
        let mut events = Vec::new();

        if let Some(mut task) = self.font_task.take() {
            match task.load.poll() {
                Some(Ok(font)) => {
                    if let Err(e) = (task.on_load)(&mut self.scene, &font) {
                        eprintln!("Text population failed: {e:#}");
                    }
                }
                // Fire-and-forget: the scene simply stays without the
                // text content
                Some(Err(e)) => eprintln!("Font load failed: {e:#}"),
                None => self.font_task = Some(task),
            }
        }

        if let Some(mut load) = self.matcap_load.take() {
            match load.poll() {
                Some(Ok(texture)) => events.push(TickEvent::MatcapReady(texture)),
                Some(Err(e)) => eprintln!("Matcap load failed: {e:#}"),
                None => self.matcap_load = Some(load),
            }
        }

        self.scene.advance(t);

        if let Some(rig) = self.rig {
            rig.apply(&mut self.camera, t);
        }
        self.controls.update(&mut self.camera);

        events
    }

    /// Viewport change from the host window. Recomputes the camera
    /// aspect; returns whether anything changed so the caller can skip
    /// redundant surface reconfiguration.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let changed = self.viewport.set_size(width, height);
        if changed {
            self.camera.set_aspect(self.viewport.aspect());
        }
        changed
    }

    /// Device pixel ratio change (monitor switch or DPI change)
    pub fn set_pixel_ratio(&mut self, ratio: f32) -> bool {
        self.viewport.set_pixel_ratio(ratio)
    }

    /// Route pointer input to the orbit controls
    pub fn handle_input(&mut self, event: &WindowEvent) {
        self.controls.process_event(event);
    }
}
