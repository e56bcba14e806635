/// Device pixel ratios above this are clamped to bound rendering cost
pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Logical window size plus the device pixel ratio.
///
/// Mirrors the current window area; the renderer sizes its surface from
/// `physical_size()` and the camera derives its aspect from `aspect()`.
/// Updates report whether anything actually changed so resize handling
/// stays idempotent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32, pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    /// Update the logical size, returns true if it changed
    pub fn set_size(&mut self, width: u32, height: u32) -> bool {
        if self.width == width && self.height == height {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }

    /// Update the device pixel ratio, returns true if it changed
    pub fn set_pixel_ratio(&mut self, pixel_ratio: f32) -> bool {
        if self.pixel_ratio == pixel_ratio {
            return false;
        }
        self.pixel_ratio = pixel_ratio;
        true
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width over height in logical units
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Device pixel ratio clamped to MAX_PIXEL_RATIO
    pub fn effective_pixel_ratio(&self) -> f32 {
        self.pixel_ratio.min(MAX_PIXEL_RATIO)
    }

    /// Render surface size in physical pixels
    pub fn physical_size(&self) -> (u32, u32) {
        let ratio = self.effective_pixel_ratio();
        (
            (self.width as f32 * ratio).round() as u32,
            (self.height as f32 * ratio).round() as u32,
        )
    }
}
