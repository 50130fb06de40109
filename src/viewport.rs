//! Viewport sizing and device-pixel-ratio handling.
//!
//! Tracks the window's logical size and scale factor, and derives the values
//! the rest of the viewer needs on resize: the camera aspect ratio and the
//! surface size in physical pixels. The device pixel ratio is clamped so
//! high-density displays don't quadruple the fill cost.

/// Upper bound applied to the device pixel ratio when rendering.
pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Logical window size plus display scale factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    scale_factor: f64,
}

impl Viewport {
    /// Create a viewport from a logical size and the window's scale factor.
    pub fn new(width: u32, height: u32, scale_factor: f64) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            scale_factor,
        }
    }

    /// Apply a new logical size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
    }

    /// Apply a new display scale factor (window moved between monitors).
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    /// Logical width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Logical height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Aspect ratio (width over height).
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Device pixel ratio used for rendering, clamped to [`MAX_PIXEL_RATIO`].
    #[inline]
    pub fn pixel_ratio(&self) -> f32 {
        (self.scale_factor as f32).min(MAX_PIXEL_RATIO)
    }

    /// Surface size in physical pixels: logical size times the clamped ratio.
    pub fn render_size(&self) -> (u32, u32) {
        let ratio = self.pixel_ratio();
        (
            ((self.width as f32 * ratio).round() as u32).max(1),
            ((self.height as f32 * ratio).round() as u32).max(1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_matches_logical_size() {
        let mut viewport = Viewport::new(800, 600, 1.0);
        assert_eq!(viewport.aspect(), 800.0 / 600.0);

        viewport.resize(1920, 1080);
        assert_eq!(viewport.aspect(), 1920.0 / 1080.0);
        assert_eq!(viewport.render_size(), (1920, 1080));
    }

    #[test]
    fn test_pixel_ratio_is_clamped() {
        let viewport = Viewport::new(100, 100, 3.0);
        assert_eq!(viewport.pixel_ratio(), MAX_PIXEL_RATIO);
        assert_eq!(viewport.render_size(), (200, 200));
    }

    #[test]
    fn test_fractional_scale_factor() {
        let viewport = Viewport::new(100, 100, 1.5);
        assert_eq!(viewport.pixel_ratio(), 1.5);
        assert_eq!(viewport.render_size(), (150, 150));
    }

    #[test]
    fn test_zero_size_clamps_to_one() {
        // Minimized windows report 0x0; the surface must stay valid.
        let mut viewport = Viewport::new(800, 600, 1.0);
        viewport.resize(0, 0);
        assert_eq!((viewport.width(), viewport.height()), (1, 1));
        assert_eq!(viewport.render_size(), (1, 1));
    }
}
