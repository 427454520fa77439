//! Viewport-dependent camera placement.

use serde::{Deserialize, Serialize};

/// Height multiplier applied to the base height on portrait viewports.
pub const PORTRAIT_HEIGHT_SCALE: f32 = 1.25;

/// Size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Create a viewport. Dimensions below one pixel are raised to one so the
    /// aspect ratio stays finite.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Camera height for the map vantage point.
///
/// Narrow viewports need the camera further up to keep the whole map in
/// frame: `1 / aspect + base`, with the base scaled by
/// [`PORTRAIT_HEIGHT_SCALE`] in portrait.
pub fn camera_height(viewport: Viewport, base_height: f32) -> f32 {
    let base = if viewport.is_landscape() {
        base_height
    } else {
        base_height * PORTRAIT_HEIGHT_SCALE
    };
    1.0 / viewport.aspect() + base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landscape_height() {
        let viewport = Viewport::new(1600.0, 800.0);
        assert!(viewport.is_landscape());
        assert!((camera_height(viewport, 3.5) - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_portrait_height() {
        let viewport = Viewport::new(800.0, 1600.0);
        assert!(!viewport.is_landscape());
        assert!((camera_height(viewport, 3.5) - (2.0 + 3.5 * 1.25)).abs() < 1e-6);
    }

    #[test]
    fn test_square_counts_as_portrait() {
        let viewport = Viewport::new(500.0, 500.0);
        assert!((camera_height(viewport, 2.0) - 3.5).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_viewport_stays_finite() {
        let viewport = Viewport::new(0.0, 0.0);
        assert!(camera_height(viewport, 3.5).is_finite());
    }
}
