// Viewport dimensions read from the host window, and the canvas sizes derived
// from them.

use crate::error::FieldError;
use web_sys::Window;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Viewport {
        Viewport {
            width,
            height,
            device_pixel_ratio: sanitize_ratio(device_pixel_ratio),
        }
    }

    pub fn from_window(window: &Window) -> Result<Viewport, FieldError> {
        let width = window
            .inner_width()?
            .as_f64()
            .ok_or_else(|| FieldError::Host("innerWidth is not a number".to_owned()))?;
        let height = window
            .inner_height()?
            .as_f64()
            .ok_or_else(|| FieldError::Host("innerHeight is not a number".to_owned()))?;
        Ok(Viewport::new(width, height, window.device_pixel_ratio()))
    }

    pub fn is_small(&self, threshold: f64) -> bool {
        self.width.min(self.height) < threshold
    }
}

// Browsers that don't report a ratio hand back 0 or NaN
fn sanitize_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        1.0
    }
}

/// Backing pixel size plus the CSS size the canvas is displayed at.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
    pub css_width: f64,
    pub css_height: f64,
}

impl SurfaceSize {
    // Same truncation the DOM applies when a float is assigned to canvas.width
    pub fn scaled(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> SurfaceSize {
        SurfaceSize {
            width: (css_width * device_pixel_ratio).max(0.0) as u32,
            height: (css_height * device_pixel_ratio).max(0.0) as u32,
            css_width,
            css_height,
        }
    }
}
