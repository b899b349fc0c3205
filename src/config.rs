//! Tunables for the particle background.
//!
//! `FieldConfig::default()` reproduces the look of the portfolio page; tests
//! and embedders can override individual values with struct update syntax.

use crate::color::{Color, PRIMARY, SECONDARY};
use crate::viewport::Viewport;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Viewports whose shorter side is below this many CSS pixels count as small.
    pub small_viewport_threshold: f64,
    /// Particle count on small viewports.
    pub small_particle_count: usize,
    /// Particle count everywhere else.
    pub particle_count: usize,
    /// Half-open `[min, max)` range radii are drawn from.
    pub radius_range: (f64, f64),
    /// Velocity components are drawn from `[-max_speed, max_speed)`.
    pub max_speed: f64,
    /// Each particle picks one of these with equal probability.
    pub palette: [Color; 2],
    /// Global alpha applied to every particle each frame.
    pub global_alpha: f64,
    /// Glow blur in CSS pixels, scaled by the device pixel ratio when drawn.
    pub glow_blur: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            small_viewport_threshold: 520.0,
            small_particle_count: 40,
            particle_count: 70,
            radius_range: (0.3, 1.5),
            max_speed: 0.000275,
            palette: [PRIMARY, SECONDARY],
            global_alpha: 0.55,
            glow_blur: 14.0,
        }
    }
}

impl FieldConfig {
    pub fn particle_count_for(&self, viewport: &Viewport) -> usize {
        if viewport.is_small(self.small_viewport_threshold) {
            self.small_particle_count
        } else {
            self.particle_count
        }
    }
}
