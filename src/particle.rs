// Simple particle struct to keep track of normalized position, velocity,
// radius and color. Positions live in [0, 1] on both axes and are scaled to
// the canvas only when drawn.

use crate::color::Color;
use crate::config::FieldConfig;
use rand::Rng;
use vecmath::{vec2_add, Vector2};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(
        pos_x: f64,
        pos_y: f64,
        vel_x: f64,
        vel_y: f64,
        radius: f64,
        color: Color,
    ) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            color,
        }
    }

    // Sample order is part of the seeded output, keep it stable
    pub fn random<R: Rng + ?Sized>(rng: &mut R, config: &FieldConfig) -> Particle {
        let pos_x = rng.gen::<f64>();
        let pos_y = rng.gen::<f64>();
        let (min_radius, max_radius) = config.radius_range;
        let radius = rng.gen_range(min_radius, max_radius);
        let vel_x = rng.gen_range(-config.max_speed, config.max_speed);
        let vel_y = rng.gen_range(-config.max_speed, config.max_speed);
        let color = if rng.gen::<bool>() {
            config.palette[0]
        } else {
            config.palette[1]
        };
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius, color)
    }

    /// Moves the particle by one frame of velocity.
    ///
    /// An axis that ends up outside `[0, 1]` has its velocity negated for the
    /// next frame. The position is left where it landed, so a particle can sit
    /// up to one step past the edge before heading back.
    pub fn advance(&mut self) {
        self.pos = vec2_add(self.pos, self.vel);
        for axis in 0..2 {
            if self.pos[axis] < 0.0 || self.pos[axis] > 1.0 {
                self.vel[axis] = -self.vel[axis];
            }
        }
    }
}
