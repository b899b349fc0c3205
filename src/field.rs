//! The particle background simulation.
//!
//! A `ParticleField` owns a fixed set of particles in normalized coordinates
//! and knows the pixel size of the surface it draws to. Each frame it moves
//! every particle, reflects the ones that left the unit square and paints them
//! as glowing dots.

use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::particle::Particle;
use crate::scheduler::FrameScheduler;
use crate::surface::DrawSurface;
use crate::viewport::{SurfaceSize, Viewport};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct ParticleField {
    particles: Vec<Particle>,
    surface: SurfaceSize,
    device_pixel_ratio: f64,
    config: FieldConfig,
}

impl ParticleField {
    /// Builds a field for `viewport`, drawing every random value from `rng`.
    ///
    /// The particle count is fixed here and never changes afterwards.
    pub fn new<R: Rng + ?Sized>(viewport: Viewport, config: FieldConfig, rng: &mut R) -> Self {
        let count = config.particle_count_for(&viewport);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle::random(rng, &config));
        }
        ParticleField {
            particles,
            surface: SurfaceSize::scaled(
                viewport.width,
                viewport.height,
                viewport.device_pixel_ratio,
            ),
            device_pixel_ratio: viewport.device_pixel_ratio,
            config,
        }
    }

    /// Same seed, same particles, bit for bit.
    pub fn with_seed(viewport: Viewport, config: FieldConfig, seed: u64) -> Self {
        ParticleField::new(viewport, config, &mut StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(viewport: Viewport, config: FieldConfig) -> Self {
        ParticleField::new(viewport, config, &mut StdRng::from_entropy())
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn surface_size(&self) -> SurfaceSize {
        self.surface
    }

    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Applies the current surface size to `surface`. Called once after
    /// construction, before the first frame.
    pub fn attach<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> Result<(), FieldError> {
        surface.resize(self.surface)
    }

    /// Recomputes the surface size for a new viewport and applies it.
    ///
    /// Keeps the device pixel ratio sampled at construction. Particles are
    /// left alone since they are stored in normalized coordinates.
    pub fn resize<S: DrawSurface + ?Sized>(
        &mut self,
        width: f64,
        height: f64,
        surface: &mut S,
    ) -> Result<(), FieldError> {
        self.surface = SurfaceSize::scaled(width, height, self.device_pixel_ratio);
        surface.resize(self.surface)
    }

    /// Advances every particle by one frame.
    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.advance();
        }
    }

    /// Paints the current particle positions over a cleared surface.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> Result<(), FieldError> {
        let SurfaceSize { width, height, .. } = self.surface;
        surface.clear(width, height);
        surface.set_global_alpha(self.config.global_alpha);

        let glow = self.config.glow_blur * self.device_pixel_ratio;
        for p in &self.particles {
            surface.fill_circle(
                p.pos[0] * width as f64,
                p.pos[1] * height as f64,
                p.radius * self.device_pixel_ratio,
                p.color,
                glow,
            )?;
        }
        Ok(())
    }

    /// One display frame: update, render, then ask for the next frame.
    pub fn run_frame<S, F>(&mut self, surface: &mut S, scheduler: &mut F) -> Result<(), FieldError>
    where
        S: DrawSurface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        #[cfg(feature = "frame-timing")]
        let _timer = crate::utils::Timer::new("ParticleField::run_frame");

        self.update();
        self.render(surface)?;
        scheduler.request_frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Color, PRIMARY, SECONDARY};

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Resize(SurfaceSize),
        Clear(u32, u32),
        Alpha(f64),
        Circle { x: f64, y: f64, radius: f64, color: Color, glow: f64 },
    }

    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<Op>,
    }

    impl DrawSurface for RecordingSurface {
        fn resize(&mut self, size: SurfaceSize) -> Result<(), FieldError> {
            self.ops.push(Op::Resize(size));
            Ok(())
        }

        fn clear(&mut self, width: u32, height: u32) {
            self.ops.push(Op::Clear(width, height));
        }

        fn set_global_alpha(&mut self, alpha: f64) {
            self.ops.push(Op::Alpha(alpha));
        }

        fn fill_circle(
            &mut self,
            x: f64,
            y: f64,
            radius: f64,
            color: Color,
            glow: f64,
        ) -> Result<(), FieldError> {
            self.ops.push(Op::Circle { x, y, radius, color, glow });
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingScheduler {
        requests: usize,
    }

    impl FrameScheduler for CountingScheduler {
        fn request_frame(&mut self) -> Result<(), FieldError> {
            self.requests += 1;
            Ok(())
        }
    }

    fn field(width: f64, height: f64, dpr: f64, seed: u64) -> ParticleField {
        ParticleField::with_seed(Viewport::new(width, height, dpr), FieldConfig::default(), seed)
    }

    #[test]
    fn large_viewport_spawns_seventy_in_range() {
        let field = field(1000.0, 1000.0, 1.0, 1);
        assert_eq!(field.len(), 70);
        for p in field.particles() {
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 1.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 1.0);
            assert!(p.radius >= 0.3 && p.radius < 1.5);
            assert!(p.vel[0] >= -0.000275 && p.vel[0] < 0.000275);
            assert!(p.vel[1] >= -0.000275 && p.vel[1] < 0.000275);
            assert!(p.color == PRIMARY || p.color == SECONDARY);
        }
    }

    #[test]
    fn small_viewport_spawns_forty() {
        assert_eq!(field(400.0, 300.0, 1.0, 1).len(), 40);
    }

    #[test]
    fn same_seed_same_particles() {
        let a = field(1280.0, 720.0, 2.0, 42);
        let b = field(1280.0, 720.0, 2.0, 42);
        assert_eq!(a.particles(), b.particles());

        let c = field(1280.0, 720.0, 2.0, 43);
        assert_ne!(a.particles(), c.particles());
    }

    #[test]
    fn both_palette_colors_show_up() {
        let field = field(1000.0, 1000.0, 1.0, 3);
        assert!(field.particles().iter().any(|p| p.color == PRIMARY));
        assert!(field.particles().iter().any(|p| p.color == SECONDARY));
    }

    #[test]
    fn particles_never_drift_away() {
        let mut field = field(1000.0, 800.0, 1.0, 9);
        let count = field.len();
        let slack = field.config().max_speed + 1e-12;
        // Long enough for the fast particles to bounce off both walls
        for _ in 0..20_000 {
            field.update();
            for p in field.particles() {
                assert!(p.pos[0] >= -slack && p.pos[0] <= 1.0 + slack);
                assert!(p.pos[1] >= -slack && p.pos[1] <= 1.0 + slack);
            }
        }
        assert_eq!(field.len(), count);
    }

    #[test]
    fn update_preserves_radius_and_color() {
        let mut field = field(1000.0, 1000.0, 1.0, 5);
        let before: Vec<_> = field.particles().iter().map(|p| (p.radius, p.color)).collect();
        for _ in 0..100 {
            field.update();
        }
        let after: Vec<_> = field.particles().iter().map(|p| (p.radius, p.color)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn resize_only_touches_surface() {
        let mut field = field(800.0, 600.0, 2.0, 11);
        let before = field.particles().to_vec();
        let mut surface = RecordingSurface::default();

        field.resize(1200.0, 900.0, &mut surface).unwrap();

        assert_eq!(field.particles(), &before[..]);
        let expected = SurfaceSize {
            width: 2400,
            height: 1800,
            css_width: 1200.0,
            css_height: 900.0,
        };
        assert_eq!(field.surface_size(), expected);
        assert_eq!(surface.ops, vec![Op::Resize(expected)]);
    }

    #[test]
    fn unreported_pixel_ratio_draws_at_one() {
        let field = field(1000.0, 500.0, 0.0, 2);
        assert_eq!(field.device_pixel_ratio(), 1.0);
        assert_eq!(field.surface_size().width, 1000);

        let mut surface = RecordingSurface::default();
        field.render(&mut surface).unwrap();
        match surface.ops[2] {
            Op::Circle { radius, glow, .. } => {
                assert_eq!(radius, field.particles()[0].radius);
                assert_eq!(glow, 14.0);
            }
            ref other => panic!("expected a circle, got {:?}", other),
        }
    }

    #[test]
    fn attach_sizes_backing_store_by_pixel_ratio() {
        let field = field(1000.0, 500.0, 1.5, 2);
        let mut surface = RecordingSurface::default();
        field.attach(&mut surface).unwrap();
        assert_eq!(
            surface.ops,
            vec![Op::Resize(SurfaceSize {
                width: 1500,
                height: 750,
                css_width: 1000.0,
                css_height: 500.0,
            })]
        );
    }

    #[test]
    fn frame_clears_draws_and_reschedules() {
        let mut field = field(1000.0, 1000.0, 2.0, 21);
        let mut surface = RecordingSurface::default();
        let mut scheduler = CountingScheduler::default();

        field.run_frame(&mut surface, &mut scheduler).unwrap();

        assert_eq!(surface.ops[0], Op::Clear(2000, 2000));
        assert_eq!(surface.ops[1], Op::Alpha(0.55));
        assert_eq!(surface.ops.len(), 2 + field.len());
        assert_eq!(scheduler.requests, 1);

        for (op, p) in surface.ops[2..].iter().zip(field.particles()) {
            assert_eq!(
                *op,
                Op::Circle {
                    x: p.pos[0] * 2000.0,
                    y: p.pos[1] * 2000.0,
                    radius: p.radius * 2.0,
                    color: p.color,
                    glow: 28.0,
                }
            );
        }
    }

    #[test]
    fn frames_can_be_stepped_without_a_display() {
        let mut field = field(640.0, 480.0, 1.0, 8);
        let mut surface = RecordingSurface::default();
        let mut scheduler = CountingScheduler::default();
        for _ in 0..60 {
            field.run_frame(&mut surface, &mut scheduler).unwrap();
        }
        assert_eq!(scheduler.requests, 60);
        assert_eq!(surface.ops.len(), 60 * (2 + 40));
    }

    #[test]
    fn render_uses_resized_surface() {
        let mut field = field(800.0, 600.0, 1.0, 4);
        let mut surface = RecordingSurface::default();
        field.resize(1200.0, 900.0, &mut surface).unwrap();
        surface.ops.clear();

        field.render(&mut surface).unwrap();

        assert_eq!(surface.ops[0], Op::Clear(1200, 900));
        match surface.ops[2] {
            Op::Circle { x, y, .. } => {
                let p = field.particles()[0];
                assert_eq!(x, p.pos[0] * 1200.0);
                assert_eq!(y, p.pos[1] * 900.0);
            }
            ref other => panic!("expected a circle, got {:?}", other),
        }
    }
}
