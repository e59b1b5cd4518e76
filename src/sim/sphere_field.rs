//! Bouncing sphere field
//!
//! 50-200 randomly sized and colored spheres bouncing inside the surface,
//! drawn over a partial-alpha clear so each frame trails into the last.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounce::reflect_axis;
use super::module::{FrameError, SimulationModule};
use crate::Dimensions;
use crate::consts::*;
use crate::renderer::{Color, Surface};
use crate::settings::SphereFieldSettings;

/// A bouncing sphere
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Drawn diameter; the bounce inset on each axis is `radius / 2`
    pub radius: f32,
    pub color: Color,
}

/// Sphere field simulation module
pub struct SphereField {
    settings: SphereFieldSettings,
    rng: Pcg32,
    spheres: Vec<Sphere>,
}

impl SphereField {
    pub fn new(seed: u64, settings: SphereFieldSettings) -> Self {
        Self {
            settings,
            rng: Pcg32::seed_from_u64(seed),
            spheres: Vec::new(),
        }
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }
}

impl SimulationModule for SphereField {
    fn setup(&mut self, dims: Dimensions) {
        let count = self
            .rng
            .random_range(self.settings.min_spheres..=self.settings.max_spheres);
        log::debug!(
            "sphere field: spawning {count} spheres at {}x{}",
            dims.width,
            dims.height
        );

        self.spheres.clear();
        for _ in 0..count {
            let radius = self
                .rng
                .random_range(self.settings.min_radius..=self.settings.max_radius);
            let inset = radius / 2.0;
            let max_x = (dims.width_f() - inset).max(inset);
            let max_y = (dims.height_f() - inset).max(inset);
            self.spheres.push(Sphere {
                pos: Vec2::new(
                    self.rng.random_range(inset..=max_x),
                    self.rng.random_range(inset..=max_y),
                ),
                vel: Vec2::new(
                    self.rng
                        .random_range(-self.settings.max_speed..=self.settings.max_speed),
                    self.rng
                        .random_range(-self.settings.max_speed..=self.settings.max_speed),
                ),
                radius,
                color: Color::rgb(
                    self.rng.random_range(COLOR_CHANNEL_MIN..=u8::MAX),
                    self.rng.random_range(COLOR_CHANNEL_MIN..=u8::MAX),
                    self.rng.random_range(COLOR_CHANNEL_MIN..=u8::MAX),
                ),
            });
        }
    }

    fn update_and_render(&mut self, surface: &mut dyn Surface) -> Result<(), FrameError> {
        let dims = surface.dimensions();

        // Partial-alpha clear: this frame blends over the last (trail effect)
        surface.clear(Color::rgba(
            BACKGROUND_LEVEL,
            BACKGROUND_LEVEL,
            BACKGROUND_LEVEL,
            TRAIL_ALPHA,
        ));

        for sphere in &mut self.spheres {
            let inset = sphere.radius / 2.0;
            let (x, vx) = reflect_axis(
                sphere.pos.x,
                sphere.vel.x,
                inset,
                dims.width_f() - inset,
            );
            let (y, vy) = reflect_axis(
                sphere.pos.y,
                sphere.vel.y,
                inset,
                dims.height_f() - inset,
            );
            sphere.pos = Vec2::new(x, y);
            sphere.vel = Vec2::new(vx, vy);

            surface.set_fill(sphere.color);
            surface.draw_circle(sphere.pos, sphere.radius);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};

    fn setup_field(seed: u64, dims: Dimensions) -> SphereField {
        let mut field = SphereField::new(seed, SphereFieldSettings::default());
        field.setup(dims);
        field
    }

    fn assert_in_bounds(field: &SphereField, dims: Dimensions) {
        for sphere in field.spheres() {
            let inset = sphere.radius / 2.0;
            assert!(
                sphere.pos.x >= inset && sphere.pos.x <= dims.width_f() - inset,
                "x {} outside [{}, {}]",
                sphere.pos.x,
                inset,
                dims.width_f() - inset
            );
            assert!(
                sphere.pos.y >= inset && sphere.pos.y <= dims.height_f() - inset,
                "y {} outside [{}, {}]",
                sphere.pos.y,
                inset,
                dims.height_f() - inset
            );
        }
    }

    #[test]
    fn test_setup_respects_ranges() {
        let dims = Dimensions::new(800, 600);
        let field = setup_field(7, dims);

        let count = field.spheres().len();
        assert!((MIN_SPHERES..=MAX_SPHERES).contains(&count));

        for sphere in field.spheres() {
            assert!((MIN_SPHERE_RADIUS..=MAX_SPHERE_RADIUS).contains(&sphere.radius));
            assert!(sphere.vel.x.abs() <= MAX_SPHERE_SPEED);
            assert!(sphere.vel.y.abs() <= MAX_SPHERE_SPEED);
            assert!(sphere.color.r >= COLOR_CHANNEL_MIN);
            assert!(sphere.color.g >= COLOR_CHANNEL_MIN);
            assert!(sphere.color.b >= COLOR_CHANNEL_MIN);
        }
        assert_in_bounds(&field, dims);
    }

    #[test]
    fn test_seeded_setup_is_reproducible() {
        let dims = Dimensions::new(800, 600);
        let a = setup_field(42, dims);
        let b = setup_field(42, dims);
        assert_eq!(a.spheres(), b.spheres());
    }

    #[test]
    fn test_bounds_hold_over_many_frames() {
        let dims = Dimensions::new(800, 600);
        let mut field = setup_field(3, dims);
        let mut surface = RecordingSurface::new(dims);

        for _ in 0..300 {
            field.update_and_render(&mut surface).unwrap();
        }
        assert_in_bounds(&field, dims);
    }

    #[test]
    fn test_shrink_resize_clamps_on_next_update() {
        let mut field = setup_field(11, Dimensions::new(800, 600));
        let before: Vec<_> = field.spheres().to_vec();

        let small = Dimensions::new(120, 90);
        let mut surface = RecordingSurface::new(small);
        field.update_and_render(&mut surface).unwrap();

        // Same population, positions pulled into the new bounds
        assert_eq!(field.spheres().len(), before.len());
        assert_in_bounds(&field, small);
    }

    #[test]
    fn test_frame_starts_with_trail_clear() {
        let dims = Dimensions::new(800, 600);
        let mut field = setup_field(5, dims);
        let mut surface = RecordingSurface::new(dims);
        field.update_and_render(&mut surface).unwrap();

        let expected = Color::rgba(
            BACKGROUND_LEVEL,
            BACKGROUND_LEVEL,
            BACKGROUND_LEVEL,
            TRAIL_ALPHA,
        );
        assert_eq!(surface.commands()[0], DrawCommand::Clear(expected));

        // One fill + one circle per sphere after the clear
        let circles = surface
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count();
        assert_eq!(circles, field.spheres().len());
    }
}
